use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use fmcatalog::comments::StripOptions;
use fmcatalog::escape::EscapeStyle;
use fmcatalog::export::{DEFAULT_INDENT_WIDTH, ExportOptions, export_catalog};
use fmcatalog::parser::{CatalogParser, FsSource};
use fmcatalog::tree::render_tree;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Export a FileMaker script catalog XML into indented text files"
)]
struct Cli {
    /// FileMaker XML export containing a <ScriptCatalog>
    #[arg(value_name = "XML_FILE")]
    xml_file: Utf8PathBuf,

    /// Output root [default: ScriptCatalog next to XML_FILE]
    #[arg(short, long, value_name = "DIR")]
    output: Option<Utf8PathBuf>,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// How to make group and script names safe for the filesystem
    #[arg(long, value_enum, default_value_t = EscapeStyle::Underscore)]
    escape: EscapeStyle,

    /// Keep `//` line comments (block comments are always removed)
    #[arg(long)]
    keep_line_comments: bool,

    /// Do not list the generated tree
    #[arg(long)]
    no_list: bool,

    /// Print the export summary as JSON instead of the tree
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let output_root = cli.output.clone().unwrap_or_else(|| {
        cli.xml_file
            .parent()
            .map(|p| p.join("ScriptCatalog"))
            .unwrap_or_else(|| Utf8PathBuf::from("ScriptCatalog"))
    });

    let mut parser = CatalogParser::new(FsSource);
    let catalog = parser
        .parse_catalog_file(&cli.xml_file)
        .with_context(|| format!("Failed to export {}", cli.xml_file))?;
    info!(
        "found {} scripts in {}",
        catalog.script_count(),
        cli.xml_file
    );

    let options = ExportOptions {
        indent_width: cli.indent,
        escape: cli.escape,
        strip: StripOptions {
            keep_line_comments: cli.keep_line_comments,
        },
    };
    let summary = export_catalog(&catalog, &output_root, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.no_list {
        print!("{}", render_tree(&output_root)?);
    }
    Ok(())
}
