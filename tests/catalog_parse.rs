use anyhow::Result;
use camino::Utf8PathBuf;
use fmcatalog::model::*;
use fmcatalog::parser::{CatalogParser, ContentSource, parse_catalog_from_text};
use std::collections::HashMap;

struct MemSource {
    files: HashMap<String, String>,
}

impl ContentSource for MemSource {
    fn read_to_string(&mut self, path: &camino::Utf8Path) -> Result<String> {
        self.files
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("not found: {}", path))
    }
}

const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FMSaveAsXML version="2.2.3.0">
  <Structure>
    <AddAction>
      <ScriptCatalog membercount="3">
        <Group name="Startup">
          <Script name="OnOpen">
            <Step enable="True" id="89" name="If">
              <StepText>If [ Get ( SystemPlatform ) = 1 ]</StepText>
              <Step enable="True" id="141" name="Set Variable">
                <StepText>Set Variable [ $x ; 1 ]</StepText>
              </Step>
            </Step>
            <Step enable="False" id="70" name="End If">
              <StepText>End If</StepText>
            </Step>
          </Script>
          <Group name="Nested">
            <Script/>
          </Group>
          <Note>ignored</Note>
        </Group>
        <Script name="TopLevel">
          <Step name="Beep"/>
        </Script>
      </ScriptCatalog>
    </AddAction>
  </Structure>
</FMSaveAsXML>
"#;

#[test]
fn parse_groups_scripts_and_steps_in_document_order() {
    let path = Utf8PathBuf::from("mem://export.xml");
    let mut files = HashMap::new();
    files.insert(path.as_str().to_string(), XML.to_string());
    let mut parser = CatalogParser::new(MemSource { files });
    let catalog = parser.parse_catalog_file(&path).expect("parse catalog");

    assert_eq!(catalog.root.name, None);
    assert_eq!(catalog.root.display_name(), "UnnamedGroup");
    assert_eq!(catalog.script_count(), 3);
    assert_eq!(catalog.root.items.len(), 2);

    let CatalogItem::Group(startup) = &catalog.root.items[0] else {
        panic!("expected Startup group first");
    };
    assert_eq!(startup.name.as_deref(), Some("Startup"));
    // <Note> is not a group or script
    assert_eq!(startup.items.len(), 2);

    let CatalogItem::Script(on_open) = &startup.items[0] else {
        panic!("expected OnOpen script");
    };
    let names: Vec<&str> = on_open.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["If", "Set Variable", "End If"]);
    assert!(on_open.steps[0].enabled);
    assert!(!on_open.steps[2].enabled);
    assert_eq!(
        on_open.steps[1].text.as_deref(),
        Some("Set Variable [ $x ; 1 ]")
    );

    let CatalogItem::Group(nested) = &startup.items[1] else {
        panic!("expected Nested group");
    };
    let CatalogItem::Script(unnamed) = &nested.items[0] else {
        panic!("expected unnamed script");
    };
    assert_eq!(unnamed.display_name(), "UnnamedScript");
    assert!(unnamed.steps.is_empty());

    let CatalogItem::Script(top) = &catalog.root.items[1] else {
        panic!("expected TopLevel script");
    };
    assert_eq!(top.steps[0].text, None);
}

#[test]
fn missing_catalog_is_an_error() {
    let err = parse_catalog_from_text("<FMSaveAsXML><Structure/></FMSaveAsXML>", Some("x.xml"))
        .unwrap_err();
    assert!(err.to_string().contains("No <ScriptCatalog> element found in x.xml"));
}

#[test]
fn malformed_xml_is_an_error() {
    let err = parse_catalog_from_text("<ScriptCatalog><Group>", Some("bad.xml")).unwrap_err();
    assert!(err.to_string().contains("Failed to parse XML bad.xml"));
}

#[test]
fn missing_file_is_an_error() {
    let mut parser = CatalogParser::new(MemSource {
        files: HashMap::new(),
    });
    assert!(parser.parse_catalog_file("mem://absent.xml").is_err());
}

#[test]
fn doctype_declaration_is_accepted() {
    let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE FMSaveAsXML>\n\
               <FMSaveAsXML><ScriptCatalog><Script name=\"s\"/></ScriptCatalog></FMSaveAsXML>";
    let catalog = parse_catalog_from_text(xml, Some("d.xml")).expect("parse catalog with DOCTYPE");
    assert_eq!(catalog.script_count(), 1);
    let CatalogItem::Script(s) = &catalog.root.items[0] else {
        panic!("expected script s");
    };
    assert_eq!(s.name.as_deref(), Some("s"));
}
