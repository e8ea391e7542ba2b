//! FileMaker script catalog exporter.
//!
//! This crate provides a `CatalogParser` to load the `<ScriptCatalog>` of a
//! FileMaker XML export into strongly-typed Rust structures, and
//! `export_catalog` to write it out as a directory tree with one indented,
//! comment-free text file per script.
//!
//! The binary `fmcatalog` runs the export and lists the generated tree.

pub mod comments;
pub mod escape;
pub mod export;
pub mod model;
pub mod parser;
pub mod step_kind;
pub mod tree;
