#![warn(missing_docs)]

//! SML export for the smlscene toolchain.
//!
//! This crate serializes an [`sml_ir::Document`] into a single SML
//! (S-expression markup) text document: nested `(tag field ...)` blocks
//! describing every scene, object, and datablock of the model.
//!
//! Datablocks and materials referenced by more than one object are defined
//! once, at their first reference in scene order, and cited by name
//! (`use_content` / `use_material`) everywhere else. Output is deterministic:
//! the same document always yields the same bytes.
//!
//! # Example
//!
//! ```ignore
//! use sml_export::write_sml;
//!
//! let json = std::fs::read_to_string("scene.json")?;
//! let doc = sml_ir::Document::from_json(&json)?;
//! write_sml(&doc, "scene.sml")?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod error;
pub mod registry;
pub mod settings;
pub mod writer;

mod armature;
mod datablock;
mod scene;

pub use error::ExportError;
pub use registry::DedupRegistry;
pub use scene::Exporter;
pub use settings::ExportSettings;
pub use writer::{Gf, Quoted, SexprWriter};

use sml_ir::Document;

/// Export a document to any writer.
pub fn export_document(doc: &Document, out: impl Write) -> Result<(), ExportError> {
    Exporter::new(doc, out).export()?;
    Ok(())
}

/// Export a document to an in-memory string.
pub fn export_to_string(doc: &Document) -> Result<String, ExportError> {
    let buf = Exporter::new(doc, Vec::new()).export()?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Export a document to a file.
pub fn write_sml(doc: &Document, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    Exporter::new(doc, &mut out).export()?;
    out.flush()?;
    Ok(())
}
