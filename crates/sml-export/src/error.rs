//! Error types for SML export.

use thiserror::Error;

/// Errors that can abort an export run.
///
/// An export either completes and yields a full document or fails on the
/// first error, leaving a partially written sink the caller must discard.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An object references a datablock name the document does not define.
    #[error("object '{object}' references unknown datablock '{name}'")]
    UnknownDatablock {
        /// Name of the referencing object.
        object: String,
        /// The dangling datablock name.
        name: String,
    },
}
