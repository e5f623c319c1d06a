use crate::sbom_generation::domain::Document;
use crate::shared::Result;
use std::path::Path;

/// DocumentWriter port for persisting the assembled document
///
/// The serialization format is owned by the implementation.
pub trait DocumentWriter {
    /// Serializes `document` to `path`
    ///
    /// # Errors
    /// Returns `SbomError::Write` if:
    /// - The document cannot be serialized
    /// - The destination directory does not exist or is not writable
    /// - The destination is a symbolic link
    fn write_document(&self, document: &Document, path: &Path) -> Result<()>;
}
