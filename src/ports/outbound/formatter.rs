use crate::application::read_models::DocumentReadModel;
use crate::shared::Result;

/// DocumentFormatter port for rendering a document in an SBOM format
///
/// This port abstracts the serialization formats (SPDX JSON, SPDX tag-value).
pub trait DocumentFormatter {
    /// Formats the document using the flattened read model
    ///
    /// # Arguments
    /// * `model` - Packages, files and relationships of the document, plus
    ///   creation info and namespace
    ///
    /// # Returns
    /// Formatted document content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &DocumentReadModel) -> Result<String>;
}
