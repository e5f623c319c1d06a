use crate::adapters::outbound::formatters::{SpdxJsonFormatter, TagValueFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating document formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fs_sbom::application::dto::OutputFormat;
    /// use fs_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Json => Box::new(SpdxJsonFormatter::new()),
            OutputFormat::TagValue => Box::new(TagValueFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fs_sbom::application::dto::OutputFormat;
    /// use fs_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating SPDX JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating SPDX JSON output...",
            OutputFormat::TagValue => "📝 Generating SPDX tag-value output...",
        }
    }
}
