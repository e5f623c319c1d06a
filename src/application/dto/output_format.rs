/// Output format enumeration for document serialization
///
/// Both the CLI (inbound adapter) and the formatter factory need to agree on
/// these, so the enum lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// SPDX 2.3 JSON (default)
    #[default]
    Json,
    /// SPDX 2.3 tag-value
    TagValue,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "spdx-json" => Ok(OutputFormat::Json),
            "tag-value" | "tv" | "spdx" => Ok(OutputFormat::TagValue),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'tag-value'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::TagValue => write!(f, "tag-value"),
        }
    }
}
