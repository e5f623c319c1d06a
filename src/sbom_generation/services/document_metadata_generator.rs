use crate::sbom_generation::domain::DocumentMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded as the document creator
pub const TOOL_NAME: &str = "fs-sbom";

/// Base URI for generated document namespaces
const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

/// DocumentMetadataGenerator service for generating document metadata
pub struct DocumentMetadataGenerator;

impl DocumentMetadataGenerator {
    /// Generates metadata with the current timestamp and a unique namespace
    ///
    /// # Arguments
    /// * `document_name` - Name of the document, embedded in the namespace
    /// * `tool_name` - Name of the tool generating the SBOM
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(
        document_name: &str,
        tool_name: &str,
        tool_version: &str,
    ) -> DocumentMetadata {
        let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let namespace = format!(
            "{}/{}-{}",
            NAMESPACE_BASE,
            namespace_segment(document_name),
            Uuid::new_v4()
        );

        DocumentMetadata::new(
            created,
            tool_name.to_string(),
            tool_version.to_string(),
            namespace,
        )
    }

    /// Generates metadata with default tool information (fs-sbom)
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata(document_name: &str) -> DocumentMetadata {
        Self::generate_metadata(document_name, TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// Creator tool identifier carrying the build's version
    pub fn tool_identifier() -> String {
        format!("{}@{}", TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}

fn namespace_segment(name: &str) -> String {
    let segment: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '-' })
        .collect();
    if segment.is_empty() {
        "document".to_string()
    } else {
        segment
    }
}
