use super::Originator;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Package as reported by a discovery engine, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredPackage {
    /// Engine-assigned identifier, without the document prefix
    pub id: String,
    pub name: String,
    pub version: String,
    pub license_concluded: Option<String>,
    pub license_declared: Option<String>,
    pub originator: Originator,
    pub purl: Option<String>,
    /// Manifest the package was read from, relative to the scanned source
    pub source_path: Option<PathBuf>,
}

/// File entry reported by a discovery engine
///
/// Paths are relative to the scanned source (for a file source, relative to
/// the directory containing it).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredFile {
    pub id: String,
    pub path: PathBuf,
    pub checksums: BTreeMap<String, String>,
    pub license_concluded: Option<String>,
}

/// Relationship between two discovered elements, by engine identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredRelationship {
    pub from: String,
    pub to: String,
    pub kind: String,
}

/// Everything a discovery engine found in one source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryResult {
    pub packages: Vec<DiscoveredPackage>,
    pub files: Vec<DiscoveredFile>,
    pub relationships: Vec<DiscoveredRelationship>,
    /// Linux distribution detected in the source, if any
    pub distro: Option<String>,
}
