//! Package and file view structs for read model
//!
//! These structs provide a flattened, query-optimized view of the records.

/// View representation of a package
#[derive(Debug, Clone)]
pub struct PackageView {
    pub spdx_id: String,
    pub name: String,
    pub version: String,
    /// License expression, `NOASSERTION` when unknown
    pub license_concluded: String,
    /// License expression, `NOASSERTION` when unknown
    pub license_declared: String,
    /// `Person: ...` or `Organization: ...`
    pub originator: Option<String>,
    pub files_analyzed: bool,
    /// SHA1 verification code over the package's files
    pub verification_code: Option<String>,
    /// Package URL (purl)
    pub purl: Option<String>,
    /// Manifest or archive the package was found in
    pub file_name: Option<String>,
    /// Identifiers of the file records attached to this package
    pub has_files: Vec<String>,
}

/// View representation of a file
#[derive(Debug, Clone)]
pub struct FileView {
    pub spdx_id: String,
    pub file_name: String,
    pub checksums: Vec<ChecksumView>,
    /// License expression, `NOASSERTION` when unknown
    pub license_concluded: String,
    pub license_info_in_file: Vec<String>,
}

/// View representation of a checksum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumView {
    pub algorithm: String,
    pub value: String,
}
