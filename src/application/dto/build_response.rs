use std::path::PathBuf;

/// BuildResponse - Summary of a completed build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResponse {
    /// Where the document was written
    pub output_path: PathBuf,
    /// Packages in the document, sub-packages included
    pub package_count: usize,
    /// File records across all packages
    pub file_count: usize,
}

impl BuildResponse {
    pub fn new(output_path: PathBuf, package_count: usize, file_count: usize) -> Self {
        Self {
            output_path,
            package_count,
            file_count,
        }
    }
}
