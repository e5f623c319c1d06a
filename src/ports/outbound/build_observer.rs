use crate::sbom_generation::domain::{File, Package, SpdxId};
use std::fmt;
use std::path::Path;

/// How the orchestrator classified a build input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Directory,
    File,
    /// A file matched by expanding a glob pattern
    GlobMatch,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Directory => write!(f, "directory"),
            InputKind::File => write!(f, "file"),
            InputKind::GlobMatch => write!(f, "glob match"),
        }
    }
}

/// BuildObserver port for following a build as it progresses
///
/// The build pipeline calls these hooks instead of logging itself, so
/// logging, progress display and test capture are all adapters.
pub trait BuildObserver {
    /// An input is about to be ingested
    fn on_input_started(&self, _path: &Path, _kind: InputKind) {}

    /// A package was attached to the target package or merged into the document
    fn on_package_added(&self, package: &Package);

    /// A discovered package overwrote a document package with the same identifier
    fn on_package_replaced(&self, _id: &SpdxId) {}

    /// A file record was attached to the target package
    fn on_file_ingested(&self, file: &File);

    /// The build is about to fail with this error
    fn on_error(&self, error: &anyhow::Error);
}
