use crate::ports::outbound::{BuildObserver, InputKind};
use crate::sbom_generation::domain::{File, Package, SpdxId, SHA256};
use std::path::Path;

/// TracingBuildObserver adapter turning build callbacks into `tracing` events
///
/// Ingestion progress is logged at `info`, per-file detail at `debug`,
/// identifier collisions at `warn` and the failing error at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBuildObserver;

impl TracingBuildObserver {
    pub fn new() -> Self {
        Self
    }
}

impl BuildObserver for TracingBuildObserver {
    fn on_input_started(&self, path: &Path, kind: InputKind) {
        tracing::info!(path = %path.display(), kind = %kind, "adding input to package");
    }

    fn on_package_added(&self, package: &Package) {
        tracing::info!(
            package = %package.id(),
            name = %package.name,
            version = %package.version,
            "package detected"
        );
    }

    fn on_package_replaced(&self, id: &SpdxId) {
        tracing::warn!(package = %id, "package replaced by a later input with the same identifier");
    }

    fn on_file_ingested(&self, file: &File) {
        let size = std::fs::symlink_metadata(file.path())
            .map(|m| m.len())
            .unwrap_or_default();
        tracing::debug!(
            path = %file.path().display(),
            sha256 = file.checksum(SHA256).unwrap_or_default(),
            size,
            "file entry detected"
        );
    }

    fn on_error(&self, error: &anyhow::Error) {
        tracing::error!(error = %format!("{:#}", error), "build failed");
    }
}
