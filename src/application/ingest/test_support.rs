//! Stub discovery engine and recording observer shared by ingestion tests

use crate::ports::outbound::{
    BuildObserver, CatalogConfig, InputKind, PackageDiscovery, SourceLocator,
};
use crate::sbom_generation::domain::{
    DiscoveredFile, DiscoveredPackage, DiscoveryResult, File, Package, SpdxId,
};
use crate::shared::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Discovery engine returning canned results keyed by scanned path
#[derive(Default)]
pub struct StubDiscovery {
    results: Vec<(PathBuf, DiscoveryResult)>,
    failing: Vec<PathBuf>,
    pub calls: RefCell<Vec<(SourceLocator, CatalogConfig)>>,
}

impl StubDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, path: &Path, result: DiscoveryResult) -> Self {
        self.results.push((path.to_path_buf(), result));
        self
    }

    pub fn failing_on(mut self, path: &Path) -> Self {
        self.failing.push(path.to_path_buf());
        self
    }
}

impl PackageDiscovery for StubDiscovery {
    fn catalog(&self, locator: &SourceLocator, config: &CatalogConfig) -> Result<DiscoveryResult> {
        self.calls
            .borrow_mut()
            .push((locator.clone(), config.clone()));
        if self.failing.iter().any(|p| p == locator.path()) {
            anyhow::bail!("malformed manifest under {}", locator.path().display());
        }
        Ok(self
            .results
            .iter()
            .find(|(path, _)| path == locator.path())
            .map(|(_, result)| result.clone())
            .unwrap_or_default())
    }
}

/// Observer remembering every callback as a short event string
#[derive(Default)]
pub struct RecordingObserver {
    pub events: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn events_starting_with(&self, prefix: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl BuildObserver for RecordingObserver {
    fn on_input_started(&self, path: &Path, kind: InputKind) {
        self.events
            .borrow_mut()
            .push(format!("input {} {}", kind, path.display()));
    }

    fn on_package_added(&self, package: &Package) {
        self.events
            .borrow_mut()
            .push(format!("package {}", package.id()));
    }

    fn on_package_replaced(&self, id: &SpdxId) {
        self.events.borrow_mut().push(format!("replaced {}", id));
    }

    fn on_file_ingested(&self, file: &File) {
        self.events
            .borrow_mut()
            .push(format!("file {}", file.path().display()));
    }

    fn on_error(&self, error: &anyhow::Error) {
        self.events.borrow_mut().push(format!("error {}", error));
    }
}

pub fn discovered_package(id: &str, name: &str, version: &str) -> DiscoveredPackage {
    DiscoveredPackage {
        id: id.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        ..Default::default()
    }
}

pub fn discovered_file(id: &str, path: &str) -> DiscoveredFile {
    DiscoveredFile {
        id: id.to_string(),
        path: PathBuf::from(path),
        ..Default::default()
    }
}
