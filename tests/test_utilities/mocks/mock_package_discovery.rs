use fs_sbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock PackageDiscovery returning canned results per source path
#[derive(Default, Clone)]
pub struct MockPackageDiscovery {
    results: HashMap<PathBuf, DiscoveryResult>,
    failing: Option<PathBuf>,
    pub locators: Arc<Mutex<Vec<SourceLocator>>>,
}

impl MockPackageDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, path: &Path, result: DiscoveryResult) -> Self {
        self.results.insert(path.to_path_buf(), result);
        self
    }

    pub fn failing_on(mut self, path: &Path) -> Self {
        self.failing = Some(path.to_path_buf());
        self
    }

    pub fn get_locators(&self) -> Vec<SourceLocator> {
        self.locators.lock().unwrap().clone()
    }

    pub fn package(id: &str, name: &str, version: &str) -> DiscoveredPackage {
        DiscoveredPackage {
            id: id.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            ..DiscoveredPackage::default()
        }
    }
}

impl PackageDiscovery for MockPackageDiscovery {
    fn catalog(&self, locator: &SourceLocator, _config: &CatalogConfig) -> Result<DiscoveryResult> {
        self.locators.lock().unwrap().push(locator.clone());

        if self.failing.as_deref() == Some(locator.path()) {
            anyhow::bail!("Mock discovery failure for {}", locator.path().display());
        }

        Ok(self
            .results
            .get(locator.path())
            .cloned()
            .unwrap_or_default())
    }
}
