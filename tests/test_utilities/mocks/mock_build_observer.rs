use fs_sbom::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock BuildObserver for testing that captures events
#[derive(Default, Clone)]
pub struct MockBuildObserver {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockBuildObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.get_events()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }
}

impl BuildObserver for MockBuildObserver {
    fn on_input_started(&self, path: &Path, kind: InputKind) {
        self.events
            .lock()
            .unwrap()
            .push(format!("input: {} {}", kind, path.display()));
    }

    fn on_package_added(&self, package: &Package) {
        self.events
            .lock()
            .unwrap()
            .push(format!("package: {}", package.id()));
    }

    fn on_package_replaced(&self, id: &SpdxId) {
        self.events
            .lock()
            .unwrap()
            .push(format!("replaced: {}", id));
    }

    fn on_file_ingested(&self, file: &File) {
        self.events
            .lock()
            .unwrap()
            .push(format!("file: {}", file.path().display()));
    }

    fn on_error(&self, error: &anyhow::Error) {
        self.events
            .lock()
            .unwrap()
            .push(format!("error: {}", error));
    }
}
