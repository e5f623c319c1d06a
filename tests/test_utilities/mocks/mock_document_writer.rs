use fs_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DocumentWriter that captures written documents
#[derive(Default, Clone)]
pub struct MockDocumentWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, Document)>>>,
}

impl MockDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.written.lock().unwrap().len()
    }

    /// The last document written, with its destination
    pub fn last(&self) -> Option<(PathBuf, Document)> {
        self.written.lock().unwrap().last().cloned()
    }
}

impl DocumentWriter for MockDocumentWriter {
    fn write_document(&self, document: &Document, path: &Path) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), document.clone()));
        Ok(())
    }
}
