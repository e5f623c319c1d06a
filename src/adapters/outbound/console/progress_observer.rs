use crate::ports::outbound::{BuildObserver, InputKind};
use crate::sbom_generation::domain::{File, Package, SpdxId};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::path::Path;
use std::time::Duration;

/// ProgressBuildObserver adapter showing an `indicatif` spinner on stderr
///
/// Wraps another observer and forwards every callback to it, so log events
/// keep flowing while the spinner counts ingested files.
pub struct ProgressBuildObserver<O> {
    inner: O,
    spinner: ProgressBar,
    files: Cell<u64>,
}

impl<O: BuildObserver> ProgressBuildObserver<O> {
    pub fn new(inner: O) -> Self {
        Self::with_bar(inner, ProgressBar::new_spinner())
    }

    /// Builds the observer around a caller-supplied bar (hidden in tests)
    pub fn with_bar(inner: O, spinner: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self {
            inner,
            spinner,
            files: Cell::new(0),
        }
    }

    /// Number of file records seen so far
    pub fn file_count(&self) -> u64 {
        self.files.get()
    }

    /// Clears the spinner from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl<O: BuildObserver> BuildObserver for ProgressBuildObserver<O> {
    fn on_input_started(&self, path: &Path, kind: InputKind) {
        self.spinner
            .set_message(format!("📂 Scanning {} {}", kind, path.display()));
        self.inner.on_input_started(path, kind);
    }

    fn on_package_added(&self, package: &Package) {
        self.inner.on_package_added(package);
    }

    fn on_package_replaced(&self, id: &SpdxId) {
        self.inner.on_package_replaced(id);
    }

    fn on_file_ingested(&self, file: &File) {
        let count = self.files.get() + 1;
        self.files.set(count);
        self.spinner
            .set_message(format!("🔍 {} file(s) checksummed", count));
        self.inner.on_file_ingested(file);
    }

    fn on_error(&self, error: &anyhow::Error) {
        self.spinner.finish_and_clear();
        self.inner.on_error(error);
    }
}

impl<O> Drop for ProgressBuildObserver<O> {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
