/// Mock implementations for testing
mod mock_build_observer;
mod mock_document_writer;
mod mock_package_discovery;

pub use mock_build_observer::MockBuildObserver;
pub use mock_document_writer::MockDocumentWriter;
pub use mock_package_discovery::MockPackageDiscovery;
