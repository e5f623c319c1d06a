/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (discovery engines, writers, console).
pub mod build_observer;
pub mod document_writer;
pub mod formatter;
pub mod package_discovery;

pub use build_observer::{BuildObserver, InputKind};
pub use document_writer::DocumentWriter;
pub use formatter::DocumentFormatter;
pub use package_discovery::{CatalogConfig, PackageDiscovery, SearchScope, SourceLocator};
