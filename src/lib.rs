//! fs-sbom - SBOM generation tool for filesystem inputs
//!
//! This library builds an SPDX document describing one target package and
//! everything ingested into it: directory trees, single files and glob
//! matches. Packages found by a discovery engine become sub-packages, files
//! are fingerprinted with SHA1 and SHA256. The crate follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Document model and pure services
//! - **Application Layer** (`application`): Use case, ingesters and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use fs_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let discovery = ManifestDiscovery::new();
//! let writer = FileDocumentWriter::new(FormatterFactory::create(OutputFormat::Json));
//! let observer = TracingBuildObserver::new();
//!
//! // Create use case
//! let use_case = BuildSbomUseCase::new(discovery, writer, observer);
//!
//! // Execute
//! let request = BuildRequest::builder()
//!     .name("demo")
//!     .author("Jane Doe")
//!     .organization("Acme")
//!     .license("Apache-2.0")
//!     .package_name("app")
//!     .package_version("1.0.0")
//!     .input("dist")
//!     .output_path("demo.spdx.json")
//!     .build()?;
//! let response = use_case.execute(request)?;
//! println!("{} files", response.file_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ProgressBuildObserver, TracingBuildObserver};
    pub use crate::adapters::outbound::discovery::{ManifestDiscovery, ManifestKind};
    pub use crate::adapters::outbound::filesystem::FileDocumentWriter;
    pub use crate::adapters::outbound::formatters::{SpdxJsonFormatter, TagValueFormatter};
    pub use crate::application::dto::{BuildRequest, BuildResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{DocumentReadModel, DocumentReadModelBuilder};
    pub use crate::application::use_cases::BuildSbomUseCase;
    pub use crate::ports::inbound::SbomBuildPort;
    pub use crate::ports::outbound::{
        BuildObserver, CatalogConfig, DocumentFormatter, DocumentWriter, InputKind,
        PackageDiscovery, SearchScope, SourceLocator,
    };
    pub use crate::sbom_generation::domain::{
        Checksums, Creator, DiscoveredFile, DiscoveredPackage, DiscoveredRelationship,
        DiscoveryResult, Document, DocumentMetadata, File, Originator, Package, PackageMap,
        SpdxId, SHA1, SHA256,
    };
    pub use crate::sbom_generation::services::{
        ChecksumEngine, DocumentMetadataGenerator, EntityNormalizer, LicenseOverride,
        PathIdentityResolver,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
