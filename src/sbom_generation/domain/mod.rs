pub mod discovered;
pub mod document;
pub mod document_metadata;
pub mod file;
pub mod package;
pub mod spdx_id;

pub use discovered::{DiscoveredFile, DiscoveredPackage, DiscoveredRelationship, DiscoveryResult};
pub use document::{Creator, Document};
pub use document_metadata::DocumentMetadata;
pub use file::{Checksums, File, SHA1, SHA256};
pub use package::{Originator, Package, PackageMap};
pub use spdx_id::{SpdxId, SPDX_ID_PREFIX};
