mod checksum_engine;
mod entity_normalizer;
pub mod package_merge;
mod path_identity;
mod document_metadata_generator;

pub use checksum_engine::ChecksumEngine;
pub use entity_normalizer::{EntityNormalizer, LicenseOverride};
pub use package_merge::{merge_maps, overlapping_keys};
pub use path_identity::{FileIdentity, PathIdentityResolver};
pub use document_metadata_generator::{DocumentMetadataGenerator, TOOL_NAME};
