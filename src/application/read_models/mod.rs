//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide a flattened
//! representation of the document for the formatters.

pub mod document_read_model;
pub mod document_read_model_builder;
pub mod package_view;

pub use document_read_model::{
    CreationInfoView, DocumentReadModel, RelationshipView, DOCUMENT_SPDX_ID,
};
pub use document_read_model_builder::{DocumentReadModelBuilder, NOASSERTION};
pub use package_view::{ChecksumView, FileView, PackageView};
