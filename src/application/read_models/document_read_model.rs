//! Document read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all document data in a format-neutral, flattened shape.

use super::package_view::{FileView, PackageView};

/// Identifier of the document element itself
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// Main read model for a serialized document
///
/// Packages and files are flattened out of the package tree; the tree
/// structure survives as `CONTAINS` relationships.
#[derive(Debug, Clone)]
pub struct DocumentReadModel {
    pub name: String,
    pub namespace: String,
    pub creation: CreationInfoView,
    /// Every package in the document, parents before their sub-packages
    pub packages: Vec<PackageView>,
    /// Every file record, in package order
    pub files: Vec<FileView>,
    pub relationships: Vec<RelationshipView>,
}

/// View representation of creation info
#[derive(Debug, Clone)]
pub struct CreationInfoView {
    /// RFC 3339 UTC timestamp
    pub created: String,
    /// Creator strings such as `Person: Jane Doe` or `Tool: fs-sbom@0.4.0`
    pub creators: Vec<String>,
}

/// View representation of a relationship between two elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipView {
    pub element: String,
    pub kind: String,
    pub related: String,
}

impl RelationshipView {
    pub fn new(element: &str, kind: &str, related: &str) -> Self {
        Self {
            element: element.to_string(),
            kind: kind.to_string(),
            related: related.to_string(),
        }
    }
}
