//! Builder for constructing DocumentReadModel from domain objects
//!
//! This module provides the builder that flattens the package tree into
//! the format-neutral read model.

use super::document_read_model::{
    CreationInfoView, DocumentReadModel, RelationshipView, DOCUMENT_SPDX_ID,
};
use super::package_view::{ChecksumView, FileView, PackageView};
use crate::sbom_generation::domain::{Document, DocumentMetadata, File, Package, SHA1};
use sha1::{Digest, Sha1};

/// Placeholder SPDX uses for unknown values
pub const NOASSERTION: &str = "NOASSERTION";

/// Builder for constructing DocumentReadModel from domain objects
pub struct DocumentReadModelBuilder;

impl DocumentReadModelBuilder {
    /// Builds a DocumentReadModel
    ///
    /// # Arguments
    /// * `document` - The assembled document
    /// * `metadata` - Creation timestamp and namespace for this rendering
    pub fn build(document: &Document, metadata: &DocumentMetadata) -> DocumentReadModel {
        let mut model = DocumentReadModel {
            name: document.name.clone(),
            namespace: metadata.namespace().to_string(),
            creation: Self::build_creation_info(document, metadata),
            packages: Vec::new(),
            files: Vec::new(),
            relationships: Vec::new(),
        };

        for package in document.packages().values() {
            model.relationships.push(RelationshipView::new(
                DOCUMENT_SPDX_ID,
                "DESCRIBES",
                package.id().as_str(),
            ));
            Self::flatten_package(package, &mut model);
        }

        model
    }

    fn build_creation_info(document: &Document, metadata: &DocumentMetadata) -> CreationInfoView {
        let creator = &document.creator;
        let mut creators = Vec::new();
        if !creator.person.is_empty() {
            creators.push(format!("Person: {}", creator.person));
        }
        if !creator.organization.is_empty() {
            creators.push(format!("Organization: {}", creator.organization));
        }
        if creator.tools.is_empty() {
            creators.push(format!("Tool: {}", metadata.tool_identifier()));
        } else {
            creators.extend(creator.tools.iter().map(|tool| format!("Tool: {}", tool)));
        }

        CreationInfoView {
            created: metadata.created().to_string(),
            creators,
        }
    }

    /// Pushes a package, its files and its sub-packages, depth first
    fn flatten_package(package: &Package, model: &mut DocumentReadModel) {
        model.packages.push(Self::build_package_view(package));

        for file in package.files() {
            model.relationships.push(RelationshipView::new(
                package.id().as_str(),
                "CONTAINS",
                file.id().as_str(),
            ));
            model.files.push(Self::build_file_view(file));
        }

        for sub_package in package.packages().values() {
            model.relationships.push(RelationshipView::new(
                package.id().as_str(),
                "CONTAINS",
                sub_package.id().as_str(),
            ));
            Self::flatten_package(sub_package, model);
        }
    }

    fn build_package_view(package: &Package) -> PackageView {
        let originator = match (&package.originator.person, &package.originator.organization) {
            (Some(person), _) if !person.is_empty() => Some(format!("Person: {}", person)),
            (_, Some(org)) if !org.is_empty() => Some(format!("Organization: {}", org)),
            _ => None,
        };

        PackageView {
            spdx_id: package.id().to_string(),
            name: package.name.clone(),
            version: package.version.clone(),
            license_concluded: or_noassertion(&package.license_concluded),
            license_declared: or_noassertion(&package.license_declared),
            originator,
            files_analyzed: package.files_analyzed,
            verification_code: Self::verification_code(package),
            purl: package.purl.clone(),
            file_name: package
                .source_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            has_files: package.files().iter().map(|f| f.id().to_string()).collect(),
        }
    }

    fn build_file_view(file: &File) -> FileView {
        FileView {
            spdx_id: file.id().to_string(),
            file_name: file.path().to_string_lossy().into_owned(),
            checksums: file
                .checksums
                .iter()
                .map(|(algorithm, value)| ChecksumView {
                    algorithm: algorithm.clone(),
                    value: value.clone(),
                })
                .collect(),
            license_concluded: or_noassertion(file.license_concluded.as_deref().unwrap_or("")),
            license_info_in_file: vec![or_noassertion(
                file.license_info_in_file.as_deref().unwrap_or(""),
            )],
        }
    }

    /// SHA1 over the sorted, concatenated SHA1 digests of the package's files.
    ///
    /// Only produced for analyzed packages whose files all carry a SHA1.
    fn verification_code(package: &Package) -> Option<String> {
        if !package.files_analyzed || package.files().is_empty() {
            return None;
        }
        let mut digests = package
            .files()
            .iter()
            .map(|f| f.checksum(SHA1).map(str::to_lowercase))
            .collect::<Option<Vec<_>>>()?;
        digests.sort();
        Some(hex::encode(Sha1::digest(digests.concat().as_bytes())))
    }
}

fn or_noassertion(value: &str) -> String {
    if value.trim().is_empty() {
        NOASSERTION.to_string()
    } else {
        value.to_string()
    }
}
