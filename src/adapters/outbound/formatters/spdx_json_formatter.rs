use super::{DATA_LICENSE, SPDX_VERSION};
use crate::application::read_models::{
    DocumentReadModel, FileView, PackageView, RelationshipView, DOCUMENT_SPDX_ID, NOASSERTION,
};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<File>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    originator: Option<String>,
    download_location: &'static str,
    files_analyzed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_verification_code: Option<VerificationCode>,
    license_concluded: String,
    license_declared: String,
    copyright_text: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerificationCode {
    package_verification_code_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: &'static str,
    reference_type: &'static str,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct File {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    file_name: String,
    checksums: Vec<Checksum>,
    license_concluded: String,
    license_info_in_files: Vec<String>,
    copyright_text: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Checksum {
    algorithm: String,
    checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON
///
/// This adapter implements the DocumentFormatter port for SPDX JSON.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for SpdxJsonFormatter {
    fn format(&self, model: &DocumentReadModel) -> Result<String> {
        let document = SpdxDocument {
            spdx_version: SPDX_VERSION,
            data_license: DATA_LICENSE,
            spdx_id: DOCUMENT_SPDX_ID,
            name: model.name.clone(),
            document_namespace: model.namespace.clone(),
            creation_info: CreationInfo {
                created: model.creation.created.clone(),
                creators: model.creation.creators.clone(),
            },
            packages: model.packages.iter().map(build_package).collect(),
            files: model.files.iter().map(build_file).collect(),
            relationships: model.relationships.iter().map(build_relationship).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

fn build_package(package: &PackageView) -> Package {
    Package {
        spdx_id: package.spdx_id.clone(),
        name: package.name.clone(),
        version_info: package.version.clone(),
        package_file_name: package.file_name.clone(),
        originator: package.originator.clone(),
        download_location: NOASSERTION,
        files_analyzed: package.files_analyzed,
        package_verification_code: package.verification_code.as_ref().map(|code| {
            VerificationCode {
                package_verification_code_value: code.clone(),
            }
        }),
        license_concluded: package.license_concluded.clone(),
        license_declared: package.license_declared.clone(),
        copyright_text: NOASSERTION,
        has_files: package.has_files.clone(),
        external_refs: package
            .purl
            .iter()
            .map(|purl| ExternalRef {
                reference_category: "PACKAGE-MANAGER",
                reference_type: "purl",
                reference_locator: purl.clone(),
            })
            .collect(),
    }
}

fn build_file(file: &FileView) -> File {
    File {
        spdx_id: file.spdx_id.clone(),
        file_name: file.file_name.clone(),
        checksums: file
            .checksums
            .iter()
            .map(|c| Checksum {
                algorithm: c.algorithm.clone(),
                checksum_value: c.value.clone(),
            })
            .collect(),
        license_concluded: file.license_concluded.clone(),
        license_info_in_files: file.license_info_in_file.clone(),
        copyright_text: NOASSERTION,
    }
}

fn build_relationship(relationship: &RelationshipView) -> Relationship {
    Relationship {
        spdx_element_id: relationship.element.clone(),
        relationship_type: relationship.kind.clone(),
        related_spdx_element: relationship.related.clone(),
    }
}
