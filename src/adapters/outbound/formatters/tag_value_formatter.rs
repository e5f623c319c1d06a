use super::{DATA_LICENSE, SPDX_VERSION};
use crate::application::read_models::{
    DocumentReadModel, FileView, PackageView, DOCUMENT_SPDX_ID, NOASSERTION,
};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use std::collections::HashMap;

/// TagValueFormatter adapter for generating SPDX 2.3 tag-value documents
///
/// Each package section is followed by the file sections of the files it
/// holds; relationships close the document.
pub struct TagValueFormatter;

impl TagValueFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(output: &mut String, model: &DocumentReadModel) {
        output.push_str(&format!("SPDXVersion: {}\n", SPDX_VERSION));
        output.push_str(&format!("DataLicense: {}\n", DATA_LICENSE));
        output.push_str(&format!("SPDXID: {}\n", DOCUMENT_SPDX_ID));
        output.push_str(&format!("DocumentName: {}\n", model.name));
        output.push_str(&format!("DocumentNamespace: {}\n", model.namespace));
        for creator in &model.creation.creators {
            output.push_str(&format!("Creator: {}\n", creator));
        }
        output.push_str(&format!("Created: {}\n", model.creation.created));
    }

    fn render_package(output: &mut String, package: &PackageView) {
        output.push_str(&format!("\n##### Package: {}\n\n", package.name));
        output.push_str(&format!("PackageName: {}\n", package.name));
        output.push_str(&format!("SPDXID: {}\n", package.spdx_id));
        if !package.version.is_empty() {
            output.push_str(&format!("PackageVersion: {}\n", package.version));
        }
        if let Some(file_name) = &package.file_name {
            output.push_str(&format!("PackageFileName: {}\n", file_name));
        }
        if let Some(originator) = &package.originator {
            output.push_str(&format!("PackageOriginator: {}\n", originator));
        }
        output.push_str(&format!("PackageDownloadLocation: {}\n", NOASSERTION));
        output.push_str(&format!("FilesAnalyzed: {}\n", package.files_analyzed));
        if let Some(code) = &package.verification_code {
            output.push_str(&format!("PackageVerificationCode: {}\n", code));
        }
        output.push_str(&format!(
            "PackageLicenseConcluded: {}\n",
            package.license_concluded
        ));
        output.push_str(&format!(
            "PackageLicenseDeclared: {}\n",
            package.license_declared
        ));
        output.push_str(&format!("PackageCopyrightText: {}\n", NOASSERTION));
        if let Some(purl) = &package.purl {
            output.push_str(&format!("ExternalRef: PACKAGE-MANAGER purl {}\n", purl));
        }
    }

    fn render_file(output: &mut String, file: &FileView) {
        output.push_str(&format!("\nFileName: {}\n", file.file_name));
        output.push_str(&format!("SPDXID: {}\n", file.spdx_id));
        for checksum in &file.checksums {
            output.push_str(&format!(
                "FileChecksum: {}: {}\n",
                checksum.algorithm, checksum.value
            ));
        }
        output.push_str(&format!("LicenseConcluded: {}\n", file.license_concluded));
        for license in &file.license_info_in_file {
            output.push_str(&format!("LicenseInfoInFile: {}\n", license));
        }
        output.push_str(&format!("FileCopyrightText: {}\n", NOASSERTION));
    }
}

impl Default for TagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for TagValueFormatter {
    fn format(&self, model: &DocumentReadModel) -> Result<String> {
        let files: HashMap<&str, &FileView> = model
            .files
            .iter()
            .map(|f| (f.spdx_id.as_str(), f))
            .collect();

        let mut output = String::new();
        Self::render_header(&mut output, model);

        for package in &model.packages {
            Self::render_package(&mut output, package);
            for file in package.has_files.iter().filter_map(|id| files.get(id.as_str())) {
                Self::render_file(&mut output, file);
            }
        }

        if !model.relationships.is_empty() {
            output.push_str("\n##### Relationships\n\n");
            for relationship in &model.relationships {
                output.push_str(&format!(
                    "Relationship: {} {} {}\n",
                    relationship.element, relationship.kind, relationship.related
                ));
            }
        }

        Ok(output)
    }
}
