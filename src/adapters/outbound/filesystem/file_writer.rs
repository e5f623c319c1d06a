use crate::application::read_models::DocumentReadModelBuilder;
use crate::ports::outbound::{DocumentFormatter, DocumentWriter};
use crate::sbom_generation::domain::Document;
use crate::sbom_generation::services::DocumentMetadataGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// FileDocumentWriter adapter for writing documents to files
///
/// This adapter implements the DocumentWriter port. Content is written to a
/// temporary file next to the destination and renamed into place, so a
/// failed write never leaves a partial document behind.
pub struct FileDocumentWriter {
    formatter: Box<dyn DocumentFormatter>,
}

impl FileDocumentWriter {
    pub fn new(formatter: Box<dyn DocumentFormatter>) -> Self {
        Self { formatter }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(write_error(
                    path,
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        Ok(())
    }

    /// Rejects an existing destination that is a symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_symlink() => Err(write_error(
                path,
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn write_atomically(path: &Path, content: &str) -> Result<()> {
        let directory = match path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(directory)
            .map_err(|e| write_error(path, format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| write_error(path, e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(|e| write_error(path, e.to_string()))?;
        }

        temp.persist(path)
            .map_err(|e| write_error(path, e.error.to_string()))?;
        Ok(())
    }
}

impl DocumentWriter for FileDocumentWriter {
    fn write_document(&self, document: &Document, path: &Path) -> Result<()> {
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        let metadata = DocumentMetadataGenerator::generate_default_metadata(&document.name);
        let model = DocumentReadModelBuilder::build(document, &metadata);
        let content = self
            .formatter
            .format(&model)
            .map_err(|e| write_error(path, format!("Failed to serialize document: {:#}", e)))?;

        Self::write_atomically(path, &content)
    }
}

fn write_error(path: &Path, details: String) -> anyhow::Error {
    SbomError::Write {
        path: path.to_path_buf(),
        details,
    }
    .into()
}
