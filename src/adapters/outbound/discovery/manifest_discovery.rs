use super::manifests::{ManifestKind, ManifestPackage};
use crate::ports::outbound::{CatalogConfig, PackageDiscovery, SourceLocator};
use crate::sbom_generation::domain::{
    DiscoveredFile, DiscoveredPackage, DiscoveredRelationship, DiscoveryResult, Originator,
};
use crate::sbom_generation::services::ChecksumEngine;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maximum manifest size (100 MB)
const MAX_MANIFEST_SIZE: u64 = 100 * 1024 * 1024;

/// ManifestDiscovery adapter recognizing packages from their manifests
///
/// This adapter implements the PackageDiscovery port with file-name
/// heuristics: `Cargo.toml`, `Cargo.lock`, `pyproject.toml`, `uv.lock` and
/// `package.json` are parsed, everything else is ignored. Archives are not
/// opened.
pub struct ManifestDiscovery;

impl ManifestDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Walks a directory, without following symlinks, and catalogs every manifest.
    ///
    /// Package source paths are relative to `root`.
    fn catalog_directory(root: &Path) -> Result<DiscoveryResult> {
        let mut result = DiscoveryResult::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| discovery_error(root, e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(kind) = ManifestKind::detect(entry.path()) else {
                continue;
            };

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            for package in Self::read_packages(entry.path(), kind)? {
                result.packages.push(discovered(kind, package, relative));
            }
        }

        Ok(result)
    }

    /// Catalogs a single file.
    ///
    /// A manifest is reported as an internal file entry too, relative to its
    /// parent directory, and related to the packages it describes.
    fn catalog_file(path: &Path) -> Result<DiscoveryResult> {
        let mut result = DiscoveryResult::default();
        let Some(kind) = ManifestKind::detect(path) else {
            return Ok(result);
        };
        let relative = PathBuf::from(path.file_name().unwrap_or(path.as_os_str()));

        for package in Self::read_packages(path, kind)? {
            result.packages.push(discovered(kind, package, &relative));
        }

        let file_id = format!("File-{}", relative.display());
        result.relationships = result
            .packages
            .iter()
            .map(|package| DiscoveredRelationship {
                from: package.id.clone(),
                to: file_id.clone(),
                kind: "DESCRIBED_BY".to_string(),
            })
            .collect();
        result.files.push(DiscoveredFile {
            id: file_id,
            path: relative,
            checksums: ChecksumEngine::compute(path)?.into_map(),
            license_concluded: None,
        });

        Ok(result)
    }

    fn read_packages(path: &Path, kind: ManifestKind) -> Result<Vec<ManifestPackage>> {
        let metadata = fs::metadata(path).map_err(|e| SbomError::from_io(path, "stat", e))?;
        if metadata.len() > MAX_MANIFEST_SIZE {
            return Err(discovery_error(
                path,
                format!(
                    "manifest is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    MAX_MANIFEST_SIZE
                ),
            ));
        }

        let content =
            fs::read_to_string(path).map_err(|e| SbomError::from_io(path, "read", e))?;
        kind.parse(&content)
            .map_err(|e| discovery_error(path, format!("{:#}", e)))
    }
}

impl Default for ManifestDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageDiscovery for ManifestDiscovery {
    fn catalog(&self, locator: &SourceLocator, config: &CatalogConfig) -> Result<DiscoveryResult> {
        tracing::debug!(
            source = %locator,
            indexed_archives = config.include_indexed_archives,
            unindexed_archives = config.include_unindexed_archives,
            scope = ?config.scope,
            parallelism = config.parallelism,
            "cataloging source"
        );

        match locator {
            SourceLocator::Directory(root) => Self::catalog_directory(root),
            SourceLocator::File(path) => Self::catalog_file(path),
        }
    }
}

fn discovered(kind: ManifestKind, package: ManifestPackage, source: &Path) -> DiscoveredPackage {
    let id = if package.version.is_empty() {
        format!("Package-{}-{}", kind.ecosystem(), package.name)
    } else {
        format!(
            "Package-{}-{}-{}",
            kind.ecosystem(),
            package.name,
            package.version
        )
    };

    DiscoveredPackage {
        id,
        purl: Some(kind.purl(&package.name, &package.version)),
        license_concluded: package.license.clone(),
        license_declared: package.license,
        originator: Originator {
            person: package.author,
            organization: None,
        },
        source_path: Some(source.to_path_buf()),
        name: package.name,
        version: package.version,
    }
}

fn discovery_error(path: &Path, details: String) -> anyhow::Error {
    SbomError::Discovery {
        path: path.to_path_buf(),
        details,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::SHA256;
    use tempfile::TempDir;

    const CARGO_TOML: &str = "[package]\nname = \"app\"\nversion = \"1.0.0\"\nlicense = \"MIT\"\n";

    fn catalog(locator: SourceLocator) -> Result<DiscoveryResult> {
        ManifestDiscovery::new().catalog(&locator, &CatalogConfig::default())
    }

    #[test]
    fn test_catalog_directory_finds_nested_manifests() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("Cargo.toml"), CARGO_TOML).unwrap();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(
            root.join("web/package.json"),
            r#"{"name": "web", "version": "0.2.0"}"#,
        )
        .unwrap();
        fs::write(root.join("README.md"), "# app").unwrap();

        let result = catalog(SourceLocator::Directory(root.to_path_buf())).unwrap();

        let ids: Vec<_> = result.packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["Package-cargo-app-1.0.0", "Package-npm-web-0.2.0"]);
        assert_eq!(
            result.packages[1].source_path.as_deref(),
            Some(Path::new("web/package.json"))
        );
        assert_eq!(
            result.packages[0].purl.as_deref(),
            Some("pkg:cargo/app@1.0.0")
        );
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_catalog_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = catalog(SourceLocator::Directory(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(result, DiscoveryResult::default());
    }

    #[test]
    fn test_catalog_manifest_file_reports_itself() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Cargo.toml");
        fs::write(&path, CARGO_TOML).unwrap();

        let result = catalog(SourceLocator::File(path)).unwrap();

        assert_eq!(result.packages.len(), 1);
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].id, "File-Cargo.toml");
        assert_eq!(result.files[0].path, PathBuf::from("Cargo.toml"));
        assert!(result.files[0].checksums.contains_key(SHA256));
        assert_eq!(
            result.relationships,
            vec![DiscoveredRelationship {
                from: "Package-cargo-app-1.0.0".to_string(),
                to: "File-Cargo.toml".to_string(),
                kind: "DESCRIBED_BY".to_string(),
            }]
        );
    }

    #[test]
    fn test_catalog_plain_file_finds_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let result = catalog(SourceLocator::File(path)).unwrap();

        assert_eq!(result, DiscoveryResult::default());
    }

    #[test]
    fn test_malformed_manifest_is_discovery_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, "{ broken").unwrap();

        let err = catalog(SourceLocator::Directory(temp_dir.path().to_path_buf())).unwrap_err();

        match err.downcast_ref::<SbomError>() {
            Some(SbomError::Discovery { path: failed, details }) => {
                assert_eq!(failed, &path);
                assert!(details.contains("package.json"));
            }
            other => panic!("expected Discovery error, got {:?}", other),
        }
    }

    #[test]
    fn test_package_fields_carried_over() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pyproject.toml"),
            "[project]\nname = \"tool\"\nversion = \"0.3\"\nlicense = \"BSD-3-Clause\"\nauthors = [{ name = \"Jane Doe\" }]\n",
        )
        .unwrap();

        let result = catalog(SourceLocator::Directory(temp_dir.path().to_path_buf())).unwrap();
        let package = &result.packages[0];

        assert_eq!(package.name, "tool");
        assert_eq!(package.version, "0.3");
        assert_eq!(package.license_declared.as_deref(), Some("BSD-3-Clause"));
        assert_eq!(package.originator.person.as_deref(), Some("Jane Doe"));
    }
}
