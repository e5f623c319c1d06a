use super::catalog;
use crate::ports::outbound::{BuildObserver, CatalogConfig, PackageDiscovery, SourceLocator};
use crate::sbom_generation::domain::{Document, File, PackageMap, SpdxId};
use crate::sbom_generation::services::{ChecksumEngine, EntityNormalizer, LicenseOverride};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// DirectoryIngester - Adds one directory input to the document
///
/// Packages discovered under the directory are merged into the document's
/// top-level package map (a package with an identifier already in the
/// document replaces it). A discovered package carrying the target package's
/// identifier is skipped with a warning. Every regular file under the
/// directory becomes a file record of the target package.
pub struct DirectoryIngester<'a, D, O> {
    discovery: &'a D,
    observer: &'a O,
    config: CatalogConfig,
}

impl<'a, D, O> DirectoryIngester<'a, D, O>
where
    D: PackageDiscovery,
    O: BuildObserver,
{
    pub fn new(discovery: &'a D, observer: &'a O) -> Self {
        Self {
            discovery,
            observer,
            config: CatalogConfig::default(),
        }
    }

    /// Ingests the directory at `path`.
    ///
    /// Files are visited in file-name order. Symlinks, directories and
    /// special files are skipped. A file that disappears between being listed
    /// and being read is skipped silently.
    ///
    /// # Errors
    /// - `SbomError::NotFound` if `path` is missing
    /// - `SbomError::Discovery` if the engine fails on the directory
    /// - `SbomError::Io` if the walk or a file read fails
    /// - `SbomError::Document` if `target_id` is not in the document
    pub fn ingest(
        &self,
        path: &Path,
        document: &mut Document,
        target_id: &SpdxId,
        license: &str,
    ) -> Result<()> {
        fs::symlink_metadata(path).map_err(|e| SbomError::from_io(path, "stat", e))?;

        let discovered = catalog(
            self.discovery,
            &SourceLocator::Directory(path.to_path_buf()),
            &self.config,
        )?;
        let normalizer = EntityNormalizer::new(license, LicenseOverride::ConcludedAndDeclared);

        let mut packages = PackageMap::new();
        let mut added = Vec::new();
        for raw in discovered.packages {
            let package = normalizer.normalize_package(raw, path);
            // The target package is owned by the build, never by discovery
            if package.id() == target_id {
                tracing::warn!(
                    id = %target_id,
                    path = %path.display(),
                    "Skipping discovered package that shares the target package identifier"
                );
                continue;
            }
            added.push(package.id().clone());
            packages.insert(package.id().clone(), package);
        }
        for id in document.merge_packages(packages) {
            self.observer.on_package_replaced(&id);
        }
        for id in &added {
            if let Some(package) = document.package(id) {
                self.observer.on_package_added(package);
            }
        }

        let document_name = document.name.clone();
        let target = document
            .package_mut(target_id)
            .ok_or_else(|| SbomError::Document {
                message: format!(
                    "target package {} is not part of document {}",
                    target_id, document_name
                ),
            })?;

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_vanished(&err) => continue,
                Err(err) => return Err(walk_error(path, err).into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(file) = walked_file(entry.path(), license)? {
                self.observer.on_file_ingested(&file);
                target.add_file(file)?;
            }
        }

        Ok(())
    }
}

/// Builds the File record for one walked path.
///
/// Returns `None` when the file vanished after being listed.
fn walked_file(path: &Path, license: &str) -> std::result::Result<Option<File>, SbomError> {
    let checksums = match ChecksumEngine::compute(path) {
        Ok(checksums) => checksums,
        Err(err) if err.is_not_found() => return Ok(None),
        Err(err) => return Err(err),
    };

    let mut file = File::from_checksums(path.to_path_buf(), checksums);
    file.license_info_in_file = Some(license.to_string());
    Ok(Some(file))
}

fn is_vanished(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn walk_error(root: &Path, err: walkdir::Error) -> SbomError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    SbomError::Io {
        path,
        operation: "walk".to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ingest::test_support::{
        discovered_package, RecordingObserver, StubDiscovery,
    };
    use crate::sbom_generation::domain::{Creator, DiscoveryResult, Package, SHA256};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    fn document_with_target() -> (Document, SpdxId) {
        let mut document = Document::new("demo", Creator::default());
        let id = SpdxId::for_package("app", "1.0");
        document
            .add_package(Package::new(id.clone(), "app", "1.0"))
            .unwrap();
        (document, id)
    }

    fn ingest(
        discovery: &StubDiscovery,
        observer: &RecordingObserver,
        path: &Path,
        document: &mut Document,
        target_id: &SpdxId,
    ) -> Result<()> {
        DirectoryIngester::new(discovery, observer).ingest(path, document, target_id, "MIT")
    }

    #[test]
    fn test_ingest_single_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
        let (mut document, id) = document_with_target();
        let observer = RecordingObserver::default();

        ingest(&StubDiscovery::new(), &observer, temp_dir.path(), &mut document, &id).unwrap();

        let files = document.package(&id).unwrap().files();
        assert_eq!(files.len(), 1);
        assert!(files[0].path().ends_with("a.txt"));
        assert_eq!(files[0].path(), temp_dir.path().join("a.txt"));
        assert_eq!(files[0].checksum(SHA256), Some(HELLO_SHA256));
        assert_eq!(files[0].license_info_in_file.as_deref(), Some("MIT"));
        assert!(files[0].license_concluded.is_none());
    }

    #[test]
    fn test_only_regular_files_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("one.txt"), "1").unwrap();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::write(root.join("nested/two.txt"), "2").unwrap();
        fs::write(root.join("nested/deeper/three.txt"), "3").unwrap();
        fs::create_dir(root.join("empty")).unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(root.join("one.txt"), root.join("link.txt")).unwrap();
        let (mut document, id) = document_with_target();
        let observer = RecordingObserver::default();

        ingest(&StubDiscovery::new(), &observer, root, &mut document, &id).unwrap();

        let paths: Vec<PathBuf> = document
            .package(&id)
            .unwrap()
            .files()
            .iter()
            .map(|f| f.path().to_path_buf())
            .collect();
        assert_eq!(
            paths,
            vec![
                root.join("nested/deeper/three.txt"),
                root.join("nested/two.txt"),
                root.join("one.txt"),
            ]
        );
        assert_eq!(observer.events_starting_with("file").len(), 3);
    }

    #[test]
    fn test_discovered_packages_merged_into_document() {
        let temp_dir = TempDir::new().unwrap();
        let discovery = StubDiscovery::new().with_result(
            temp_dir.path(),
            DiscoveryResult {
                packages: vec![discovered_package("Package-cargo-serde-1.0.0", "serde", "1.0.0")],
                ..Default::default()
            },
        );
        let (mut document, id) = document_with_target();
        let observer = RecordingObserver::default();

        ingest(&discovery, &observer, temp_dir.path(), &mut document, &id).unwrap();

        let serde_id = SpdxId::prefixed("Package-cargo-serde-1.0.0").unwrap();
        let serde = document.package(&serde_id).unwrap();
        assert_eq!(serde.license_concluded, "MIT");
        assert_eq!(serde.license_declared, "MIT");
        assert_eq!(document.packages().len(), 2);

        let calls = discovery.calls.borrow();
        assert_eq!(
            calls[0].0,
            SourceLocator::Directory(temp_dir.path().to_path_buf())
        );
        assert!(calls[0].1.include_indexed_archives);
        assert!(calls[0].1.include_unindexed_archives);
    }

    #[test]
    fn test_colliding_package_replaced_and_reported() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let discovery = StubDiscovery::new()
            .with_result(
                first.path(),
                DiscoveryResult {
                    packages: vec![discovered_package("Package-lib", "lib", "1.0")],
                    ..Default::default()
                },
            )
            .with_result(
                second.path(),
                DiscoveryResult {
                    packages: vec![discovered_package("Package-lib", "lib", "2.0")],
                    ..Default::default()
                },
            );
        let (mut document, id) = document_with_target();
        let observer = RecordingObserver::default();

        ingest(&discovery, &observer, first.path(), &mut document, &id).unwrap();
        ingest(&discovery, &observer, second.path(), &mut document, &id).unwrap();

        let lib_id = SpdxId::prefixed("Package-lib").unwrap();
        assert_eq!(document.packages().len(), 2);
        assert_eq!(document.package(&lib_id).unwrap().version, "2.0");
        assert_eq!(
            observer.events_starting_with("replaced"),
            vec![format!("replaced {}", lib_id)]
        );
    }

    #[test]
    fn test_discovered_package_with_target_id_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
        let discovery = StubDiscovery::new().with_result(
            temp_dir.path(),
            DiscoveryResult {
                packages: vec![
                    discovered_package("Package-app-1.0", "app", "1.0"),
                    discovered_package("Package-lib", "lib", "1.0"),
                ],
                ..Default::default()
            },
        );
        let (mut document, id) = document_with_target();
        {
            let target = document.package_mut(&id).unwrap();
            target.files_analyzed = true;
            target.originator.person = Some("Jane Doe".to_string());
            target
                .add_file(File::from_checksums(
                    PathBuf::from("/inputs/first.txt"),
                    ChecksumEngine::digest(b"first"),
                ))
                .unwrap();
        }
        let observer = RecordingObserver::default();

        ingest(&discovery, &observer, temp_dir.path(), &mut document, &id).unwrap();

        let target = document.package(&id).unwrap();
        assert!(target.files_analyzed);
        assert_eq!(target.originator.person.as_deref(), Some("Jane Doe"));
        assert_eq!(target.files().len(), 2);
        assert_eq!(target.files()[0].path(), Path::new("/inputs/first.txt"));
        assert_eq!(document.packages().len(), 2);
        assert!(observer.events_starting_with("replaced").is_empty());
        assert_eq!(
            observer.events_starting_with("package"),
            vec!["package SPDXRef-Package-lib".to_string()]
        );
    }

    #[test]
    fn test_package_added_reported_after_merge() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
        let discovery = StubDiscovery::new().with_result(
            temp_dir.path(),
            DiscoveryResult {
                packages: vec![discovered_package("Package-lib", "lib", "1.0")],
                ..Default::default()
            },
        );
        let (mut document, id) = document_with_target();
        document
            .merge_packages(PackageMap::from([(
                SpdxId::prefixed("Package-lib").unwrap(),
                Package::new(SpdxId::prefixed("Package-lib").unwrap(), "lib", "0.9"),
            )]));
        let observer = RecordingObserver::default();

        ingest(&discovery, &observer, temp_dir.path(), &mut document, &id).unwrap();

        let events = observer.events.borrow();
        assert_eq!(
            events[..2],
            [
                "replaced SPDXRef-Package-lib".to_string(),
                "package SPDXRef-Package-lib".to_string(),
            ]
        );
        assert!(events[2].starts_with("file "));
    }

    #[test]
    fn test_walked_file_records_checksums_and_license() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();

        let file = walked_file(&path, "MIT").unwrap().unwrap();

        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.checksum(SHA256), Some(HELLO_SHA256));
        assert_eq!(file.license_info_in_file.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_walked_file_vanished_after_listing_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.txt");
        fs::write(&path, "hello").unwrap();
        fs::remove_file(&path).unwrap();

        assert!(walked_file(&path, "MIT").unwrap().is_none());
    }

    #[test]
    fn test_walked_file_other_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("plain.txt");
        fs::write(&not_a_dir, "hello").unwrap();

        // A regular file used as a directory component fails with ENOTDIR
        let err = walked_file(&not_a_dir.join("child.txt"), "MIT").unwrap_err();

        assert!(matches!(err, SbomError::Io { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let (mut document, id) = document_with_target();
        let discovery = StubDiscovery::new();
        let observer = RecordingObserver::default();

        let err = ingest(
            &discovery,
            &observer,
            Path::new("/nonexistent/pkgdir"),
            &mut document,
            &id,
        )
        .unwrap_err();

        assert!(crate::shared::error::is_not_found(&err));
        assert!(discovery.calls.borrow().is_empty());
    }

    #[test]
    fn test_discovery_failure_stops_before_walk() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
        let discovery = StubDiscovery::new().failing_on(temp_dir.path());
        let (mut document, id) = document_with_target();
        let observer = RecordingObserver::default();

        let err = ingest(&discovery, &observer, temp_dir.path(), &mut document, &id).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::Discovery { .. })
        ));
        assert!(document.package(&id).unwrap().files().is_empty());
    }

    #[test]
    fn test_missing_target_is_document_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut document = Document::new("demo", Creator::default());
        let observer = RecordingObserver::default();

        let err = ingest(
            &StubDiscovery::new(),
            &observer,
            temp_dir.path(),
            &mut document,
            &SpdxId::for_package("absent", "0"),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::Document { .. })
        ));
    }
}
