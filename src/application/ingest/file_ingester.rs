use super::catalog;
use crate::ports::outbound::{BuildObserver, CatalogConfig, PackageDiscovery, SourceLocator};
use crate::sbom_generation::domain::{File, Package};
use crate::sbom_generation::services::{
    ChecksumEngine, EntityNormalizer, LicenseOverride, PathIdentityResolver,
};
use crate::shared::Result;
use std::path::Path;

/// FileIngester - Adds one file input to the target package
///
/// Packages the discovery engine recognizes in the file become sub-packages
/// of the target. Internal file entries it reports are attached as well,
/// except an entry that turns out to be the input itself: the input is
/// always recorded exactly once, with checksums of its content.
pub struct FileIngester<'a, D, O> {
    discovery: &'a D,
    observer: &'a O,
    config: CatalogConfig,
}

impl<'a, D, O> FileIngester<'a, D, O>
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

    /// Ingests `path` into `target`.
    ///
    /// # Errors
    /// - `SbomError::NotFound` if the input or a reported file entry is missing
    /// - `SbomError::Discovery` if the engine fails on the input
    /// - `SbomError::Io` if the input cannot be read
    ///
    /// A failure part-way leaves what was already attached in place.
    pub fn ingest(&self, path: &Path, target: &mut Package, license: &str) -> Result<()> {
        let input_identity = PathIdentityResolver::identify(path)?;

        let discovered = catalog(
            self.discovery,
            &SourceLocator::File(path.to_path_buf()),
            &self.config,
        )?;
        let normalizer = EntityNormalizer::new(license, LicenseOverride::DeclaredOnly);

        for raw in discovered.packages {
            let package = normalizer.normalize_package(raw, Path::new(""));
            let id = package.id().clone();
            let replaces = target.packages().contains_key(&id);
            target.add_package(package)?;
            if replaces {
                self.observer.on_package_replaced(&id);
            }
            if let Some(added) = target.packages().get(&id) {
                self.observer.on_package_added(added);
            }
        }

        // Entries are reported relative to the directory holding the input
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        for raw in discovered.files {
            let file = normalizer.normalize_file(raw, base_dir);
            let identity = PathIdentityResolver::identify(file.path())?;
            if PathIdentityResolver::same_file(&input_identity, &identity) {
                continue;
            }
            self.observer.on_file_ingested(&file);
            target.add_file(file)?;
        }

        let checksums = ChecksumEngine::compute(path)?;
        let mut root = File::from_checksums(path.to_path_buf(), checksums);
        root.license_concluded = Some(license.to_string());
        root.license_info_in_file = Some(license.to_string());
        self.observer.on_file_ingested(&root);
        target.add_file(root)
    }
}
