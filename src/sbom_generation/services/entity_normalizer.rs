use crate::sbom_generation::domain::{DiscoveredFile, DiscoveredPackage, File, Package, SpdxId};
use std::path::{Component, Path, PathBuf};

/// Which license fields the build-supplied license overrides on packages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseOverride {
    /// Directory inputs: concluded and declared are both replaced
    ConcludedAndDeclared,
    /// File inputs: declared is replaced, concluded stays as discovered
    DeclaredOnly,
}

/// EntityNormalizer service converting discovered entities into document records
///
/// Pure data transformation; never fails.
pub struct EntityNormalizer<'a> {
    license: &'a str,
    license_override: LicenseOverride,
}

impl<'a> EntityNormalizer<'a> {
    pub fn new(license: &'a str, license_override: LicenseOverride) -> Self {
        Self {
            license,
            license_override,
        }
    }

    /// Converts a discovered package.
    ///
    /// The identifier is the discovered one with the document prefix. A
    /// package the engine left without an identifier gets one derived from its
    /// name and version. `base_dir` rebases the manifest path; an empty
    /// `base_dir` keeps the engine's path.
    pub fn normalize_package(&self, raw: DiscoveredPackage, base_dir: &Path) -> Package {
        let id = SpdxId::prefixed(&raw.id)
            .unwrap_or_else(|| SpdxId::for_package(&raw.name, &raw.version));

        let mut package = Package::new(id, raw.name, raw.version);
        package.originator = raw.originator;
        package.purl = raw.purl;
        package.source_path = raw.source_path.map(|p| rebase(base_dir, &p));
        package.license_declared = self.license.to_string();
        package.license_concluded = match self.license_override {
            LicenseOverride::ConcludedAndDeclared => self.license.to_string(),
            LicenseOverride::DeclaredOnly => raw.license_concluded.unwrap_or_default(),
        };
        package
    }

    /// Converts a discovered file, rebasing its path onto `base_dir`.
    ///
    /// Engines report archive-internal and source-relative paths; joining them
    /// onto the directory that holds the scanned input makes them resolvable
    /// on the real filesystem.
    pub fn normalize_file(&self, raw: DiscoveredFile, base_dir: &Path) -> File {
        let path = rebase(base_dir, &raw.path);
        let id = SpdxId::prefixed(&raw.id)
            .unwrap_or_else(|| SpdxId::for_file(&path.to_string_lossy()));

        let mut file = File::new(id, path);
        file.checksums = raw.checksums;
        file.license_concluded = Some(self.license.to_string());
        file
    }
}

/// Joins `path` onto `base`, treating an absolute `path` as relative to `base`.
fn rebase(base: &Path, path: &Path) -> PathBuf {
    if base.as_os_str().is_empty() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    base.join(relative)
}
