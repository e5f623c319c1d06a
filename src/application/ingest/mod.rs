//! Ingestion of build inputs into the document
//!
//! A build input is a directory, a single file or a glob pattern. Each
//! ingester runs the discovery engine on its input, normalizes what was found
//! and attaches it to the document or the target package.

mod directory_ingester;
mod file_ingester;
mod glob_expansion;

#[cfg(test)]
pub(crate) mod test_support;

pub use directory_ingester::DirectoryIngester;
pub use file_ingester::FileIngester;
pub use glob_expansion::expand_glob;

use crate::ports::outbound::{CatalogConfig, PackageDiscovery, SourceLocator};
use crate::sbom_generation::domain::DiscoveryResult;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Runs the discovery engine, reporting any failure as a discovery error
/// for the scanned path.
fn catalog<D: PackageDiscovery>(
    discovery: &D,
    locator: &SourceLocator,
    config: &CatalogConfig,
) -> Result<DiscoveryResult> {
    discovery.catalog(locator, config).map_err(|err| {
        if matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::Discovery { .. })
        ) {
            return err;
        }
        SbomError::Discovery {
            path: locator.path().to_path_buf(),
            details: format!("{:#}", err),
        }
        .into()
    })
}
