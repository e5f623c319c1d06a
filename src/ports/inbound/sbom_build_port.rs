use crate::application::dto::{BuildRequest, BuildResponse};
use crate::shared::Result;

/// SbomBuildPort - Inbound port for the build use case
///
/// This port defines the interface that external adapters (CLI, tests)
/// use to trigger a build. It represents the application's public API.
pub trait SbomBuildPort {
    /// Assembles a document from the request's inputs and writes it
    ///
    /// # Errors
    /// Returns an error if:
    /// - An input does not exist and matches nothing as a glob pattern
    /// - Package discovery fails on an input
    /// - A file cannot be read
    /// - The document cannot be written
    ///
    /// The first error ends the build; no output is written then.
    fn build(&self, request: BuildRequest) -> Result<BuildResponse>;
}
