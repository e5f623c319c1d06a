use crate::application::dto::{BuildRequest, BuildResponse};
use crate::application::ingest::{expand_glob, DirectoryIngester, FileIngester};
use crate::ports::inbound::SbomBuildPort;
use crate::ports::outbound::{BuildObserver, DocumentWriter, InputKind, PackageDiscovery};
use crate::sbom_generation::domain::{Creator, Document, Originator, Package, SpdxId};
use crate::sbom_generation::services::DocumentMetadataGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// BuildSbomUseCase - Core use case assembling and writing one document
///
/// This use case orchestrates the build workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `D` - PackageDiscovery implementation
/// * `W` - DocumentWriter implementation
/// * `O` - BuildObserver implementation
pub struct BuildSbomUseCase<D, W, O> {
    discovery: D,
    writer: W,
    observer: O,
}

impl<D, W, O> BuildSbomUseCase<D, W, O>
where
    D: PackageDiscovery,
    W: DocumentWriter,
    O: BuildObserver,
{
    /// Creates a new BuildSbomUseCase with injected dependencies
    pub fn new(discovery: D, writer: W, observer: O) -> Self {
        Self {
            discovery,
            writer,
            observer,
        }
    }

    /// Executes the build
    ///
    /// Inputs are ingested strictly in request order. The first failure is
    /// reported to the observer and returned; nothing is written in that case.
    pub fn execute(&self, request: BuildRequest) -> Result<BuildResponse> {
        self.run(&request).inspect_err(|err| self.observer.on_error(err))
    }

    fn run(&self, request: &BuildRequest) -> Result<BuildResponse> {
        // Step 1: Document and target package
        let (mut document, target_id) = Self::new_document(request)?;

        // Step 2: Ingest every input, fail-fast
        for input in &request.inputs {
            self.ingest_input(input, &mut document, &target_id, &request.license)?;
        }

        // Step 3: Write
        self.writer
            .write_document(&document, &request.output_path)?;

        Ok(BuildResponse::new(
            request.output_path.clone(),
            document.package_count(),
            document.file_count(),
        ))
    }

    fn new_document(request: &BuildRequest) -> Result<(Document, SpdxId)> {
        let creator = Creator {
            person: request.author.clone(),
            organization: request.organization.clone(),
            tools: vec![DocumentMetadataGenerator::tool_identifier()],
        };
        let mut document = Document::new(request.name.clone(), creator);

        let target_id = SpdxId::for_package(&request.package_name, &request.package_version);
        let mut target = Package::new(
            target_id.clone(),
            request.package_name.clone(),
            request.package_version.clone(),
        );
        target.license_concluded = request.license.clone();
        target.license_declared = request.license.clone();
        target.files_analyzed = true;
        target.originator = Originator {
            person: Some(request.author.clone()),
            organization: None,
        };
        document.add_package(target)?;

        Ok((document, target_id))
    }

    /// Routes one input: directories to the directory ingester, anything else
    /// that exists to the file ingester, and the rest through glob expansion.
    fn ingest_input(
        &self,
        input: &str,
        document: &mut Document,
        target_id: &SpdxId,
        license: &str,
    ) -> Result<()> {
        let path = Path::new(input);
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_dir() => {
                self.observer.on_input_started(path, InputKind::Directory);
                DirectoryIngester::new(&self.discovery, &self.observer)
                    .ingest(path, document, target_id, license)
            }
            Ok(_) => {
                self.observer.on_input_started(path, InputKind::File);
                self.ingest_file(path, document, target_id, license)
            }
            Err(_) => {
                for matched in expand_glob(input)? {
                    self.observer
                        .on_input_started(&matched, InputKind::GlobMatch);
                    self.ingest_file(&matched, document, target_id, license)?;
                }
                Ok(())
            }
        }
    }

    fn ingest_file(
        &self,
        path: &Path,
        document: &mut Document,
        target_id: &SpdxId,
        license: &str,
    ) -> Result<()> {
        let document_name = document.name.clone();
        let target = document
            .package_mut(target_id)
            .ok_or_else(|| SbomError::Document {
                message: format!(
                    "target package {} is not part of document {}",
                    target_id, document_name
                ),
            })?;
        FileIngester::new(&self.discovery, &self.observer).ingest(path, target, license)
    }
}

impl<D, W, O> SbomBuildPort for BuildSbomUseCase<D, W, O>
where
    D: PackageDiscovery,
    W: DocumentWriter,
    O: BuildObserver,
{
    fn build(&self, request: BuildRequest) -> Result<BuildResponse> {
        self.execute(request)
    }
}
