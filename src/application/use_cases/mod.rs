/// Use cases module containing application business logic orchestration
mod build_sbom;

pub use build_sbom::BuildSbomUseCase;
