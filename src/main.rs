use fs_sbom::adapters::outbound::console::{ProgressBuildObserver, TracingBuildObserver};
use fs_sbom::adapters::outbound::discovery::ManifestDiscovery;
use fs_sbom::adapters::outbound::filesystem::FileDocumentWriter;
use fs_sbom::application::dto::BuildResponse;
use fs_sbom::application::factories::FormatterFactory;
use fs_sbom::application::use_cases::BuildSbomUseCase;
use fs_sbom::cli::Args;
use fs_sbom::config::{self, ConfigFile};
use fs_sbom::ports::inbound::SbomBuildPort;
use fs_sbom::shared::error::ExitCode;
use fs_sbom::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with ExitCode::InvalidArguments (2) on its own
    let args = Args::parse_args();
    init_tracing(args.log_level());

    match run(args) {
        Ok(response) => {
            eprintln!(
                "{} Output complete: {} ({} packages, {} files)",
                "✅".green(),
                response.output_path.display(),
                response.package_count,
                response.file_count
            );
        }
        Err(e) => {
            report_error(&e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<BuildResponse> {
    let config = load_config(&args)?;
    let request = args.to_request(&config)?;
    let format = args.output_format(&config)?;

    // Create adapters (Dependency Injection)
    let discovery = ManifestDiscovery::new();
    let writer = FileDocumentWriter::new(FormatterFactory::create(format));

    let use_case: Box<dyn SbomBuildPort> = if args.progress {
        let observer = ProgressBuildObserver::new(TracingBuildObserver::new());
        Box::new(BuildSbomUseCase::new(discovery, writer, observer))
    } else {
        Box::new(BuildSbomUseCase::new(
            discovery,
            writer,
            TracingBuildObserver::new(),
        ))
    };

    eprintln!("{}", FormatterFactory::progress_message(format));
    use_case.build(request)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn report_error(e: &anyhow::Error) {
    eprintln!("\n{} {}\n", "❌".red(), "An error occurred:".red().bold());
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\n{} {}", "Caused by:".yellow(), cause);
    }

    eprintln!();
}
