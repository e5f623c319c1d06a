use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{BuildRequest, OutputFormat};
use crate::config::ConfigFile;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Generate SPDX documents from files, directories and glob patterns
#[derive(Parser, Debug)]
#[command(name = "fs-sbom")]
#[command(version)]
#[command(about = "Generate SPDX documents from files, directories and glob patterns", long_about = None)]
pub struct Args {
    /// Files, directories or glob patterns to ingest, in order
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Document name
    #[arg(long)]
    pub name: Option<String>,

    /// Creator person, also recorded as the package originator
    #[arg(long)]
    pub author: Option<String>,

    /// Creator organization
    #[arg(long)]
    pub organization: Option<String>,

    /// License expression applied to the package and every ingested file
    #[arg(long)]
    pub license: Option<String>,

    /// Name of the package that holds the ingested files
    #[arg(long = "pkgname", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Version of the package that holds the ingested files
    #[arg(long = "pkgversion", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: json or tag-value
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to ./fs-sbom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show a spinner while files are ingested
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter directive selected by `-v` flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Merges the command line over `config` into a validated build request.
    ///
    /// Command-line values win. Config inputs are used only when no inputs
    /// were given on the command line.
    pub fn to_request(&self, config: &ConfigFile) -> Result<BuildRequest> {
        let mut builder = BuildRequest::builder();

        if let Some(name) = pick(&self.name, &config.name) {
            builder = builder.name(name);
        }
        if let Some(author) = pick(&self.author, &config.author) {
            builder = builder.author(author);
        }
        if let Some(organization) = pick(&self.organization, &config.organization) {
            builder = builder.organization(organization);
        }
        if let Some(license) = pick(&self.license, &config.license) {
            builder = builder.license(license);
        }
        if let Some(package_name) = pick(&self.package_name, &config.package_name) {
            builder = builder.package_name(package_name);
        }
        if let Some(package_version) = pick(&self.package_version, &config.package_version) {
            builder = builder.package_version(package_version);
        }
        if let Some(output) = self.output.as_ref().or(config.output.as_ref()) {
            builder = builder.output_path(output.clone());
        }

        builder = if self.inputs.is_empty() {
            builder.inputs(config.inputs.iter().flatten().cloned())
        } else {
            builder.inputs(self.inputs.iter().cloned())
        };

        builder.build()
    }

    /// Resolves the output format, command line first, then config, then JSON.
    pub fn output_format(&self, config: &ConfigFile) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        match config.format.as_deref() {
            Some(format) => format
                .parse::<OutputFormat>()
                .map_err(|message| SbomError::InvalidRequest { message }.into()),
            None => Ok(OutputFormat::default()),
        }
    }
}

fn pick(cli: &Option<String>, config: &Option<String>) -> Option<String> {
    cli.as_ref().or(config.as_ref()).cloned()
}
