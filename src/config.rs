//! Configuration file support for fs-sbom.
//!
//! Provides YAML-based configuration through `fs-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fs-sbom.config.yml";

/// Top-level configuration file schema.
///
/// Every field mirrors a command-line option; command-line values win.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub author: Option<String>,
    pub organization: Option<String>,
    pub license: Option<String>,
    pub package_name: Option<String>,
    pub package_version: Option<String>,
    pub inputs: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes as null, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(path, &config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref inputs) = config.inputs {
        for (i, input) in inputs.iter().enumerate() {
            if input.trim().is_empty() {
                bail!(
                    "Invalid config: inputs[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a file, a directory or a glob pattern (e.g., \"dist/*.whl\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(path: &Path, config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(
            config = %path.display(),
            field = %key,
            "unknown config field will be ignored"
        );
    }
}
