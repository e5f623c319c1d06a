//! Package manifest and lockfile parsers
//!
//! Each recognized file name maps to one [`ManifestKind`]; parsing yields the
//! packages that file declares or pins, without any ecosystem-specific
//! resolution (workspace inheritance, dynamic versions) beyond reading the
//! literal values.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::shared::Result;

/// Manifest and lockfile formats recognized by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    CargoToml,
    CargoLock,
    PyProject,
    UvLock,
    PackageJson,
}

/// Package as read from a manifest, before identifiers are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPackage {
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    pub author: Option<String>,
}

impl ManifestKind {
    /// Recognizes a manifest by its file name
    pub fn detect(path: &Path) -> Option<Self> {
        match path.file_name()?.to_str()? {
            "Cargo.toml" => Some(Self::CargoToml),
            "Cargo.lock" => Some(Self::CargoLock),
            "pyproject.toml" => Some(Self::PyProject),
            "uv.lock" => Some(Self::UvLock),
            "package.json" => Some(Self::PackageJson),
            _ => None,
        }
    }

    /// Ecosystem name used in identifiers and package URLs
    pub fn ecosystem(self) -> &'static str {
        match self {
            Self::CargoToml | Self::CargoLock => "cargo",
            Self::PyProject | Self::UvLock => "pypi",
            Self::PackageJson => "npm",
        }
    }

    pub fn parse(self, content: &str) -> Result<Vec<ManifestPackage>> {
        match self {
            Self::CargoToml => parse_cargo_toml(content),
            Self::CargoLock => parse_cargo_lock(content),
            Self::PyProject => parse_pyproject(content),
            Self::UvLock => parse_uv_lock(content),
            Self::PackageJson => parse_package_json(content),
        }
    }

    /// Package URL for a package of this ecosystem
    pub fn purl(self, name: &str, version: &str) -> String {
        let name = match self {
            Self::PyProject | Self::UvLock => name.to_lowercase().replace('_', "-"),
            Self::PackageJson => name.replacen('@', "%40", 1),
            Self::CargoToml | Self::CargoLock => name.to_string(),
        };
        if version.is_empty() {
            format!("pkg:{}/{}", self.ecosystem(), name)
        } else {
            format!("pkg:{}/{}@{}", self.ecosystem(), name, version)
        }
    }
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

/// Fields that may be inherited from a workspace are kept as raw values
#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: String,
    #[serde(default)]
    version: Option<toml::Value>,
    #[serde(default)]
    license: Option<toml::Value>,
    #[serde(default)]
    authors: Option<toml::Value>,
}

#[derive(Debug, Deserialize)]
struct LockedPackages {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<PyProjectTable>,
}

#[derive(Debug, Deserialize)]
struct PyProjectTable {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    license: Option<toml::Value>,
    #[serde(default)]
    authors: Vec<PyProjectAuthor>,
}

#[derive(Debug, Deserialize)]
struct PyProjectAuthor {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    license: Option<serde_json::Value>,
    #[serde(default)]
    author: Option<serde_json::Value>,
}

fn parse_cargo_toml(content: &str) -> Result<Vec<ManifestPackage>> {
    let manifest: CargoManifest =
        toml::from_str(content).context("Failed to parse Cargo.toml")?;

    // A virtual workspace manifest has no [package] table
    let Some(package) = manifest.package else {
        return Ok(Vec::new());
    };

    let author = package
        .authors
        .as_ref()
        .and_then(toml::Value::as_array)
        .and_then(|authors| authors.first())
        .and_then(toml::Value::as_str)
        .map(strip_contact);

    Ok(vec![ManifestPackage {
        name: package.name,
        version: literal(package.version.as_ref()),
        license: package
            .license
            .as_ref()
            .and_then(toml::Value::as_str)
            .map(str::to_string),
        author,
    }])
}

fn parse_cargo_lock(content: &str) -> Result<Vec<ManifestPackage>> {
    let lockfile: LockedPackages =
        toml::from_str(content).context("Failed to parse Cargo.lock")?;
    Ok(locked(lockfile))
}

fn parse_uv_lock(content: &str) -> Result<Vec<ManifestPackage>> {
    let lockfile: LockedPackages = toml::from_str(content).context("Failed to parse uv.lock")?;
    Ok(locked(lockfile))
}

fn parse_pyproject(content: &str) -> Result<Vec<ManifestPackage>> {
    let pyproject: PyProject =
        toml::from_str(content).context("Failed to parse pyproject.toml")?;

    let Some(project) = pyproject.project else {
        return Ok(Vec::new());
    };

    // PEP 621 allows `license = "MIT"` as well as `license = { text = "MIT" }`
    let license = match &project.license {
        Some(toml::Value::String(expression)) => Some(expression.clone()),
        Some(toml::Value::Table(table)) => table
            .get("text")
            .and_then(toml::Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    Ok(vec![ManifestPackage {
        name: project.name,
        version: project.version.unwrap_or_default(),
        license,
        author: project.authors.into_iter().find_map(|a| a.name),
    }])
}

fn parse_package_json(content: &str) -> Result<Vec<ManifestPackage>> {
    let manifest: PackageJson =
        serde_json::from_str(content).context("Failed to parse package.json")?;

    let Some(name) = manifest.name.filter(|n| !n.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let license = match &manifest.license {
        Some(serde_json::Value::String(expression)) => Some(expression.clone()),
        Some(serde_json::Value::Object(object)) => object
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    let author = match &manifest.author {
        Some(serde_json::Value::String(author)) => Some(strip_contact(author)),
        Some(serde_json::Value::Object(object)) => object
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    Ok(vec![ManifestPackage {
        name,
        version: manifest.version.unwrap_or_default(),
        license,
        author,
    }])
}

fn locked(lockfile: LockedPackages) -> Vec<ManifestPackage> {
    lockfile
        .package
        .into_iter()
        .map(|pkg| ManifestPackage {
            name: pkg.name,
            version: pkg.version.unwrap_or_default(),
            ..Default::default()
        })
        .collect()
}

/// String value of a field, empty when it is inherited (`field.workspace = true`)
fn literal(value: Option<&toml::Value>) -> String {
    value
        .and_then(toml::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// `"Jane Doe <jane@example.com> (https://…)"` -> `"Jane Doe"`
fn strip_contact(author: &str) -> String {
    author
        .split(['<', '('])
        .next()
        .unwrap_or(author)
        .trim()
        .to_string()
}
