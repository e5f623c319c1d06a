use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// BuildRequest - Internal request DTO for the build use case
///
/// Every string field is required; `inputs` is processed in order and must
/// not be empty. Construct it through [`BuildRequest::builder`], which
/// enforces both rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Document name
    pub name: String,
    /// Creator person, also the target package's originator
    pub author: String,
    /// Creator organization
    pub organization: String,
    /// License expression applied to the target package and ingested entities
    pub license: String,
    /// Name of the target package
    pub package_name: String,
    /// Version of the target package
    pub package_version: String,
    /// Directory paths, file paths or glob patterns
    pub inputs: Vec<String>,
    /// Where the document is written
    pub output_path: PathBuf,
}

impl BuildRequest {
    pub fn builder() -> BuildRequestBuilder {
        BuildRequestBuilder::default()
    }
}

/// Builder for [`BuildRequest`]
#[derive(Debug, Default, Clone)]
pub struct BuildRequestBuilder {
    name: Option<String>,
    author: Option<String>,
    organization: Option<String>,
    license: Option<String>,
    package_name: Option<String>,
    package_version: Option<String>,
    inputs: Vec<String>,
    output_path: Option<PathBuf>,
}

impl BuildRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn package_version(mut self, package_version: impl Into<String>) -> Self {
        self.package_version = Some(package_version.into());
        self
    }

    /// Appends one input
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Appends several inputs, keeping their order
    pub fn inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    /// `SbomError::InvalidRequest` naming the first missing or blank field.
    pub fn build(self) -> Result<BuildRequest> {
        let inputs: Vec<String> = self
            .inputs
            .into_iter()
            .filter(|input| !input.trim().is_empty())
            .collect();
        if inputs.is_empty() {
            return Err(invalid("at least one input is required"));
        }

        let output_path = match self.output_path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(invalid("output path is required")),
        };

        Ok(BuildRequest {
            name: required("name", self.name)?,
            author: required("author", self.author)?,
            organization: required("organization", self.organization)?,
            license: required("license", self.license)?,
            package_name: required("package name", self.package_name)?,
            package_version: required("package version", self.package_version)?,
            inputs,
            output_path,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(invalid(&format!("{} is required", field))),
    }
}

fn invalid(message: &str) -> anyhow::Error {
    SbomError::InvalidRequest {
        message: message.to_string(),
    }
    .into()
}
