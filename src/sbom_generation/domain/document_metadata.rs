/// DocumentMetadata value object: creation details stamped on a serialized document
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    created: String,
    tool_name: String,
    tool_version: String,
    namespace: String,
}

impl DocumentMetadata {
    pub fn new(created: String, tool_name: String, tool_version: String, namespace: String) -> Self {
        Self {
            created,
            tool_name,
            tool_version,
            namespace,
        }
    }

    /// RFC 3339 creation timestamp
    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// `name@version`, as recorded in the document's creator tools
    pub fn tool_identifier(&self) -> String {
        format!("{}@{}", self.tool_name, self.tool_version)
    }

    /// Unique document namespace URI
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
