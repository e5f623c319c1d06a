use sha2::{Digest, Sha256};
use std::fmt;

/// Prefix every document identifier carries
pub const SPDX_ID_PREFIX: &str = "SPDXRef-";

/// Length of the path digest suffix on derived file identifiers
const FILE_DIGEST_LEN: usize = 12;

/// NewType wrapper for an SPDX element identifier
///
/// Values are always non-empty, start with `SPDXRef-`, and contain only the
/// characters SPDX allows in an identifier (`A-Z a-z 0-9 . -`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpdxId(String);

impl SpdxId {
    /// Rewrites an identifier assigned by a discovery engine by prefixing it.
    ///
    /// Returns `None` when nothing usable is left after sanitizing. An input
    /// that already carries the prefix is not prefixed twice.
    pub fn prefixed(raw: &str) -> Option<Self> {
        let raw = raw.strip_prefix(SPDX_ID_PREFIX).unwrap_or(raw);
        let body = sanitize(raw);
        if body.is_empty() {
            return None;
        }
        Some(Self(format!("{}{}", SPDX_ID_PREFIX, body)))
    }

    /// Identifier for a package built from its name and version.
    pub fn for_package(name: &str, version: &str) -> Self {
        let seed = if version.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", name, version)
        };
        let body = sanitize(&seed);
        if body.is_empty() {
            return Self(format!("{}Package-unnamed", SPDX_ID_PREFIX));
        }
        Self(format!("{}Package-{}", SPDX_ID_PREFIX, body))
    }

    /// Identifier for a file record built from its path.
    ///
    /// A short digest of the full path keeps identifiers of files with the
    /// same base name apart.
    pub fn for_file(path: &str) -> Self {
        let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let digest = hex::encode(Sha256::digest(path.as_bytes()));
        let body = sanitize(base);
        let body = if body.is_empty() { "file".to_string() } else { body };
        Self(format!(
            "{}File-{}-{}",
            SPDX_ID_PREFIX,
            body,
            &digest[..FILE_DIGEST_LEN]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpdxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps characters SPDX does not allow in identifiers to `-`
fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_adds_prefix() {
        let id = SpdxId::prefixed("Package-cargo-serde-1.0.0").unwrap();
        assert_eq!(id.as_str(), "SPDXRef-Package-cargo-serde-1.0.0");
    }

    #[test]
    fn test_prefixed_does_not_double_prefix() {
        let id = SpdxId::prefixed("SPDXRef-Package-x").unwrap();
        assert_eq!(id.as_str(), "SPDXRef-Package-x");
    }

    #[test]
    fn test_prefixed_sanitizes_invalid_characters() {
        let id = SpdxId::prefixed("Package-npm-@scope/left pad").unwrap();
        assert_eq!(id.as_str(), "SPDXRef-Package-npm--scope-left-pad");
    }

    #[test]
    fn test_prefixed_empty_is_none() {
        assert!(SpdxId::prefixed("").is_none());
        assert!(SpdxId::prefixed("   ").is_none());
        assert!(SpdxId::prefixed("///").is_none());
    }

    #[test]
    fn test_for_package() {
        let id = SpdxId::for_package("my app", "1.2.3");
        assert_eq!(id.as_str(), "SPDXRef-Package-my-app-1.2.3");
    }

    #[test]
    fn test_for_package_without_name() {
        let id = SpdxId::for_package("", "");
        assert_eq!(id.as_str(), "SPDXRef-Package-unnamed");
    }

    #[test]
    fn test_for_file_distinguishes_same_base_name() {
        let a = SpdxId::for_file("/srv/a/config.toml");
        let b = SpdxId::for_file("/srv/b/config.toml");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("SPDXRef-File-config.toml-"));
    }

    #[test]
    fn test_for_file_is_deterministic() {
        assert_eq!(
            SpdxId::for_file("/tmp/pkgdir/a.txt"),
            SpdxId::for_file("/tmp/pkgdir/a.txt")
        );
    }
}
