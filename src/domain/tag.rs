use crate::domain::version::Version;
use regex::Regex;
use std::sync::OnceLock;

/// Tag names carrying a version: an optional non-numeric prefix (which may
/// end in `v`) followed by a trailing `major.minor.patch` triple.
/// Matches `1.2.3`, `v1.2.3`, `app-1.2.3`, `app-v1.2.3`.
const VERSION_TAG_PATTERN: &str = r"^(?:.*[^\d.])?(?P<version>\d+\.\d+\.\d+)$";

fn version_tag_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX
        .get_or_init(|| Regex::new(VERSION_TAG_PATTERN).ok())
        .as_ref()
}

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract the bare numeric triple (e.g., "app-v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> Option<&str> {
        version_tag_regex()?
            .captures(&self.name)?
            .name("version")
            .map(|m| m.as_str())
    }

    /// Parsed version, when the tag carries one that fits in the version model
    pub fn version(&self) -> Option<Version> {
        self.version_part()
            .and_then(|part| Version::parse(part).ok())
    }
}
