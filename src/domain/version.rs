use crate::error::{Result, ScmVersionError};
use std::fmt;
use std::str::FromStr;

/// Three-component release version (major.minor.patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Version component, ordered by significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a bare `major.minor.patch` string (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Exactly three dot-separated segments of ASCII digits are accepted.
    /// Prefixes, signs, whitespace and pre-release suffixes are all rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(ScmVersionError::invalid_format(format!(
                "'{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_segment(text, parts[0])?;
        let minor = parse_segment(text, parts[1])?;
        let patch = parse_segment(text, parts[2])?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Increment a component, resetting every less significant one to zero
    ///
    /// # Returns
    /// * `Ok(Version)` - The incremented version
    /// * `Err(Overflow)` - If the component is already at `u32::MAX`
    pub fn increment(&self, component: Component) -> Result<Self> {
        let bumped = match component {
            Component::Major => self.major.checked_add(1).map(|major| Version {
                major,
                minor: 0,
                patch: 0,
            }),
            Component::Minor => self.minor.checked_add(1).map(|minor| Version {
                major: self.major,
                minor,
                patch: 0,
            }),
            Component::Patch => self.patch.checked_add(1).map(|patch| Version {
                major: self.major,
                minor: self.minor,
                patch,
            }),
        };

        bumped.ok_or_else(|| {
            ScmVersionError::overflow(format!(
                "cannot increment {} component of '{}'",
                component, self
            ))
        })
    }

    /// Render the version followed by a literal suffix (which may be empty)
    pub fn format_with_suffix(&self, suffix: &str) -> String {
        format!("{}{}", self, suffix)
    }
}

// `u32::from_str` accepts a leading '+', so digits are checked first.
fn parse_segment(text: &str, segment: &str) -> Result<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScmVersionError::invalid_format(format!(
            "'{}' - segment '{}' is not a number",
            text, segment
        )));
    }

    segment.parse::<u32>().map_err(|_| {
        ScmVersionError::invalid_format(format!(
            "'{}' - segment '{}' is out of range",
            text, segment
        ))
    })
}

impl FromStr for Version {
    type Err = ScmVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "MAJOR"),
            Component::Minor => write!(f, "MINOR"),
            Component::Patch => write!(f, "PATCH"),
        }
    }
}
