use std::fmt;

/// Marks a version as a final release or a work-in-progress build
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualifier {
    /// Final version, no suffix
    Release,
    /// Work-in-progress version, `-SNAPSHOT` suffix
    Snapshot,
}

impl Qualifier {
    /// Literal suffix appended to the formatted version
    pub fn suffix(&self) -> &'static str {
        match self {
            Qualifier::Release => "",
            Qualifier::Snapshot => "-SNAPSHOT",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Release => write!(f, "RELEASE"),
            Qualifier::Snapshot => write!(f, "SNAPSHOT"),
        }
    }
}
