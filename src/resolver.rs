//! Version computation from the latest tag and a resolved [Configuration]

use crate::configuration::{Configuration, Mode, KEY_VERSION};
use crate::domain::Version;
use crate::error::Result;
use crate::git::{GitTagSource, TagSource};
use tracing::info;

/// Computes the version to publish by reading the latest tag from a [TagSource]
pub struct VersionResolver<S> {
    source: S,
}

impl<S: TagSource> VersionResolver<S> {
    /// Create a resolver reading tags from `source`
    pub fn new(source: S) -> Self {
        VersionResolver { source }
    }

    /// The tag source backing this resolver
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Compute the version string for `configuration`
    ///
    /// # Returns
    /// * `Ok(String)` - e.g. "1.2.4-SNAPSHOT"
    /// * `Err(InvalidFormat)` - If the tag source returned something that is not `X.Y.Z`
    pub fn resolve(&self, configuration: &Configuration) -> Result<String> {
        let latest_tag = self.source.latest_tag(&configuration.repository);
        let latest = Version::parse(&latest_tag)?;

        let version = match configuration.mode {
            Mode::Current => latest,
            Mode::Next => latest.increment(configuration.component)?,
        };

        let formatted = version.format_with_suffix(configuration.qualifier.suffix());
        info!(
            "{} property computed to [{}] as the [{}]",
            KEY_VERSION,
            formatted,
            configuration.describe()
        );

        Ok(formatted)
    }
}

impl VersionResolver<GitTagSource> {
    /// Resolver backed by the git repository at the configured location
    pub fn git() -> Self {
        VersionResolver::new(GitTagSource::new())
    }
}
