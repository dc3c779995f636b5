//! Host boundary: turns a property map into a property map with `scm.version` set
//!
//! This is the only place where failures are swallowed. Whatever goes wrong
//! while computing the version, the host build receives its input properties
//! back unchanged.

use crate::configuration::{ConfigurationBuilder, KEY_VERSION};
use crate::error::Result;
use crate::git::{GitTagSource, TagSource};
use crate::resolver::VersionResolver;
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info};

/// Contributes the `scm.version` property to a set of user properties
pub struct VersionPropertyContributor<S> {
    resolver: VersionResolver<S>,
}

impl<S: TagSource> VersionPropertyContributor<S> {
    pub fn new(resolver: VersionResolver<S>) -> Self {
        VersionPropertyContributor { resolver }
    }

    /// Returns `properties` with `scm.version` added.
    ///
    /// If `scm.version` is already present, nothing is computed and the input
    /// is returned as-is; all other `scm.*` keys are ignored. If resolution
    /// fails, the error is logged and the input is returned unchanged.
    ///
    /// # Arguments
    /// * `top_directory` - Directory inside the repository to read tags from
    /// * `properties` - User properties carrying the `scm.*` option keys
    pub fn contribute(
        &self,
        top_directory: &Path,
        properties: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        info!("scm-version loaded");

        if let Some(version) = properties.get(KEY_VERSION) {
            info!(
                "Found user defined property [{}], value set to [{}]. Other scm.* properties will be ignored",
                KEY_VERSION, version
            );
            return properties.clone();
        }

        match self.compute(top_directory, properties) {
            Ok(version) => {
                let mut result = properties.clone();
                result.insert(KEY_VERSION.to_string(), version);
                result
            }
            Err(e) => {
                error!("Error computing {} property, {}", KEY_VERSION, e);
                properties.clone()
            }
        }
    }

    fn compute(&self, top_directory: &Path, properties: &HashMap<String, String>) -> Result<String> {
        let configuration = ConfigurationBuilder::build(top_directory, properties)?;
        self.resolver.resolve(&configuration)
    }
}

impl VersionPropertyContributor<GitTagSource> {
    /// Contributor backed by git tags
    pub fn git() -> Self {
        VersionPropertyContributor::new(VersionResolver::git())
    }
}
