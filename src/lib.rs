pub mod boundary;
pub mod config;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod resolver;
pub mod ui;

pub use boundary::VersionPropertyContributor;
pub use configuration::{Configuration, ConfigurationBuilder, Mode};
pub use error::{Result, ScmVersionError};
pub use resolver::VersionResolver;
