//! Latest-tag lookup abstraction
//!
//! The version resolver only needs one capability from source control:
//! "given a directory inside a repository, what is the latest release tag?"
//! The [TagSource] trait captures exactly that, with two implementations:
//!
//! - [repository::GitTagSource]: A real implementation using the `git2` crate
//! - [mock::MockTagSource]: A fixed answer for testing
//!
//! # Failure policy
//!
//! A tag source never fails outward. Missing repositories, empty histories
//! and untagged histories all produce [DEFAULT_TAG], so a build always gets a
//! usable version.
//!
//! ```rust
//! # use scm_version::git::{MockTagSource, TagSource};
//! # use std::path::Path;
//! let source = MockTagSource::new("1.2.3");
//! assert_eq!(source.latest_tag(Path::new(".")), "1.2.3");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::GitTagSource;

use std::path::Path;

/// Sentinel returned when no usable tag exists
pub const DEFAULT_TAG: &str = "0.0.0";

/// Provides the latest version tag of a repository
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so concurrent resolutions can share one source.
///
/// ## Contract
///
/// The returned string is a bare `major.minor.patch` triple, with any tag
/// prefix (`app-`, `v`) already stripped. On any internal failure the
/// implementation returns [DEFAULT_TAG] instead of an error.
pub trait TagSource: Send + Sync {
    /// Latest version tag reachable from the repository's HEAD
    ///
    /// # Arguments
    /// * `repository` - Any directory inside the repository work tree
    fn latest_tag(&self, repository: &Path) -> String;
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn latest_tag(&self, repository: &Path) -> String {
        (**self).latest_tag(repository)
    }
}
