//! Domain logic - pure value types independent of git operations

pub mod qualifier;
pub mod tag;
pub mod version;

pub use qualifier::Qualifier;
pub use tag::Tag;
pub use version::{Component, Version};
