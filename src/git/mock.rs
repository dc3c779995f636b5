use crate::git::TagSource;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock tag source for testing without actual git operations
pub struct MockTagSource {
    tag: String,
    requests: Mutex<Vec<PathBuf>>,
}

impl MockTagSource {
    /// Create a tag source that always answers `tag`
    pub fn new(tag: impl Into<String>) -> Self {
        MockTagSource {
            tag: tag.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Directories this source has been asked about, in call order
    pub fn requests(&self) -> Vec<PathBuf> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new(crate::git::DEFAULT_TAG)
    }
}

impl TagSource for MockTagSource {
    fn latest_tag(&self, repository: &Path) -> String {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(repository.to_path_buf());
        }
        self.tag.clone()
    }
}
