use crate::domain::{Tag, Version};
use crate::error::Result;
use crate::git::{TagSource, DEFAULT_TAG};
use git2::{Oid, Repository};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads the latest version tag from a git repository via `git2`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitTagSource;

/// A version-shaped tag and when it was created
#[derive(Debug, Clone)]
struct TagCandidate {
    tag: Tag,
    version: Version,
    created: i64,
}

impl GitTagSource {
    pub fn new() -> Self {
        GitTagSource
    }

    /// Finds the latest version tag reachable from HEAD.
    ///
    /// Follows `git describe --tags --abbrev=0`: among version-shaped tags
    /// reachable from HEAD, the one whose commit is nearest wins, where
    /// distance is the number of commits reachable from HEAD but not from the
    /// tagged commit. Both lightweight and annotated tags count. Equal
    /// distances go to the tag created last (tagger time, or commit time for
    /// lightweight tags), then to the higher version, then to the greater name.
    ///
    /// # Arguments
    /// * `repository` - Any directory inside the work tree; parents are searched
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The latest eligible tag
    /// * `Ok(None)` - If no eligible tag is reachable
    /// * `Err` - If the repository cannot be opened or has no HEAD commit
    pub fn find_latest_tag(&self, repository: &Path) -> Result<Option<Tag>> {
        let repo = Repository::discover(repository)?;
        let head = repo.head()?.peel_to_commit()?.id();

        let candidates = collect_candidates(&repo)?;

        let mut reachable = Vec::new();
        for (oid, tags) in &candidates {
            if *oid != head && !repo.graph_descendant_of(head, *oid)? {
                continue;
            }

            let depth = describe_depth(&repo, head, *oid)?;
            reachable.extend(tags.iter().map(|candidate| (depth, candidate)));
        }

        // Name last keeps the choice stable across HashMap iteration orders.
        let nearest = reachable.into_iter().max_by_key(|&(depth, candidate)| {
            (
                Reverse(depth),
                candidate.created,
                candidate.version,
                candidate.tag.name.as_str(),
            )
        });

        Ok(nearest.map(|(_, candidate)| candidate.tag.clone()))
    }
}

/// Commits reachable from `head` but not from `tagged`.
fn describe_depth(repo: &Repository, head: Oid, tagged: Oid) -> Result<usize> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push(head)?;
    revwalk.hide(tagged)?;

    let mut depth = 0;
    for oid in revwalk {
        oid?;
        depth += 1;
    }
    Ok(depth)
}

/// Groups every version-shaped tag by the commit it points at.
fn collect_candidates(repo: &Repository) -> Result<HashMap<Oid, Vec<TagCandidate>>> {
    let mut candidates: HashMap<Oid, Vec<TagCandidate>> = HashMap::new();
    let names = repo.tag_names(None)?;

    for name in names.iter().flatten() {
        let tag = Tag::new(name);
        let version = match tag.version() {
            Some(version) => version,
            None => {
                debug!(tag = name, "skipping tag without a version");
                continue;
            }
        };

        let reference = match repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(reference) => reference,
            Err(e) => {
                debug!(tag = name, error = %e, "skipping unreadable tag");
                continue;
            }
        };

        // Tags on trees or blobs have no place in history.
        let commit = match reference.peel_to_commit() {
            Ok(commit) => commit,
            Err(_) => continue,
        };

        let created = match reference.peel_to_tag() {
            Ok(annotated) => annotated
                .tagger()
                .map(|tagger| tagger.when().seconds())
                .unwrap_or_else(|| commit.time().seconds()),
            Err(_) => commit.time().seconds(),
        };

        candidates.entry(commit.id()).or_default().push(TagCandidate {
            tag,
            version,
            created,
        });
    }

    Ok(candidates)
}

impl TagSource for GitTagSource {
    fn latest_tag(&self, repository: &Path) -> String {
        let found = self
            .find_latest_tag(repository)
            .map(|tag| tag.and_then(|tag| tag.version_part().map(str::to_string)));

        match found {
            Ok(Some(version)) => {
                debug!(%version, "latest version tag");
                return version;
            }
            Ok(None) => {
                warn!(
                    "No version tag reachable from HEAD at {}",
                    repository.display()
                );
            }
            Err(e) => {
                warn!("Error loading tag at {}: {}", repository.display(), e);
            }
        }

        info!("Using default tag [{}]", DEFAULT_TAG);
        DEFAULT_TAG.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_repository_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let source = GitTagSource::new();
        assert_eq!(source.latest_tag(dir.path()), DEFAULT_TAG);
    }

    #[test]
    fn test_find_latest_tag_not_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GitTagSource::new().find_latest_tag(dir.path()).is_err());
    }
}
