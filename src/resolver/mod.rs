//! Ref resolution.
//!
//! Turns a `(repository, ref)` pair into a commit SHA plus, when the ref
//! goes through the tag namespace, the tag name to annotate it with.
//!
//! Resolution is two-phase. The repository's tag listing is consulted
//! first; tags whose names are not semantic versions are ignored. If the
//! ref (or the object a same-named tag points at) is the target of one or
//! more tags, the highest version labels it. Otherwise the ref is resolved
//! as a commit-ish. A ref neither phase can improve on is returned
//! unchanged rather than failing the file.

pub mod cache;
pub mod errors;
pub mod version;

pub use cache::ResolutionCache;
pub use errors::{Lookup, ResolutionError};
pub use version::{match_tag, parse_tag_version, VersionedTag};

use crate::core::RepoCoordinate;
use crate::sources::{ObjectKind, RefSource};

/// The outcome of resolving a ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// Commit SHA, or the input ref if nothing better was found
    pub sha: String,

    /// Tag name, when the ref resolved through a tag
    pub label: Option<String>,
}

/// Resolves refs against a [`RefSource`], memoizing every answer.
pub struct Resolver {
    source: Box<dyn RefSource>,
    cache: ResolutionCache,
}

impl Resolver {
    /// Create a resolver with an empty cache.
    pub fn new(source: Box<dyn RefSource>) -> Self {
        Resolver {
            source,
            cache: ResolutionCache::new(),
        }
    }

    /// Get the cache (for reporting).
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolve `git_ref` in `repo`.
    pub fn resolve(
        &mut self,
        repo: &RepoCoordinate,
        git_ref: &str,
    ) -> Result<ResolvedRef, ResolutionError> {
        if let Some(hit) = self.cache.get(repo, git_ref) {
            tracing::debug!(reference = %format!("{}@{}", repo, git_ref), "cache hit");
            return Ok(hit.clone());
        }

        self.load_tags(repo)?;
        let matched = self
            .cache
            .tags(repo)
            .and_then(|tags| match_tag(tags, git_ref))
            .cloned();

        let resolved = match matched {
            Some(tag) => {
                let sha = match tag.kind {
                    ObjectKind::Commit => tag.target,
                    // Annotated tags point at a tag object; peel to the commit.
                    _ => self
                        .source
                        .resolve_commit(repo, &tag.name)?
                        .unwrap_or(tag.target),
                };
                ResolvedRef {
                    sha,
                    label: Some(tag.name),
                }
            }
            None => ResolvedRef {
                sha: self
                    .source
                    .resolve_commit(repo, git_ref)?
                    .unwrap_or_else(|| git_ref.to_string()),
                label: None,
            },
        };

        tracing::debug!(
            reference = %format!("{}@{}", repo, git_ref),
            sha = %resolved.sha,
            label = resolved.label.as_deref().unwrap_or("-"),
            "resolved"
        );

        self.cache.insert(repo.clone(), git_ref, resolved.clone());
        Ok(resolved)
    }

    /// Fetch and version-parse the tag listing of `repo`, once per run.
    fn load_tags(&mut self, repo: &RepoCoordinate) -> Result<(), ResolutionError> {
        if self.cache.tags(repo).is_some() {
            return Ok(());
        }

        let listed = self.source.list_tags(repo)?;
        let mut tags = Vec::with_capacity(listed.len());
        for tag in listed {
            let name = tag.name.clone();
            match VersionedTag::parse(tag) {
                Some(versioned) => tags.push(versioned),
                None => tracing::warn!(repo = %repo, tag = %name, "ignoring invalid tag"),
            }
        }

        self.cache.insert_tags(repo.clone(), tags);
        Ok(())
    }
}
