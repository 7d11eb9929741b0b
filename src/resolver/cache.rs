//! Per-run resolution cache.

use std::collections::HashMap;

use crate::core::RepoCoordinate;
use crate::resolver::version::VersionedTag;
use crate::resolver::ResolvedRef;

/// Memoized lookups for the lifetime of one run.
///
/// Keys are `(repository, ref)` pairs; subpaths never take part, so
/// `owner/repo@v1` and `owner/repo/sub/action@v1` share one entry. The
/// parsed tag listing of each repository is kept as well.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    /// Resolved refs by (repository, ref)
    refs: HashMap<(RepoCoordinate, String), ResolvedRef>,

    /// Version-parsed tag listings by repository
    tags: HashMap<RepoCoordinate, Vec<VersionedTag>>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resolved ref.
    pub fn get(&self, repo: &RepoCoordinate, git_ref: &str) -> Option<&ResolvedRef> {
        self.refs.get(&(repo.clone(), git_ref.to_string()))
    }

    /// Store a resolved ref.
    pub fn insert(&mut self, repo: RepoCoordinate, git_ref: impl Into<String>, resolved: ResolvedRef) {
        self.refs.insert((repo, git_ref.into()), resolved);
    }

    /// Look up a repository's tag listing.
    pub fn tags(&self, repo: &RepoCoordinate) -> Option<&[VersionedTag]> {
        self.tags.get(repo).map(Vec::as_slice)
    }

    /// Store a repository's tag listing.
    pub fn insert_tags(&mut self, repo: RepoCoordinate, tags: Vec<VersionedTag>) {
        self.tags.insert(repo, tags);
    }

    /// Number of resolved refs.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Check if no ref has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
