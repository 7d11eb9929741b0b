//! RefSource trait - the lookups the resolver needs from a forge.

use crate::core::RepoCoordinate;
use crate::resolver::ResolutionError;

/// What a tag points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Lightweight tag pointing straight at a commit
    Commit,
    /// Annotated tag object that still has to be peeled to a commit
    Tag,
    /// Anything else (trees, blobs)
    Other,
}

impl ObjectKind {
    /// Parse the `type` field of a git object.
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "commit" => ObjectKind::Commit,
            "tag" => ObjectKind::Tag,
            _ => ObjectKind::Other,
        }
    }
}

/// A tag as listed by the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Tag name without the `refs/tags/` prefix
    pub name: String,
    /// Object the tag ref points at
    pub target: String,
    /// Kind of that object
    pub kind: ObjectKind,
}

/// A source of tag and commit information.
pub trait RefSource {
    /// Get the source name for display.
    fn name(&self) -> &str;

    /// List all tags of a repository. A repository without tags (or an
    /// unknown repository) yields an empty list.
    fn list_tags(&self, repo: &RepoCoordinate) -> Result<Vec<TagRef>, ResolutionError>;

    /// Resolve a commit-ish (branch, tag, SHA prefix) to a full commit SHA.
    /// Returns `None` when the forge does not know the ref.
    fn resolve_commit(
        &self,
        repo: &RepoCoordinate,
        commitish: &str,
    ) -> Result<Option<String>, ResolutionError>;
}
