//! Repository coordinates - WHICH repository a reference points at.

use std::fmt;

/// An `owner/name` pair identifying a repository on the forge.
///
/// Both segments are case-sensitive and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoCoordinate {
    owner: String,
    name: String,
}

impl RepoCoordinate {
    /// Create a new coordinate.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoCoordinate {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Split a coordinate path (`owner/name[/subpath]`) into the coordinate
    /// and whatever follows the second segment.
    ///
    /// Returns `None` when either the owner or the name segment is missing.
    pub fn split_path(path: &str) -> Option<(RepoCoordinate, Option<&str>)> {
        let mut parts = path.splitn(3, '/');
        let owner = parts.next().filter(|s| !s.is_empty())?;
        let name = parts.next().filter(|s| !s.is_empty())?;
        let subpath = parts.next();

        Some((RepoCoordinate::new(owner, name), subpath))
    }

    /// Get the owner segment.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name segment.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
