//! Dependency references and their classification.
//!
//! A reference is the `owner/repo[/subpath]@ref` token found after `uses:`.
//! Classification decides, without touching the network, whether a token
//! is something we can pin.

use std::fmt;

use crate::core::RepoCoordinate;

/// Length of a full commit SHA in hex characters.
pub const SHA_LEN: usize = 40;

/// Check whether `s` is a full commit SHA (exactly 40 hex characters).
pub fn is_commit_sha(s: &str) -> bool {
    s.len() == SHA_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A reference to an external action or reusable workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReference {
    /// Repository the reference resolves against
    repo: RepoCoordinate,

    /// Path inside the repository (reusable workflows, nested actions)
    subpath: Option<String>,

    /// Symbolic ref after the `@`
    git_ref: String,

    /// The token exactly as it appeared on the line
    raw: String,
}

impl DependencyReference {
    /// Get the repository coordinate.
    pub fn repo(&self) -> &RepoCoordinate {
        &self.repo
    }

    /// Get the subpath, if any.
    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    /// Get the symbolic ref (tag, branch, short SHA).
    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    /// Get the raw token text.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// Render the token pinned to `sha`: `owner/repo[/subpath]@sha`.
    pub fn pinned(&self, sha: &str) -> String {
        match &self.subpath {
            Some(subpath) => format!("{}/{}@{}", self.repo, subpath, sha),
            None => format!("{}@{}", self.repo, sha),
        }
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Why a reference is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already pinned to a full commit SHA
    Pinned,
    /// Action in the local checkout (`./`, `../`, `/`)
    LocalPath,
    /// Container image (`docker://`)
    DockerImage,
    /// Direct URL
    Url,
    /// Ref is a `${{ }}` expression only known at run time
    Expression,
    /// Coordinate lacks an owner or repository segment
    Unqualified,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Pinned => write!(f, "already pinned"),
            SkipReason::LocalPath => write!(f, "local path"),
            SkipReason::DockerImage => write!(f, "docker image"),
            SkipReason::Url => write!(f, "url"),
            SkipReason::Expression => write!(f, "expression"),
            SkipReason::Unqualified => write!(f, "not owner/repo"),
        }
    }
}

/// Outcome of classifying a reference token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Nothing that looks like `path@ref`
    NoReference,
    /// A reference that must not be resolved
    Skip(SkipReason),
    /// A reference to resolve and pin
    Resolve(DependencyReference),
}

/// Classify an extracted reference token.
///
/// The token is split on its last `@`. Skip predicates are checked before
/// the coordinate is parsed, so skipped tokens never reach the network.
pub fn classify(token: &str) -> Classification {
    let Some((path, git_ref)) = token.rsplit_once('@') else {
        return Classification::NoReference;
    };
    if path.is_empty() || git_ref.is_empty() {
        return Classification::NoReference;
    }

    if let Some(reason) = skip_reason(path, git_ref) {
        return Classification::Skip(reason);
    }

    match RepoCoordinate::split_path(path) {
        Some((repo, subpath)) => Classification::Resolve(DependencyReference {
            repo,
            subpath: subpath.map(str::to_string),
            git_ref: git_ref.to_string(),
            raw: token.to_string(),
        }),
        None => Classification::Skip(SkipReason::Unqualified),
    }
}

fn skip_reason(path: &str, git_ref: &str) -> Option<SkipReason> {
    if path.starts_with("./") || path.starts_with("../") || path.starts_with('/') {
        Some(SkipReason::LocalPath)
    } else if path.starts_with("docker://") {
        Some(SkipReason::DockerImage)
    } else if path.starts_with("http://") || path.starts_with("https://") {
        Some(SkipReason::Url)
    } else if git_ref.contains("${{") {
        Some(SkipReason::Expression)
    } else if is_commit_sha(git_ref) {
        Some(SkipReason::Pinned)
    } else {
        None
    }
}
