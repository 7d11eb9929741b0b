//! Core data model.
//!
//! Repository coordinates, dependency references, and the text-level
//! extraction and classification that run before any network access.

pub mod coordinate;
pub mod extract;
pub mod reference;

pub use coordinate::RepoCoordinate;
pub use extract::{extract_reference, find_comment, USES_KEY};
pub use reference::{
    classify, is_commit_sha, Classification, DependencyReference, SkipReason, SHA_LEN,
};
