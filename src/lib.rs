//! Pinata - pins CI workflow dependencies to commit SHAs
//!
//! This crate provides the core library functionality for Pinata,
//! including reference parsing, remote ref resolution, and in-place
//! workflow rewriting.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod sources;
pub mod util;

/// Test utilities and mocks for Pinata unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock HTTP transport and workflow fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    coordinate::RepoCoordinate,
    reference::{Classification, DependencyReference, SkipReason},
};

pub use resolver::{ResolutionError, ResolvedRef, Resolver};
pub use util::context::GlobalContext;
