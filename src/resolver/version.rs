//! Semver handling for tag names.

use std::cmp::Ordering;

use semver::Version;

use crate::sources::{ObjectKind, TagRef};

/// A tag whose name parsed as a semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedTag {
    pub name: String,
    pub target: String,
    pub kind: ObjectKind,
    pub version: Version,
}

impl VersionedTag {
    /// Parse a listed tag, returning `None` if its name is not a version.
    pub fn parse(tag: TagRef) -> Option<Self> {
        let version = parse_tag_version(&tag.name)?;
        Some(VersionedTag {
            name: tag.name,
            target: tag.target,
            kind: tag.kind,
            version,
        })
    }

    /// Semver precedence, then name, so equal versions still order deterministically.
    fn precedence(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Parse a tag name as a version, allowing a `v` prefix and missing components.
///
/// `v4` is 4.0.0 and `v1.2-rc.1` is 1.2.0-rc.1. Names with more than three
/// numeric components, or anything non-numeric in the core, are rejected.
pub fn parse_tag_version(name: &str) -> Option<Version> {
    let s = name.strip_prefix(['v', 'V']).unwrap_or(name);

    // Try exact parse first
    if let Ok(v) = Version::parse(s) {
        return Some(v);
    }

    // Pad missing minor/patch before any pre-release or build suffix
    let split = s.find(['-', '+']).unwrap_or(s.len());
    let (core, suffix) = s.split_at(split);
    let padded = match core.split('.').count() {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => return None,
    };

    Version::parse(&padded).ok()
}

/// Find the tag to label `git_ref` with.
///
/// If `git_ref` names one of the tags, the working target becomes that tag's
/// object; otherwise `git_ref` itself is the target. Among the tags pointing
/// at the target, the highest version wins.
pub fn match_tag<'a>(tags: &'a [VersionedTag], git_ref: &str) -> Option<&'a VersionedTag> {
    let target = tags
        .iter()
        .find(|t| t.name == git_ref)
        .map_or(git_ref, |t| t.target.as_str());

    tags.iter()
        .filter(|t| t.target == target)
        .max_by(|a, b| a.precedence(b))
}
