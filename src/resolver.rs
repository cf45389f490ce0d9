//! Next-patch computation for a version line.
//!
//! The resolver is a pure function of the request and the tag names handed to
//! it. It performs no I/O; the caller collects tags beforehand.

use std::collections::BTreeSet;

use crate::domain::{ResolvedVersion, VersionRequest, VersionTag};
use crate::error::{ReleaseError, Result};

/// Outcome of a resolution, with the bookkeeping behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The version to assign next
    pub version: ResolvedVersion,
    /// Highest existing tag on the requested line, if any
    pub previous: Option<VersionTag>,
    /// Distinct well-formed tags on the requested line
    pub line_tags: usize,
    /// Raw tag names that did not parse as versions, in input order
    pub malformed: Vec<String>,
}

impl Resolution {
    /// True when no tag existed on the requested line
    pub fn is_new_line(&self) -> bool {
        self.previous.is_none()
    }
}

/// Computes the next patch version for `request` from existing tag names.
///
/// Tags that are not `vMAJOR.MINOR.PATCH` (or `MAJOR.MINOR.PATCH`) are ignored,
/// as are tags on other version lines. With no tag on the line the patch is `0`,
/// otherwise it is one past the numerically highest patch.
///
/// # Example
/// ```
/// # use patch_release::domain::{ResolvedVersion, VersionRequest};
/// # use patch_release::resolver::resolve;
/// let tags = ["v1.2.0", "v1.2.9", "v1.2.10", "v1.3.0", "notes"];
/// let next = resolve(&VersionRequest::new(1, 2), tags).unwrap();
/// assert_eq!(next, ResolvedVersion::new(1, 2, 11));
/// ```
pub fn resolve<I, S>(request: &VersionRequest, tags: I) -> Result<ResolvedVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_with_details(request, tags).map(|resolution| resolution.version)
}

/// Like [`resolve`], but also reports what was considered and what was skipped.
pub fn resolve_with_details<I, S>(request: &VersionRequest, tags: I) -> Result<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = BTreeSet::new();
    let mut malformed = Vec::new();

    for raw in tags {
        let raw = raw.as_ref();
        match VersionTag::parse(raw) {
            Some(tag) if tag.is_on_line(request) => {
                line.insert(tag);
            }
            Some(tag) => {
                tracing::trace!(tag = raw, version = %tag, "ignoring tag on another line");
            }
            None => {
                tracing::debug!(tag = raw, "skipping malformed tag");
                malformed.push(raw.to_string());
            }
        }
    }

    let previous = line.last().copied();
    let patch = match previous {
        None => 0,
        Some(tag) => tag.patch.checked_add(1).ok_or_else(|| {
            ReleaseError::overflow(format!("patch of {} cannot be incremented", tag))
        })?,
    };

    let version = ResolvedVersion::new(request.major, request.minor, patch);
    tracing::debug!(
        line = %request,
        line_tags = line.len(),
        malformed = malformed.len(),
        %version,
        "resolved next version"
    );

    Ok(Resolution {
        version,
        previous,
        line_tags: line.len(),
        malformed,
    })
}
