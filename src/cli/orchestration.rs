//! Resolve workflow orchestration
//!
//! Sits between CLI argument parsing and the pure resolver: builds the
//! request, collects tags, resolves, and optionally records the result as a
//! local tag.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{ResolvedVersion, VersionRequest};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::resolver;

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveWorkflowArgs {
    /// Raw major component; falls back to `[version] major` in config
    pub major: Option<String>,

    /// Raw minor component; falls back to `[version] minor` in config
    pub minor: Option<String>,

    /// Explicit tag list; when `None` tags are read from the repository
    pub tags: Option<Vec<String>>,

    /// Create a lightweight tag for the resolved version at HEAD
    pub create_tag: bool,

    /// Compute everything but create nothing
    pub dry_run: bool,
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The resolved version
    pub version: ResolvedVersion,

    /// Tag name for the resolved version, per the configured pattern
    pub tag: String,

    /// Whether the tag was created in the repository
    pub created: bool,

    /// Non-fatal conditions to report to the user
    pub warnings: Vec<BoundaryWarning>,
}

/// Builds the version request, preferring explicit arguments over config.
pub fn build_request(args: &ResolveWorkflowArgs, config: &Config) -> Result<VersionRequest> {
    let major = args
        .major
        .clone()
        .or_else(|| config.version.major_text());
    let minor = args
        .minor
        .clone()
        .or_else(|| config.version.minor_text());

    VersionRequest::parse(major.as_deref(), minor.as_deref())
}

/// Main resolve workflow
///
/// 1. Build and validate the version request
/// 2. Collect tags (explicit list, or the repository's tags)
/// 3. Resolve the next patch version
/// 4. Name the tag with the configured pattern
/// 5. Optionally create the tag at HEAD
///
/// The request is validated before any tag is read, so an invalid request
/// never touches the repository.
pub fn run_resolve_workflow<R: Repository>(
    repo: Option<&R>,
    args: &ResolveWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let request = build_request(args, config)?;
    let pattern = config.tagging.tag_pattern();
    pattern.validate()?;

    let tags = match (&args.tags, repo) {
        (Some(tags), _) => tags.clone(),
        (None, Some(repo)) => repo.list_tags()?,
        (None, None) => {
            return Err(ReleaseError::config(
                "No tag source: pass a tag list or run inside a git repository",
            ))
        }
    };
    tracing::debug!(count = tags.len(), line = %request, "collected tags");

    let resolution = resolver::resolve_with_details(&request, &tags)?;
    let tag = pattern.tag_for(&resolution.version)?;

    let mut warnings = Vec::new();
    if !resolution.malformed.is_empty() {
        warnings.push(BoundaryWarning::MalformedTagsSkipped {
            tags: resolution.malformed.clone(),
        });
    }
    if resolution.is_new_line() {
        warnings.push(BoundaryWarning::NewVersionLine {
            major: request.major,
            minor: request.minor,
        });
    }

    let mut created = false;
    if args.create_tag {
        let repo = repo.ok_or_else(|| {
            ReleaseError::config("Creating a tag requires a git repository")
        })?;

        if repo.find_tag_oid(&tag)?.is_some() {
            return Err(ReleaseError::tag(format!("Tag '{}' already exists", tag)));
        }

        if args.dry_run {
            warnings.push(BoundaryWarning::TagCreationSkipped { tag: tag.clone() });
        } else {
            let head = repo.head_oid()?;
            repo.create_tag(&tag, head)?;
            tracing::info!(%tag, commit = %head, "created tag");
            created = true;
        }
    }

    Ok(WorkflowResult {
        version: resolution.version,
        tag,
        created,
        warnings,
    })
}
