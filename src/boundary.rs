use std::fmt;

/// How many skipped tag names are quoted in a warning before summarising.
const MAX_LISTED_TAGS: usize = 3;

/// Non-fatal conditions met while resolving a version.
/// These are reported to the user but never change the computed version.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Some tags could not be read as `vMAJOR.MINOR.PATCH` and were ignored
    MalformedTagsSkipped { tags: Vec<String> },
    /// No tag exists yet on the requested line, so it starts at patch 0
    NewVersionLine { major: u64, minor: u64 },
    /// A dry run computed a tag but did not create it
    TagCreationSkipped { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MalformedTagsSkipped { tags } => {
                let listed: Vec<&str> = tags
                    .iter()
                    .take(MAX_LISTED_TAGS)
                    .map(String::as_str)
                    .collect();
                write!(
                    f,
                    "Skipped {} tag(s) that are not version tags: {}",
                    tags.len(),
                    listed.join(", ")
                )?;
                if tags.len() > MAX_LISTED_TAGS {
                    write!(f, " and {} more", tags.len() - MAX_LISTED_TAGS)?;
                }
                Ok(())
            }
            BoundaryWarning::NewVersionLine { major, minor } => {
                write!(
                    f,
                    "No tags found for version line {}.{}, starting at {}.{}.0",
                    major, minor, major, minor
                )
            }
            BoundaryWarning::TagCreationSkipped { tag } => {
                write!(f, "Dry run: tag '{}' was not created", tag)
            }
        }
    }
}
