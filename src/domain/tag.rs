use crate::domain::{ResolvedVersion, VersionTag};
use crate::error::{ReleaseError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}")
    }
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &ResolvedVersion) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Check that the pattern has exactly one `{version}` placeholder
    pub fn validate(&self) -> Result<()> {
        match self.pattern.matches(PLACEHOLDER).count() {
            1 => Ok(()),
            0 => Err(ReleaseError::config(format!(
                "Tag pattern '{}' must contain a {{version}} placeholder",
                self.pattern
            ))),
            _ => Err(ReleaseError::config(format!(
                "Tag pattern '{}' must contain exactly one {{version}} placeholder",
                self.pattern
            ))),
        }
    }

    /// Format the tag name for a version, refusing names that later runs could not read back.
    ///
    /// A tag created from this name must parse as the same version, otherwise the
    /// next resolution on the line would not see it and would hand out the same
    /// patch again.
    pub fn tag_for(&self, version: &ResolvedVersion) -> Result<String> {
        self.validate()?;

        let name = self.format(version);
        match VersionTag::parse(&name) {
            Some(tag)
                if tag.major == version.major
                    && tag.minor == version.minor
                    && tag.patch == version.patch =>
            {
                Ok(name)
            }
            _ => Err(ReleaseError::config(format!(
                "Tag pattern '{}' produces '{}', which is not a vMAJOR.MINOR.PATCH tag",
                self.pattern, name
            ))),
        }
    }
}
