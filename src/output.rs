//! Rendering of the resolved version for the next pipeline step.

use clap::ValueEnum;

use crate::cli::WorkflowResult;

/// What gets printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `1.2.3`
    #[default]
    Plain,
    /// `v1.2.3`, per the configured tag pattern
    Tag,
    /// `VERSION=1.2.3` and `TAG=v1.2.3`, for CI step outputs
    Env,
}

/// Renders a workflow result; the returned text has no trailing newline.
pub fn render(format: OutputFormat, result: &WorkflowResult) -> String {
    match format {
        OutputFormat::Plain => result.version.to_string(),
        OutputFormat::Tag => result.tag.clone(),
        OutputFormat::Env => format!("VERSION={}\nTAG={}", result.version, result.tag),
    }
}
