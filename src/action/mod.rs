//! Inputs and outputs at the workflow boundary.

pub mod event;
pub mod outputs;

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::host::RepoId;

pub use event::EventPayload;
pub use outputs::write_outputs;

/// Treat unset and blank inputs alike.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve the repository from `owner/repo` or a GitHub URL.
pub fn resolve_repo(input: Option<&str>) -> Result<RepoId, ConfigError> {
    non_empty(input)
        .ok_or(ConfigError::MissingRepository)?
        .parse()
}

/// Resolve the version override used for the tag.
///
/// Blank means no override. The value ends up in a git tag and in step
/// outputs, so whitespace and control characters inside it are rejected.
pub fn resolve_version(input: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(version) = non_empty(input) else {
        return Ok(None);
    };

    if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::InvalidVersion(version.to_string()));
    }

    Ok(Some(version.to_string()))
}

/// Resolve the pull request number.
///
/// An explicit number wins; otherwise the triggering event's pull request is
/// used. Without either the run cannot proceed.
pub fn resolve_pr_number(
    explicit: Option<&str>,
    event_path: Option<&Path>,
) -> Result<u64, ConfigError> {
    if let Some(input) = non_empty(explicit) {
        let number = parse_pr_number(input)?;
        info!(pull_request = number, "Using pull request number from input");
        return Ok(number);
    }

    if let Some(path) = event_path {
        if let Some(number) = EventPayload::read(path)?.pull_request_number() {
            info!(pull_request = number, "Using pull request number from event");
            return Ok(number);
        }
    }

    Err(ConfigError::MissingPullRequestNumber)
}

/// Parse `12` or `#12`.
fn parse_pr_number(input: &str) -> Result<u64, ConfigError> {
    input
        .strip_prefix('#')
        .unwrap_or(input)
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidPullRequestNumber(input.to_string()))
}
