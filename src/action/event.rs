//! Triggering-event payload (the file at `GITHUB_EVENT_PATH`).

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    number: u64,
}

/// The parts of a workflow event payload we read.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pull_request: Option<EventPullRequest>,
}

impl EventPayload {
    /// Read and parse an event payload file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::EventPayloadRead {
                path: path.display().to_string(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::EventPayloadParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Number of the pull request that triggered the event, if any.
    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request.as_ref().map(|pr| pr.number)
    }
}
