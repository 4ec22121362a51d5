//! Release-note synthesis: commit classification, file summaries, templating,
//! and AI draft validation.

pub mod classify;
pub mod draft;
pub mod files;
pub mod prompt;
pub mod template;

use serde::{Deserialize, Deserializer};

pub use classify::{Category, ClassifiedCommits, classify_commits};
pub use draft::{Draft, MIN_AI_NOTES_CHARS, NotesSource, draft_release_notes};
pub use files::{FileBuckets, summarize_files};
pub use prompt::build_prompt;
pub use template::{render_release_notes, render_template};

/// A commit on the pull request. Only the message matters for the notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub message: String,
}

impl Commit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// How a file changed in the pull request's diff.
///
/// Parses case-insensitively. Statuses other than added/modified/removed
/// (GitHub also reports `renamed`, `copied`, `changed`, `unchanged`) are kept
/// as `Other` and left out of the file summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Other(String),
}

impl FileStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Other(status) => status,
        }
    }
}

impl std::str::FromStr for FileStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "added" => Self::Added,
            "modified" => Self::Modified,
            "removed" => Self::Removed,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for FileStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<FileStatus>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file touched by the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub status: FileStatus,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Pull request metadata used in the notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestMeta {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub author_login: Option<String>,
}

/// Everything the synthesis steps read, borrowed from the fetched data.
#[derive(Debug, Clone, Copy)]
pub struct NotesContext<'a> {
    pub pull_request: &'a PullRequestMeta,
    pub commits: &'a [Commit],
    pub files: &'a [ChangedFile],
}

impl<'a> NotesContext<'a> {
    pub fn new(
        pull_request: &'a PullRequestMeta,
        commits: &'a [Commit],
        files: &'a [ChangedFile],
    ) -> Self {
        Self {
            pull_request,
            commits,
            files,
        }
    }

    /// Author login, if the hosting API reported a non-empty one.
    pub fn author(&self) -> Option<&'a str> {
        self.pull_request
            .author_login
            .as_deref()
            .filter(|login| !login.is_empty())
    }
}
