//! Code-hosting collaborator: pull request data in, release out.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GitHubError};
use crate::github::parse_github_remote;
use crate::notes::{ChangedFile, Commit, PullRequestMeta};

/// Repository identity on the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = ConfigError;

    /// Accepts `owner/repo` or a GitHub remote URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok((owner, name)) = parse_github_remote(s) {
            return Ok(Self::new(owner, name));
        }

        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ConfigError::InvalidRepository(s.to_string())),
        }
    }
}

/// Release to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl NewRelease {
    /// A release named `Release <tag>`.
    pub fn for_tag(tag_name: impl Into<String>, body: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        Self {
            name: format!("Release {}", tag_name),
            tag_name,
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }
}

/// A release the hosting service accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishedRelease {
    pub html_url: String,
    pub tag_name: String,
}

/// Operations the release run needs from the hosting service.
///
/// This abstraction allows mocking the hosting API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseHost: Send + Sync {
    async fn fetch_pull_request(
        &self,
        repo: &RepoId,
        number: u64,
    ) -> Result<PullRequestMeta, GitHubError>;

    /// Commits in the order the hosting service lists them.
    async fn fetch_commits(&self, repo: &RepoId, number: u64) -> Result<Vec<Commit>, GitHubError>;

    async fn fetch_changed_files(
        &self,
        repo: &RepoId,
        number: u64,
    ) -> Result<Vec<ChangedFile>, GitHubError>;

    async fn create_release(
        &self,
        repo: &RepoId,
        release: &NewRelease,
    ) -> Result<PublishedRelease, GitHubError>;
}
