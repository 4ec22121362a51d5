//! GitHub API operations using octocrab.

pub mod auth;
pub mod prs;
pub mod releases;
pub mod repo;

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::error::GitHubError;
use crate::host::{NewRelease, PublishedRelease, ReleaseHost, RepoId};
use crate::notes::{ChangedFile, Commit, PullRequestMeta};

pub use auth::resolve_github_token;
pub use prs::{
    fetch_changed_files_with_client, fetch_commits_with_client, fetch_pull_request_with_client,
};
pub use releases::create_release_with_client;
pub use repo::parse_github_remote;

/// `ReleaseHost` backed by the GitHub REST API.
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Build a client authenticated with `token`.
    ///
    /// `api_url` overrides the API base, e.g. for GitHub Enterprise Server.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, GitHubError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(url) = api_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| GitHubError::ClientBuild(Box::new(e)))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientBuild(Box::new(e)))?;

        Ok(Self { octocrab })
    }

    /// Wrap a pre-configured octocrab client.
    ///
    /// This allows dependency injection for testing with mock servers.
    pub fn with_client(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl ReleaseHost for GitHubHost {
    async fn fetch_pull_request(
        &self,
        repo: &RepoId,
        number: u64,
    ) -> Result<PullRequestMeta, GitHubError> {
        fetch_pull_request_with_client(&self.octocrab, repo, number).await
    }

    async fn fetch_commits(&self, repo: &RepoId, number: u64) -> Result<Vec<Commit>, GitHubError> {
        fetch_commits_with_client(&self.octocrab, repo, number).await
    }

    async fn fetch_changed_files(
        &self,
        repo: &RepoId,
        number: u64,
    ) -> Result<Vec<ChangedFile>, GitHubError> {
        fetch_changed_files_with_client(&self.octocrab, repo, number).await
    }

    async fn create_release(
        &self,
        repo: &RepoId,
        release: &NewRelease,
    ) -> Result<PublishedRelease, GitHubError> {
        create_release_with_client(&self.octocrab, repo, release).await
    }
}
