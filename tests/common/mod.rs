//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::{Value, json};
use wiremock::MockServer;

use release_scribe::error::GitHubError;
use release_scribe::host::{NewRelease, PublishedRelease, ReleaseHost, RepoId};
use release_scribe::notes::{ChangedFile, Commit, FileStatus, PullRequestMeta};

/// Create an octocrab client pointing to a mock server.
pub async fn mock_client(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .base_uri(server.uri())
        .expect("Failed to set base URI")
        .build()
        .expect("Failed to build octocrab")
}

/// Pull request JSON with the fields GitHub returns that we read.
pub fn mock_pr(number: u64, title: &str, body: Option<&str>, login: &str) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/owner/repo/pulls/{}", number),
        "id": number * 1000,
        "number": number,
        "state": "open",
        "title": title,
        "body": body,
        "user": { "login": login, "id": 100, "type": "User" },
        "head": { "ref": "feature", "sha": "abc123def456789" },
        "base": { "ref": "main", "sha": "def456abc789" },
        "merged": false
    })
}

/// Commit JSON as returned by the pull request commits endpoint.
pub fn mock_commit(sha: &str, message: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": message,
            "author": { "name": "Test User", "email": "test@example.com", "date": "2024-01-01T00:00:00Z" }
        },
        "author": { "login": "testuser", "id": 100 }
    })
}

/// File JSON as returned by the pull request files endpoint.
pub fn mock_file(filename: &str, status: &str) -> Value {
    json!({
        "sha": "bbcd538c8e72b8c175046e27cc8f907076331401",
        "filename": filename,
        "status": status,
        "additions": 10,
        "deletions": 2,
        "changes": 12
    })
}

/// Release JSON as returned by the create release endpoint.
pub fn mock_release(tag: &str) -> Value {
    json!({
        "id": 1,
        "url": "https://api.github.com/repos/owner/repo/releases/1",
        "html_url": format!("https://github.com/owner/repo/releases/tag/{}", tag),
        "tag_name": tag,
        "name": format!("Release {}", tag),
        "draft": false,
        "prerelease": false
    })
}

/// GitHub error body.
pub fn github_error(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}

/// A long enough model answer to be accepted.
pub const GOOD_AI_TEXT: &str = "This release adds an LRU cache to speed up lookups and fixes an off-by-one error during eviction.";

/// In-memory `ReleaseHost` that records the releases it is asked to create.
pub struct FakeHost {
    pub pull_request: PullRequestMeta,
    pub commits: Vec<Commit>,
    pub files: Vec<ChangedFile>,
    pub fail_commits: bool,
    pub fail_release: bool,
    pub created: Mutex<Vec<NewRelease>>,
    pub calls: AtomicU32,
}

impl FakeHost {
    pub fn new(pull_request: PullRequestMeta, commits: Vec<Commit>, files: Vec<ChangedFile>) -> Self {
        Self {
            pull_request,
            commits,
            files,
            fail_commits: false,
            fail_release: false,
            created: Mutex::new(Vec::new()),
            calls: AtomicU32::new(0),
        }
    }

    /// The caching-layer pull request used across scenarios.
    pub fn caching_layer() -> Self {
        Self::new(
            PullRequestMeta {
                number: 42,
                title: "Add caching layer".to_string(),
                body: Some("Improves performance.".to_string()),
                author_login: Some("octocat".to_string()),
            },
            vec![
                Commit::new("feat: add LRU cache"),
                Commit::new("fix: off-by-one in evict"),
                Commit::new("chore: update README"),
            ],
            vec![
                ChangedFile::new("a.js", FileStatus::Added),
                ChangedFile::new("b.js", FileStatus::Modified),
            ],
        )
    }

    pub fn created(&self) -> Vec<NewRelease> {
        self.created.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseHost for FakeHost {
    async fn fetch_pull_request(
        &self,
        _repo: &RepoId,
        _number: u64,
    ) -> Result<PullRequestMeta, GitHubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pull_request.clone())
    }

    async fn fetch_commits(&self, _repo: &RepoId, number: u64) -> Result<Vec<Commit>, GitHubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_commits {
            return Err(GitHubError::NotFound {
                resource: format!("/repos/owner/repo/pulls/{}/commits", number),
            });
        }
        Ok(self.commits.clone())
    }

    async fn fetch_changed_files(
        &self,
        _repo: &RepoId,
        _number: u64,
    ) -> Result<Vec<ChangedFile>, GitHubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.files.clone())
    }

    async fn create_release(
        &self,
        _repo: &RepoId,
        release: &NewRelease,
    ) -> Result<PublishedRelease, GitHubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_release {
            return Err(GitHubError::TagAlreadyExists {
                tag: release.tag_name.clone(),
            });
        }
        self.created.lock().unwrap().push(release.clone());
        Ok(PublishedRelease {
            html_url: format!("https://github.com/owner/repo/releases/tag/{}", release.tag_name),
            tag_name: release.tag_name.clone(),
        })
    }
}
