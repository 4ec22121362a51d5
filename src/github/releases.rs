//! Release creation via octocrab.

use octocrab::Octocrab;
use tracing::info;

use super::prs::classify_api_error;
use crate::error::GitHubError;
use crate::host::{NewRelease, PublishedRelease, RepoId};

/// Create a release, which also creates its tag on the default branch head.
pub async fn create_release_with_client(
    octocrab: &Octocrab,
    repo: &RepoId,
    release: &NewRelease,
) -> Result<PublishedRelease, GitHubError> {
    let route = format!("/repos/{}/{}/releases", repo.owner, repo.name);

    info!(tag = %release.tag_name, repository = %repo, "Creating release");

    let result: Result<PublishedRelease, octocrab::Error> =
        octocrab.post(&route, Some(release)).await;

    result.map_err(|e| {
        // A duplicate tag comes back as 422 with an `already_exists` validation error
        if format!("{:?}", e).contains("already_exists") {
            return GitHubError::TagAlreadyExists {
                tag: release.tag_name.clone(),
            };
        }
        classify_api_error(e, "create release", &route)
    })
}
