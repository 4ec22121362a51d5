//! Pull request fetching via octocrab.

use octocrab::{Octocrab, Page};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GitHubError;
use crate::host::RepoId;
use crate::notes::{ChangedFile, Commit, FileStatus, PullRequestMeta};

/// Items requested per page (GitHub's maximum).
const PER_PAGE: u8 = 100;

/// Safety limit on pages fetched for one listing.
const MAX_PAGES: u32 = 50;

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Deserialize)]
struct ApiUser {
    login: String,
}

#[derive(Deserialize)]
struct ApiPullRequest {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<ApiUser>,
}

#[derive(Deserialize)]
struct ApiCommitDetail {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ApiCommit {
    commit: ApiCommitDetail,
}

#[derive(Deserialize)]
struct ApiFile {
    filename: String,
    status: FileStatus,
}

/// Fetch a pull request's title, body and author.
pub async fn fetch_pull_request_with_client(
    octocrab: &Octocrab,
    repo: &RepoId,
    number: u64,
) -> Result<PullRequestMeta, GitHubError> {
    let route = format!("/repos/{}/{}/pulls/{}", repo.owner, repo.name, number);

    let pr: ApiPullRequest = octocrab
        .get(&route, None::<&()>)
        .await
        .map_err(|e| classify_api_error(e, "fetch pull request", &route))?;

    Ok(PullRequestMeta {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        body: pr.body,
        author_login: pr.user.map(|u| u.login),
    })
}

/// Fetch every commit on a pull request, oldest first.
pub async fn fetch_commits_with_client(
    octocrab: &Octocrab,
    repo: &RepoId,
    number: u64,
) -> Result<Vec<Commit>, GitHubError> {
    let route = format!("/repos/{}/{}/pulls/{}/commits", repo.owner, repo.name, number);

    let commits: Vec<ApiCommit> = fetch_all_pages(octocrab, &route, "list commits").await?;

    Ok(commits
        .into_iter()
        .map(|c| Commit::new(c.commit.message))
        .collect())
}

/// Fetch every file changed by a pull request.
pub async fn fetch_changed_files_with_client(
    octocrab: &Octocrab,
    repo: &RepoId,
    number: u64,
) -> Result<Vec<ChangedFile>, GitHubError> {
    let route = format!("/repos/{}/{}/pulls/{}/files", repo.owner, repo.name, number);

    let files: Vec<ApiFile> = fetch_all_pages(octocrab, &route, "list changed files").await?;

    Ok(files
        .into_iter()
        .map(|f| ChangedFile::new(f.filename, f.status))
        .collect())
}

/// Follow pagination on a list endpoint until the last page.
async fn fetch_all_pages<T>(
    octocrab: &Octocrab,
    route: &str,
    operation: &'static str,
) -> Result<Vec<T>, GitHubError>
where
    T: serde::de::DeserializeOwned,
{
    let mut all_items = Vec::new();
    let mut page = 1u32;

    loop {
        let params = PageParams {
            per_page: PER_PAGE,
            page,
        };

        let result: Page<T> = octocrab
            .get(route, Some(&params))
            .await
            .map_err(|e| classify_api_error(e, operation, route))?;

        let has_next = result.next.is_some();
        let count = result.items.len();
        all_items.extend(result.items);

        debug!(route, page, count, "Fetched page");

        if !has_next || count == 0 {
            break;
        }

        page += 1;

        if page > MAX_PAGES {
            warn!(
                "Reached {}-page safety limit while trying to {} at {}",
                MAX_PAGES, operation, route
            );
            break;
        }
    }

    Ok(all_items)
}

/// Map an octocrab error to a `GitHubError`.
///
/// Checks both Display and Debug output to handle different octocrab error
/// formats.
pub(crate) fn classify_api_error(
    e: octocrab::Error,
    operation: &'static str,
    resource: &str,
) -> GitHubError {
    let err_display = e.to_string();
    let err_debug = format!("{:?}", e);
    let err_lower = err_display.to_lowercase();
    let debug_lower = err_debug.to_lowercase();

    // GitHub returns 403 with a rate limit message
    if err_lower.contains("rate limit") || debug_lower.contains("rate limit") {
        return GitHubError::RateLimited { operation };
    }

    if err_display.contains("Not Found") || err_debug.contains("Not Found") {
        return GitHubError::NotFound {
            resource: resource.to_string(),
        };
    }

    GitHubError::Api {
        operation,
        source: Box::new(e),
    }
}
