//! Release run: fetch pull request data, draft notes, resolve tag, publish.

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::ReleaseError;
use crate::host::{NewRelease, PublishedRelease, ReleaseHost, RepoId};
use crate::llm::TextGenerator;
use crate::notes::{NotesContext, NotesSource, build_prompt, draft_release_notes};
use crate::tag::resolve_tag;

/// What to release.
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    pub repo: RepoId,
    pub pr_number: u64,
    pub version_override: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

impl ReleaseRequest {
    pub fn new(repo: RepoId, pr_number: u64) -> Self {
        Self {
            repo,
            pr_number,
            version_override: None,
            draft: false,
            prerelease: false,
        }
    }
}

/// A release ready to publish.
#[derive(Debug, Clone)]
pub struct PreparedRelease {
    pub release: NewRelease,
    pub source: NotesSource,
    pub commit_count: usize,
    pub file_count: usize,
}

/// Fetch the pull request data and build the release notes and tag.
///
/// Fetch failures are terminal. Text generation failures are not: the notes
/// fall back to the template.
pub async fn prepare_release(
    host: &dyn ReleaseHost,
    generator: Option<&dyn TextGenerator>,
    request: &ReleaseRequest,
    now: NaiveDateTime,
) -> Result<PreparedRelease, ReleaseError> {
    let repo = &request.repo;
    let number = request.pr_number;

    let pull_request = host
        .fetch_pull_request(repo, number)
        .await
        .map_err(|source| ReleaseError::Fetch {
            step: "pull request",
            number,
            source,
        })?;

    let commits = host
        .fetch_commits(repo, number)
        .await
        .map_err(|source| ReleaseError::Fetch {
            step: "commits",
            number,
            source,
        })?;

    let files = host
        .fetch_changed_files(repo, number)
        .await
        .map_err(|source| ReleaseError::Fetch {
            step: "changed files",
            number,
            source,
        })?;

    info!(
        pull_request = number,
        commits = commits.len(),
        files = files.len(),
        "Fetched pull request data"
    );

    let ctx = NotesContext::new(&pull_request, &commits, &files);
    let prompt = build_prompt(&ctx);
    let draft = draft_release_notes(generator, &prompt, &ctx).await;
    let source = draft.source();
    let body = draft.into_document(&ctx);

    let tag_name = resolve_tag(request.version_override.as_deref(), now);
    info!(tag = %tag_name, source = %source, "Release notes ready");

    let mut release = NewRelease::for_tag(tag_name, body);
    release.draft = request.draft;
    release.prerelease = request.prerelease;

    Ok(PreparedRelease {
        release,
        source,
        commit_count: commits.len(),
        file_count: files.len(),
    })
}

/// Publish a prepared release. Attempted once.
pub async fn publish_release(
    host: &dyn ReleaseHost,
    repo: &RepoId,
    prepared: &PreparedRelease,
) -> Result<PublishedRelease, ReleaseError> {
    host.create_release(repo, &prepared.release)
        .await
        .map_err(|source| ReleaseError::Publish {
            tag: prepared.release.tag_name.clone(),
            source,
        })
}

/// Prepare and publish in one step.
pub async fn run_release(
    host: &dyn ReleaseHost,
    generator: Option<&dyn TextGenerator>,
    request: &ReleaseRequest,
    now: NaiveDateTime,
) -> Result<(PreparedRelease, PublishedRelease), ReleaseError> {
    let prepared = prepare_release(host, generator, request, now).await?;
    let published = publish_release(host, &request.repo, &prepared).await?;
    Ok((prepared, published))
}
