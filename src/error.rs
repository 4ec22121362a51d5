//! Error types for release-scribe modules using thiserror.

use thiserror::Error;

/// Errors resolving the invocation's inputs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Could not determine the pull request number. Pass --pr (or set INPUT_PR_NUMBER) or run from a pull_request event."
    )]
    MissingPullRequestNumber,

    #[error("Invalid pull request number '{0}'")]
    InvalidPullRequestNumber(String),

    #[error("No repository given. Pass --repo owner/repo or set GITHUB_REPOSITORY.")]
    MissingRepository,

    #[error("Invalid repository '{0}': expected owner/repo or a GitHub URL")]
    InvalidRepository(String),

    #[error("Invalid version {0:?}: tags cannot contain whitespace or control characters")]
    InvalidVersion(String),

    #[error("Failed to read event payload {path}: {source}")]
    EventPayloadRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload {path}: {source}")]
    EventPayloadParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "GitHub authentication failed: no valid auth found. Pass --github-token, set GITHUB_TOKEN, or run 'gh auth login'"
    )]
    AuthenticationFailed,

    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(#[source] Box<octocrab::Error>),

    #[error("Failed to {operation}: {source}")]
    Api {
        operation: &'static str,
        #[source]
        source: Box<octocrab::Error>,
    },

    #[error("Rate limited by GitHub API while trying to {operation}")]
    RateLimited { operation: &'static str },

    #[error("Not found on GitHub: {resource}")]
    NotFound { resource: String },

    #[error("Failed to parse repository URL")]
    InvalidRepositoryUrl,

    #[error("Tag {tag} already exists; choose another version or wait a minute for a new timestamp tag")]
    TagAlreadyExists { tag: String },
}

/// Errors from the text-generation service.
///
/// These never reach the caller: the draft step logs them and falls back to
/// the template.
#[derive(Error, Debug)]
pub enum TextGenError {
    #[error("Text generation request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Text generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Text generation service reported an error: {0}")]
    Service(String),

    #[error("Text generation service returned no generated text")]
    EmptyResponse,

    #[error("Text generation service returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Errors writing process outputs.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output {name} has a multi-line value")]
    MultilineValue { name: String },

    #[error("Failed to write outputs to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal errors of a release run.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Failed to fetch {step} for pull request #{number}: {source}")]
    Fetch {
        step: &'static str,
        number: u64,
        #[source]
        source: GitHubError,
    },

    #[error("Failed to publish release {tag}: {source}")]
    Publish {
        tag: String,
        #[source]
        source: GitHubError,
    },
}
