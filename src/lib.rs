//! release-scribe - Generates release notes for a pull request and publishes a tagged release.
//!
//! # Overview
//!
//! release-scribe fetches a pull request's metadata, commits and changed files
//! from GitHub, sorts commits by their `feat:`/`fix:`/`chore:` style prefixes,
//! optionally asks a Hugging Face text-generation model for a draft, falls back
//! to a deterministic Markdown template, and creates a GitHub release tagged
//! with an explicit version or a timestamp.

pub mod action;
pub mod error;
pub mod github;
pub mod host;
pub mod llm;
pub mod notes;
pub mod pipeline;
pub mod tag;

// Re-export commonly used types
pub use error::{ConfigError, GitHubError, OutputError, ReleaseError, TextGenError};
pub use host::{NewRelease, PublishedRelease, ReleaseHost, RepoId};
pub use llm::{GenerationParams, TextGenerator};
pub use notes::{ChangedFile, Commit, Draft, FileStatus, NotesSource, PullRequestMeta};
pub use pipeline::{PreparedRelease, ReleaseRequest};
pub use tag::resolve_tag;
