//! release-scribe - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_scribe::action::{
    non_empty, resolve_pr_number, resolve_repo, resolve_version, write_outputs,
};
use release_scribe::github::{GitHubHost, resolve_github_token};
use release_scribe::llm::{DEFAULT_MODEL_URL, HuggingFaceClient, TextGenerator};
use release_scribe::pipeline::{ReleaseRequest, prepare_release, publish_release};

/// Generate release notes for a pull request and publish a tagged GitHub release.
#[derive(Parser, Debug)]
#[command(name = "release-scribe")]
#[command(about = "Generate release notes for a pull request and publish a tagged GitHub release")]
#[command(version)]
struct Cli {
    /// Repository as owner/repo or a GitHub URL
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// Pull request number (defaults to the triggering pull_request event)
    #[arg(long, env = "INPUT_PR_NUMBER")]
    pr: Option<String>,

    /// Path to the triggering event's JSON payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<String>,

    /// Explicit version for the tag (defaults to a timestamp tag)
    #[arg(long = "set-version", env = "INPUT_VERSION")]
    version: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN, GH_TOKEN, then gh CLI auth)
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Hugging Face token; without it notes come from the template only
    #[arg(long, env = "INPUT_HUGGINGFACE_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,

    /// Text-generation model endpoint
    #[arg(long, env = "INPUT_MODEL_URL", default_value = DEFAULT_MODEL_URL)]
    model_url: String,

    /// GitHub API base URL (for GitHub Enterprise Server)
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Create the release as a draft
    #[arg(long, env = "INPUT_DRAFT")]
    draft: bool,

    /// Mark the release as a prerelease
    #[arg(long, env = "INPUT_PRERELEASE")]
    prerelease: bool,

    /// Dry run - print the release notes and tag without publishing
    #[arg(long)]
    dry_run: bool,

    /// File that step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Step 1: Resolve inputs
    let repo = resolve_repo(cli.repo.as_deref())?;
    let pr_number = resolve_pr_number(
        cli.pr.as_deref(),
        non_empty(cli.event_path.as_deref()).map(Path::new),
    )?;
    let version_override = resolve_version(cli.version.as_deref())?;

    // Step 2: Build collaborators
    let token = resolve_github_token(cli.github_token.as_deref())
        .context("GitHub authentication required")?;
    let host = GitHubHost::new(&token, non_empty(cli.api_url.as_deref()))?;

    let generator = non_empty(cli.hf_token.as_deref())
        .map(|token| HuggingFaceClient::new(token, cli.model_url.as_str()));

    let request = ReleaseRequest {
        repo,
        pr_number,
        version_override,
        draft: cli.draft,
        prerelease: cli.prerelease,
    };

    println!(
        "Generating release notes for {}#{}...",
        request.repo, request.pr_number
    );

    // Step 3: Fetch data, draft notes, resolve tag
    let now = Local::now().naive_local();
    let prepared = prepare_release(
        &host,
        generator.as_ref().map(|g| g as &dyn TextGenerator),
        &request,
        now,
    )
    .await?;

    let output_file = non_empty(cli.output_file.as_deref()).map(Path::new);
    let tag_name = prepared.release.tag_name.as_str();

    // Step 4: Publish or preview
    if cli.dry_run {
        println!("\n--- Dry Run Output ---\n");
        println!("Tag: {}", tag_name);
        println!("Notes source: {}\n", prepared.source);
        println!("{}", prepared.release.body);

        if let Some(path) = output_file {
            write_outputs(path, &[("tag_name", tag_name)])?;
        }
        return Ok(());
    }

    let published = publish_release(&host, &request.repo, &prepared).await?;

    println!(
        "✓ Release {} created ({} commits, {} files, notes from {}): {}",
        tag_name,
        prepared.commit_count,
        prepared.file_count,
        prepared.source,
        published.html_url
    );

    if let Some(path) = output_file {
        write_outputs(
            path,
            &[("release_url", published.html_url.as_str()), ("tag_name", tag_name)],
        )?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report a terminal failure, as a workflow error annotation under GitHub Actions.
fn report_failure(error: &anyhow::Error) {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{:#}", error);
    }
    eprintln!("Error: {:?}", error);
}
