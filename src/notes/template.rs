//! Deterministic Markdown release notes.

use std::fmt::Write;

use super::classify::{ClassifiedCommits, classify_commits};
use super::files::{FileBuckets, summarize_files};
use super::{NotesContext, PullRequestMeta};

pub const HEADING: &str = "# Release Notes";
pub const FEATURES_HEADING: &str = "## 🚀 New Features";
pub const FIXES_HEADING: &str = "## 🐛 Fixes";
pub const OTHERS_HEADING: &str = "## 📝 Other Changes";
pub const CHORES_HEADING: &str = "## 🔧 Maintenance";
pub const FILES_HEADING: &str = "## 📁 Affected Files";
pub const ADDED_HEADING: &str = "### ✅ Added Files";
pub const MODIFIED_HEADING: &str = "### ✏️ Modified Files";
pub const REMOVED_HEADING: &str = "### ❌ Removed Files";

/// Classify and render the notes for a fetched pull request.
pub fn render_release_notes(ctx: &NotesContext<'_>) -> String {
    let classified = classify_commits(ctx.commits.iter().map(|c| c.message.as_str()));
    let buckets = summarize_files(ctx.files);

    render_template(
        ctx.pull_request,
        &classified,
        &buckets,
        ctx.commits.len(),
        ctx.files.len(),
    )
}

/// Render release notes from already classified data.
///
/// Section order is fixed and every section without entries is left out, so
/// the same input always renders to the same string.
pub fn render_template(
    pr: &PullRequestMeta,
    commits: &ClassifiedCommits,
    files: &FileBuckets,
    commit_count: usize,
    file_count: usize,
) -> String {
    let mut notes = format!("{HEADING}\n\n");

    if !pr.title.is_empty() {
        let _ = write!(notes, "## {}\n\n", pr.title);
    }

    if let Some(body) = pr.body.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = write!(notes, "{}\n\n", body);
    }

    push_bullets(&mut notes, FEATURES_HEADING, &commits.features);
    push_bullets(&mut notes, FIXES_HEADING, &commits.fixes);
    push_bullets(&mut notes, OTHERS_HEADING, &commits.others);
    push_bullets(&mut notes, CHORES_HEADING, &commits.chores);

    if !files.is_empty() {
        let _ = write!(notes, "{FILES_HEADING}\n\n");
        push_paths(&mut notes, ADDED_HEADING, &files.added);
        push_paths(&mut notes, MODIFIED_HEADING, &files.modified);
        push_paths(&mut notes, REMOVED_HEADING, &files.removed);
    }

    notes.push_str("---\n\n");
    let _ = writeln!(notes, "**Total commits:** {commit_count}");
    let _ = writeln!(notes, "**Files changed:** {file_count}");

    if let Some(login) = pr.author_login.as_deref().filter(|l| !l.is_empty()) {
        let _ = writeln!(notes, "**Author:** @{login}");
    }

    notes
}

fn push_bullets(notes: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    let _ = write!(notes, "{heading}\n\n");
    for item in items {
        let _ = writeln!(notes, "- {item}");
    }
    notes.push('\n');
}

fn push_paths(notes: &mut String, heading: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }

    let _ = writeln!(notes, "{heading}");
    for path in paths {
        let _ = writeln!(notes, "- `{path}`");
    }
    notes.push('\n');
}
