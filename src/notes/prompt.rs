//! Prompt construction for the text-generation service.

use super::NotesContext;

/// Build the drafting prompt for a pull request.
///
/// Sanitizes the PR body and commit messages to prevent prompt injection.
pub fn build_prompt(ctx: &NotesContext<'_>) -> String {
    let pr = ctx.pull_request;

    let description = pr
        .body
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .map(sanitize_for_prompt)
        .unwrap_or_else(|| "No description".to_string());

    let commit_lines = ctx
        .commits
        .iter()
        .map(|c| format!("- {}", sanitize_for_prompt(&c.message)))
        .collect::<Vec<_>>()
        .join("\n");

    let file_lines = ctx
        .files
        .iter()
        .map(|f| format!("- {} ({})", f.path, f.status))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Write professional release notes for this pull request:

Title: {title}
Description: {description}

Commits:
{commit_lines}

Changed files:
{file_lines}

Include: a summary of the changes, new features, fixes and improvements."#,
        title = sanitize_for_prompt(&pr.title),
    )
}

/// Sanitize text to prevent prompt injection.
pub fn sanitize_for_prompt(text: &str) -> String {
    text.replace("```", "'''")
        .replace("##", "//")
        .lines()
        .take(50)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{ChangedFile, Commit, FileStatus, PullRequestMeta};

    #[test]
    fn test_build_prompt_structure() {
        let pr = PullRequestMeta {
            number: 3,
            title: "Add caching layer".to_string(),
            body: Some("Improves performance.".to_string()),
            author_login: None,
        };
        let commits = vec![Commit::new("feat: add LRU cache")];
        let files = vec![ChangedFile::new("src/cache.rs", FileStatus::Added)];

        let prompt = build_prompt(&NotesContext::new(&pr, &commits, &files));

        assert!(prompt.starts_with("Write professional release notes"));
        assert!(prompt.contains("Title: Add caching layer"));
        assert!(prompt.contains("Description: Improves performance."));
        assert!(prompt.contains("- feat: add LRU cache"));
        assert!(prompt.contains("- src/cache.rs (added)"));
    }

    #[test]
    fn test_missing_body_placeholder() {
        let pr = PullRequestMeta::default();
        let prompt = build_prompt(&NotesContext::new(&pr, &[], &[]));
        assert!(prompt.contains("Description: No description"));
    }

    #[test]
    fn test_sanitize_for_prompt() {
        let input = "## Heading\n```rust\ncode\n```";
        let sanitized = sanitize_for_prompt(input);
        assert!(!sanitized.contains("##"));
        assert!(!sanitized.contains("```"));
    }

    #[test]
    fn test_sanitize_limits_lines() {
        let input = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        assert_eq!(sanitize_for_prompt(&input).lines().count(), 50);
    }
}
