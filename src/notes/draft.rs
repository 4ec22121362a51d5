//! AI drafting with deterministic template fallback.

use std::fmt::{self, Write};

use tracing::{info, warn};

use super::NotesContext;
use super::template::render_release_notes;
use crate::llm::{GenerationParams, TextGenerator};

/// Generated text shorter than this (after trimming) is not used.
pub const MIN_AI_NOTES_CHARS: usize = 50;

/// Where a release document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesSource {
    Template,
    Ai,
}

impl NotesSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for NotesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the drafting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    /// Render the deterministic template.
    Templated,
    /// Use the cleaned generated text.
    AiDrafted(String),
}

impl Draft {
    /// Validate generated text against the prompt that produced it.
    ///
    /// Too-short text yields `Templated`. Otherwise one copy of the prompt
    /// at the start (after any leading whitespace) is removed and the rest is
    /// trimmed.
    pub fn from_generated(text: &str, prompt: &str) -> Draft {
        let length = text.trim().chars().count();
        if length < MIN_AI_NOTES_CHARS {
            info!(
                length,
                minimum = MIN_AI_NOTES_CHARS,
                "Generated release notes too short, using template"
            );
            return Draft::Templated;
        }

        let text = text.trim_start();
        let cleaned = text.strip_prefix(prompt).unwrap_or(text).trim();
        Draft::AiDrafted(cleaned.to_string())
    }

    pub fn source(&self) -> NotesSource {
        match self {
            Draft::Templated => NotesSource::Template,
            Draft::AiDrafted(_) => NotesSource::Ai,
        }
    }

    /// Produce the final release document.
    pub fn into_document(self, ctx: &NotesContext<'_>) -> String {
        match self {
            Draft::Templated => render_release_notes(ctx),
            Draft::AiDrafted(text) => append_technical_footer(text, ctx),
        }
    }
}

/// Ask the generator for a draft, falling back to the template on any failure.
///
/// With no generator configured no request is made. The generator is called
/// at most once and its errors are logged, never returned.
pub async fn draft_release_notes(
    generator: Option<&dyn TextGenerator>,
    prompt: &str,
    ctx: &NotesContext<'_>,
) -> Draft {
    let Some(generator) = generator else {
        info!("No text generation credential configured, using template");
        return Draft::Templated;
    };

    info!(
        pull_request = ctx.pull_request.number,
        "Drafting release notes with text generation service"
    );

    match generator.generate(prompt, &GenerationParams::default()).await {
        Ok(text) => Draft::from_generated(&text, prompt),
        Err(e) => {
            warn!(error = %e, "Text generation failed, using template");
            Draft::Templated
        }
    }
}

fn append_technical_footer(mut notes: String, ctx: &NotesContext<'_>) -> String {
    notes.push_str("\n\n---\n\n**Technical details:**\n");
    let _ = writeln!(notes, "- Total commits: {}", ctx.commits.len());
    let _ = writeln!(notes, "- Files changed: {}", ctx.files.len());

    if let Some(login) = ctx.author() {
        let _ = writeln!(notes, "- Author: @{login}");
    }

    notes
}
