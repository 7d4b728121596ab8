//! The note assistant: keyword classification, canned reply synthesis, and
//! prompt-triggered note mutations.
//!
//! The reply templates are picked through an injected random source so tests
//! can seed it and assert exact output; everything else (bucket assignment,
//! summary text, mutations) is deterministic. An empty note list always gets
//! one of two fixed replies and never mutates anything.

pub mod classify;
pub mod templates;

use rand::Rng;

use crate::store::types::{generate_id, now_rfc3339, Note};

use classify::{classify, in_bucket, largest_bucket, summarize, Bucket, Entry};
use templates::{
    matches_any, CHECKLIST_WORDS, EMPTY_REPLIES, FOCUS_LINES, INTROS, REWRITE_WORDS, SORT_WORDS,
    STRUCTURE_WORDS, SUMMARY_INTROS, SUMMARY_WORDS,
};

/// Outcome of one assistant exchange.
#[derive(Debug, serde::Serialize)]
pub struct AssistantReply {
    /// The synthesized response text.
    pub reply: String,
    /// One confirmation line per note mutation that was applied.
    pub actions: Vec<String>,
}

impl AssistantReply {
    /// Whether any mutation was applied (the caller must save the list).
    pub fn mutated(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Run the assistant over the note list for one prompt.
///
/// The reply is synthesized from the list as it was submitted; prompt
/// actions mutate `notes` in place afterwards, so the summary never
/// describes the assistant's own output. Multiple action keywords in one
/// prompt all apply.
pub fn run(notes: &mut Vec<Note>, prompt: &str, rng: &mut impl Rng) -> AssistantReply {
    if notes.is_empty() {
        return AssistantReply {
            reply: pick(rng, EMPTY_REPLIES).to_string(),
            actions: Vec::new(),
        };
    }

    let reply = respond(notes, prompt, rng);
    let actions = apply_actions(notes, prompt);
    AssistantReply { reply, actions }
}

/// Synthesize the reply text: intro, bucket summary, and a focus line, each
/// segment picked at random. The summary-flavored intro table is used when
/// the prompt mentions a summary.
pub fn respond(notes: &[Note], prompt: &str, rng: &mut impl Rng) -> String {
    let entries = classify(notes);
    let prompt_lc = prompt.to_lowercase();

    let intro = if matches_any(&prompt_lc, SUMMARY_WORDS) {
        pick(rng, SUMMARY_INTROS)
    } else {
        pick(rng, INTROS)
    };
    let summary = summarize(&entries);
    let focus = pick(rng, FOCUS_LINES).replace("{label}", largest_bucket(&entries).label());

    format!("{intro}\n\n{summary}\n\n{focus}")
}

/// Scan the prompt for action keywords and mutate the note list accordingly.
/// Returns one confirmation line per applied action.
pub fn apply_actions(notes: &mut Vec<Note>, prompt: &str) -> Vec<String> {
    let prompt_lc = prompt.to_lowercase();
    let mut confirmations = Vec::new();

    if matches_any(&prompt_lc, STRUCTURE_WORDS) {
        let summary = summarize(&classify(notes));
        notes.push(make_note(format!("Structured overview\n\n{summary}")));
        confirmations.push("Added a structured note built from your summary.".to_string());
    }

    if matches_any(&prompt_lc, REWRITE_WORDS) {
        if let Some(first) = notes.first_mut() {
            first.content = sectioned(&first.content);
            confirmations.push("Rewrote your first note into sections.".to_string());
        }
    }

    if matches_any(&prompt_lc, CHECKLIST_WORDS) {
        if let Some(items) = checklist_items(notes) {
            notes.push(make_note(items));
            confirmations.push("Added a checklist note.".to_string());
        }
    }

    if matches_any(&prompt_lc, SORT_WORDS) {
        notes.sort_by(|a, b| a.content.to_lowercase().cmp(&b.content.to_lowercase()));
        confirmations.push("Sorted your notes by content.".to_string());
    }

    confirmations
}

/// Build checklist content from the Action bucket, falling back to General,
/// then Ideas. `None` when all three are empty.
fn checklist_items(notes: &[Note]) -> Option<String> {
    let entries: Vec<Entry> = classify(notes);
    for bucket in [Bucket::Action, Bucket::General, Bucket::Ideas] {
        let members = in_bucket(&entries, bucket);
        if !members.is_empty() {
            let mut lines = vec!["Checklist".to_string()];
            for entry in members {
                lines.push(format!("☐ {}", entry.snippet));
            }
            return Some(lines.join("\n"));
        }
    }
    None
}

/// Rewrite free text into a sectioned layout: the first non-empty line
/// becomes the overview, the rest become detail bullets.
fn sectioned(content: &str) -> String {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().unwrap_or("").to_string();
    let rest: Vec<String> = lines.map(|l| format!("- {l}")).collect();
    if rest.is_empty() {
        format!("## Overview\n{first}")
    } else {
        format!("## Overview\n{first}\n\n## Details\n{}", rest.join("\n"))
    }
}

fn make_note(content: String) -> Note {
    Note {
        id: generate_id(),
        content,
        created_at: now_rfc3339(),
    }
}

fn pick<'a>(rng: &mut impl Rng, options: &'a [&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}
