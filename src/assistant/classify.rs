//! Keyword-based note classification and the human-readable summary.
//!
//! Each note is tested against the three keyword tables in priority order
//! Action → Ideas → Reference; the first match wins and anything else lands
//! in General. Classification is deterministic given the tables, so the
//! summary (bucket assignment and index numbering) is reproducible even
//! though the surrounding reply templates are picked at random.

use crate::store::types::Note;

use super::templates::{matches_any, ACTION_KEYWORDS, IDEA_KEYWORDS, REFERENCE_KEYWORDS};

/// Number of characters of note content considered for matching and shown in
/// summary snippets.
pub const SNIPPET_LEN: usize = 120;

/// The fixed categories a note can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Action,
    Ideas,
    Reference,
    General,
}

impl Bucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Action => "Actions",
            Self::Ideas => "Ideas",
            Self::Reference => "References",
            Self::General => "General",
        }
    }

    /// Display order of buckets in the summary.
    pub const ALL: [Bucket; 4] = [Bucket::Action, Bucket::Ideas, Bucket::Reference, Bucket::General];
}

/// One classified note: its bucket, 1-based position in the original list,
/// and display snippet.
#[derive(Debug, Clone)]
pub struct Entry {
    pub bucket: Bucket,
    pub index: usize,
    pub snippet: String,
}

/// Assign a single note's content to a bucket.
pub fn classify_content(content: &str) -> Bucket {
    let probe: String = content.trim().chars().take(SNIPPET_LEN).collect();
    let probe = probe.to_lowercase();

    if matches_any(&probe, ACTION_KEYWORDS) {
        Bucket::Action
    } else if matches_any(&probe, IDEA_KEYWORDS) {
        Bucket::Ideas
    } else if matches_any(&probe, REFERENCE_KEYWORDS) {
        Bucket::Reference
    } else {
        Bucket::General
    }
}

/// Classify every note, preserving 1-based original indices.
pub fn classify(notes: &[Note]) -> Vec<Entry> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| Entry {
            bucket: classify_content(&note.content),
            index: i + 1,
            snippet: snippet(&note.content),
        })
        .collect()
}

/// First 120 characters of trimmed content, with an ellipsis when truncated.
pub fn snippet(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() > SNIPPET_LEN {
        let head: String = trimmed.chars().take(SNIPPET_LEN).collect();
        format!("{head}…")
    } else {
        trimmed.to_string()
    }
}

/// Entries belonging to one bucket, in original order.
pub fn in_bucket<'a>(entries: &'a [Entry], bucket: Bucket) -> Vec<&'a Entry> {
    entries.iter().filter(|e| e.bucket == bucket).collect()
}

/// The bucket holding the most notes (ties broken by display order).
pub fn largest_bucket(entries: &[Entry]) -> Bucket {
    let mut best = Bucket::General;
    let mut best_count = 0;
    for bucket in Bucket::ALL {
        let count = in_bucket(entries, bucket).len();
        if count > best_count {
            best = bucket;
            best_count = count;
        }
    }
    best
}

/// Build the bucket summary: a header with count per non-empty bucket,
/// followed by `Note {index}: {snippet}` bullet lines.
pub fn summarize(entries: &[Entry]) -> String {
    let mut sections = Vec::new();
    for bucket in Bucket::ALL {
        let members = in_bucket(entries, bucket);
        if members.is_empty() {
            continue;
        }
        let mut lines = vec![format!("{} ({})", bucket.label(), members.len())];
        for entry in members {
            lines.push(format!("- Note {}: {}", entry.index, entry.snippet));
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}
