//! Keyword tables and response templates, kept as data so the matching and
//! synthesis logic stays free of inline literals. English terms plus
//! Portuguese synonyms.

/// Keywords that put a note in the Action bucket.
pub const ACTION_KEYWORDS: &[&str] = &[
    "todo", "to-do", "task", "must", "need to", "deadline", "due", "buy", "call", "fix",
    "schedule", "tarefa", "comprar", "ligar", "prazo",
];

/// Keywords that put a note in the Ideas bucket.
pub const IDEA_KEYWORDS: &[&str] = &[
    "idea", "maybe", "what if", "could", "brainstorm", "concept", "ideia", "talvez", "e se",
];

/// Keywords that put a note in the Reference bucket.
pub const REFERENCE_KEYWORDS: &[&str] = &[
    "http", "www.", "link", "source", "reference", "docs", "fonte", "referencia",
];

/// Fixed replies for an empty note list. No mutation ever happens here.
pub const EMPTY_REPLIES: &[&str] = &[
    "You don't have any notes yet. Write one and I can help you organize it!",
    "No notes yet — once you add a few, ask me again.",
];

/// Intro segments for a regular reply.
pub const INTROS: &[&str] = &[
    "Here's what I found in your notes.",
    "I went through your notes.",
    "Here's a quick look at what you have.",
];

/// Intro segments used when the prompt asks for a summary.
pub const SUMMARY_INTROS: &[&str] = &[
    "Here's a summary of your notes.",
    "Summing up what you have so far.",
];

/// Closing segments; `{label}` is replaced with the largest bucket's label.
pub const FOCUS_LINES: &[&str] = &[
    "Most of what you have falls under {label}.",
    "Your {label} notes stand out the most right now.",
    "If you want somewhere to start, look at {label}.",
];

/// Prompt words that mean "summary".
pub const SUMMARY_WORDS: &[&str] = &["summary", "summarize", "resumo", "resumir"];

/// Prompt words that trigger appending a structured note.
pub const STRUCTURE_WORDS: &[&str] = &[
    "create", "generate", "structure", "criar", "gerar", "estruturar",
];

/// Prompt words that trigger rewriting the first note.
pub const REWRITE_WORDS: &[&str] = &["edit", "rewrite", "editar", "reescrever"];

/// Prompt words that trigger appending a checklist note.
pub const CHECKLIST_WORDS: &[&str] = &["checklist", "tasks", "tarefas"];

/// Prompt words that trigger sorting the note list.
pub const SORT_WORDS: &[&str] = &["sort", "arrange", "ordenar", "organizar"];

/// True when the lowercased haystack contains any of the given keywords.
pub fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}
