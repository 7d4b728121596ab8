//! Core record definitions.
//!
//! Defines [`User`] and its [`Session`] projection, [`Note`], [`KanbanCard`]
//! with its [`Stage`], [`FavouriteItem`], and [`Theme`]. All records are
//! user-scoped JSON documents; field names on the wire are camelCase.

use serde::{Deserialize, Serialize};

/// A registered user, as kept in the registry keyed by lowercased email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v7 (time-sortable) unique token.
    pub id: String,
    pub name: String,
    /// Lowercased at registration; unique across the registry.
    pub email: String,
    /// Exact-match credential. Never leaves the registry on the wire.
    pub password: String,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl User {
    /// Reduce to the session projection (drops the password).
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The locally cached identity of the signed-in user — the sole
/// "is logged in" signal, gating access to every feature store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A free-text note. Lists are ordered newest-first.
///
/// Content may embed checklist-marker lines (leading `☐`/`☑`); the store
/// treats those as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Task-progress label attached to a kanban card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Todo,
    InProgress,
    Done,
}

impl Stage {
    /// Wire/storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// A card on the kanban board. Any stage is reachable from any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanCard {
    pub id: String,
    pub content: String,
    pub stage: Stage,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A tagged, coloured snippet with an optional data-URI attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteItem {
    pub id: String,
    pub title: String,
    /// Uppercased at creation.
    pub tag: String,
    pub content: String,
    pub color: String,
    /// Data URI of the attached image, or empty when none was attached.
    #[serde(default)]
    pub attachment: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Theme preference, applied as a root-level attribute by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown theme: {s}")),
        }
    }
}

/// Generate a new unique record id (UUID v7, time-sortable).
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Current timestamp in RFC 3339 format.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
