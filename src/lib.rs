//! Memoa — a personal note-taking service.
//!
//! Memoa keeps per-user notes, a kanban board, favourite snippets, and a
//! theme preference, and answers free-text prompts with a keyword-based
//! assistant that can reorganize the note list. All state flows through a
//! single pluggable key-value storage port (SQLite in production, an
//! in-memory map in tests) and is exposed over a small JSON HTTP API.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization and schema
//! - [`storage`] — The storage port and its SQLite/in-memory backends
//! - [`store`] — Feature stores: session, users, notes, kanban, favourites, theme
//! - [`assistant`] — Keyword classifier, reply synthesis, and note mutations
//! - [`server`] — The axum HTTP API

pub mod assistant;
pub mod config;
pub mod db;
pub mod server;
pub mod storage;
pub mod store;
