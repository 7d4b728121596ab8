//! Per-user feature stores: session, user registry, notes, kanban board,
//! favourites, and theme preference. Each store is a thin layer over the
//! injected [`StoragePort`](crate::storage::StoragePort) and owns the key
//! layout and record shape for its concern.

pub mod favourites;
pub mod kanban;
pub mod notes;
pub mod session;
pub mod theme;
pub mod types;
pub mod users;

pub use favourites::FavouritesStore;
pub use kanban::KanbanStore;
pub use notes::NoteStore;
pub use session::SessionStore;
pub use theme::ThemeStore;
pub use users::UserRegistry;
