//! Typed client for the game information backend.
//!
//! Covers the backend's REST resources (games, updates, versions and their
//! announcement items, calendars, user account, moderation), keeps the
//! logged-in session in an injectable key-value store, and read-through
//! caches the game listing with a freshness window.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod session;
pub mod storage;

// Re-export commonly used items
pub use api::GameInfoApi;
pub use cache::{Cache, DEFAULT_MAX_AGE};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use forms::{FieldDescriptor, FieldKind, ItemCategory};
pub use models::{ApiResponse, AuthUser, Game, GameList, GameListParams};
pub use session::Session;
pub use storage::{MemoryStorage, Storage};
