//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Theme, CursorPosition, menu layout, Messages)
//! - `controllers/` - Widget-free state (ThemeSync, StatusBarModel)
//! - `infrastructure/` - External integrations (settings store, error)
//! - `shell.rs` - Message handling
//! - `state.rs` - Main application coordinator, owns the widgets

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod shell;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{StatusBarModel, THEME_KEY, ThemeSync};
pub use domain::{CursorPosition, Message, ShellConfig, SurfaceStyle, Theme};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::settings_store::{FileSettingsStore, SettingsStore};
pub use shell::{Effect, Shell};
pub use state::AppState;
