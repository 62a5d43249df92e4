//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme and surface colours
//! - Cursor position
//! - Menu layout
//! - Shell configuration
//! - Message types for the event system

pub mod config;
pub mod cursor;
pub mod menu_layout;
pub mod messages;
pub mod theme;

pub use config::ShellConfig;
pub use cursor::CursorPosition;
pub use menu_layout::{MENU_LAYOUT, MenuCommand, MenuEntry, ResolvedItem, resolve_layout};
pub use messages::Message;
pub use theme::{SurfaceStyle, Theme};
