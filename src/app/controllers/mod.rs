//! Controllers layer - the shell's logical state, kept free of widgets so it
//! can be driven from tests.

pub mod status_bar;
pub mod theme_sync;

pub use status_bar::StatusBarModel;
pub use theme_sync::{THEME_KEY, ThemeSync};
