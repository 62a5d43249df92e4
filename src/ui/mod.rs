pub mod main_window;
pub mod menu;
pub mod status_bar;
pub mod theme;
