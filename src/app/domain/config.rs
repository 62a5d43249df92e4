use std::time::Duration;

use crate::app::controllers::THEME_KEY;

/// Fixed parameters the shell window is built from. Nothing here is read
/// from the command line or the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub title: String,
    pub icon_path: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub font_size: i32,
    pub theme_poll_interval: Duration,
    pub store_organization: String,
    pub store_application: String,
    pub theme_key: String,
}

fn default_title() -> String {
    "Notepad".to_string()
}

fn default_icon_path() -> String {
    "icon.ico".to_string()
}

fn default_font_size() -> i32 {
    11
}

fn default_theme_poll_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_store_organization() -> String {
    "org.notepad".to_string()
}

fn default_store_application() -> String {
    "Notepad".to_string()
}

fn default_theme_key() -> String {
    THEME_KEY.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon_path: default_icon_path(),
            x: 100,
            y: 100,
            width: 800,
            height: 600,
            font_size: default_font_size(),
            theme_poll_interval: default_theme_poll_interval(),
            store_organization: default_store_organization(),
            store_application: default_store_application(),
            theme_key: default_theme_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Notepad");
        assert_eq!(config.icon_path, "icon.ico");
        assert_eq!((config.x, config.y), (100, 100));
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.theme_poll_interval, Duration::from_secs(5));
        assert_eq!(config.theme_key, "Theme");
    }
}
