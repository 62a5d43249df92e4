/// Colour scheme of the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a value as written in the settings store. Only the exact
    /// strings `"dark"` and `"light"` are recognised.
    pub fn from_store_value(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Startup resolution: exactly `"dark"` is Dark, anything else
    /// (including a missing value) is Light.
    pub fn resolve(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_checked(checked: bool) -> Theme {
        if checked { Theme::Dark } else { Theme::Light }
    }

    pub fn store_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn style(self) -> SurfaceStyle {
        match self {
            Theme::Light => SurfaceStyle::LIGHT,
            Theme::Dark => SurfaceStyle::DARK,
        }
    }
}

/// Background/foreground pair applied to the text surface, as RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyle {
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
}

impl SurfaceStyle {
    pub const LIGHT: SurfaceStyle = SurfaceStyle {
        background: (0xFF, 0xFF, 0xFF),
        foreground: (0x00, 0x00, 0x00),
    };

    pub const DARK: SurfaceStyle = SurfaceStyle {
        background: (0x00, 0x00, 0x00),
        foreground: (0xFF, 0xFF, 0xFF),
    };
}
