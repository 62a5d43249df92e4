use crate::app::domain::CursorPosition;

pub const ENCODING_LABEL: &str = "UTF-8";
pub const LINE_ENDING_LABEL: &str = "Windows (CRLF)";
pub const ZOOM_LABEL: &str = "100%";

/// Text of the four status bar fields. The first three are fixed for the
/// whole session; only the cursor field follows the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarModel {
    cursor: CursorPosition,
}

impl StatusBarModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(&self) -> &'static str {
        ENCODING_LABEL
    }

    pub fn line_ending(&self) -> &'static str {
        LINE_ENDING_LABEL
    }

    pub fn zoom(&self) -> &'static str {
        ZOOM_LABEL
    }

    pub fn cursor_label(&self) -> String {
        self.cursor.label()
    }

    /// Returns true when the label text changed.
    pub fn set_cursor(&mut self, cursor: CursorPosition) -> bool {
        let changed = self.cursor != cursor;
        self.cursor = cursor;
        changed
    }
}

#[cfg(test)]
impl StatusBarModel {
    pub fn labels(&self) -> [String; 4] {
        [
            self.encoding().to_string(),
            self.line_ending().to_string(),
            self.zoom().to_string(),
            self.cursor_label(),
        ]
    }
}
