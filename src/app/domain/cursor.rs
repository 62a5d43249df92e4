use std::fmt;

/// Cursor location shown in the status bar. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl CursorPosition {
    /// Build from the widget's 0-based line/column.
    pub fn from_zero_based(line: usize, column: usize) -> Self {
        Self {
            line: line + 1,
            column: column + 1,
        }
    }

    /// Build from what the text buffer reports: the number of line breaks
    /// before the cursor and the text between the start of the cursor's line
    /// and the cursor. The column counts characters, not bytes.
    pub fn from_line_prefix(line_index: i32, prefix: &str) -> Self {
        Self::from_zero_based(line_index.max(0) as usize, prefix.chars().count())
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        assert_eq!(CursorPosition::default().label(), "Line 1, Column 1");
    }

    #[test]
    fn test_zero_based_offsets_by_one() {
        for (l, c) in [(0, 0), (0, 7), (3, 0), (41, 119)] {
            let pos = CursorPosition::from_zero_based(l, c);
            assert_eq!(pos.label(), format!("Line {}, Column {}", l + 1, c + 1));
            assert!(pos.line >= 1 && pos.column >= 1);
        }
    }

    #[test]
    fn test_line_prefix_at_start_of_text() {
        assert_eq!(CursorPosition::from_line_prefix(0, ""), CursorPosition::default());
    }

    #[test]
    fn test_line_prefix_offsets_by_one() {
        assert_eq!(CursorPosition::from_line_prefix(0, "hello").label(), "Line 1, Column 6");
        assert_eq!(CursorPosition::from_line_prefix(1, "wor").label(), "Line 2, Column 4");
        assert_eq!(CursorPosition::from_line_prefix(2, "").label(), "Line 3, Column 1");
    }

    #[test]
    fn test_line_prefix_counts_characters_not_bytes() {
        // "héllo " is 7 bytes but 6 characters
        assert_eq!(CursorPosition::from_line_prefix(0, "héllo ").label(), "Line 1, Column 7");
        assert_eq!(CursorPosition::from_line_prefix(4, "日本").label(), "Line 5, Column 3");
    }

    #[test]
    fn test_line_prefix_negative_line_clamps_to_first() {
        assert_eq!(CursorPosition::from_line_prefix(-1, "ab").label(), "Line 1, Column 3");
    }
}
