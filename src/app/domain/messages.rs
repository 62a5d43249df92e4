/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and the theme timer send one of these; the dispatch loop
/// in main hands them to `AppState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    Exit,

    // Format
    ToggleDarkTheme(bool),

    // Surface
    CursorMoved,

    // Timer
    ThemePoll,

    /// A menu item with no behaviour behind it, carrying its label.
    Unwired(&'static str),
}
