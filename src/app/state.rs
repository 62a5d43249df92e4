use std::time::Duration;

use fltk::{app, app::Sender, menu::MenuBar, prelude::*, text::TextEditor, window::Window};
use tracing::debug;

use super::domain::{CursorPosition, Message, Theme};
use super::infrastructure::settings_store::SettingsStore;
use super::shell::{Effect, Shell};
use crate::ui::main_window::MainWidgets;
use crate::ui::status_bar::StatusBar;
use crate::ui::theme::apply_surface_style;

pub struct AppState {
    pub window: Window,
    pub editor: TextEditor,
    pub menu: MenuBar,
    pub status_bar: StatusBar,
    pub sender: Sender<Message>,
    pub shell: Shell,
    store: Box<dyn SettingsStore>,
}

/// Read the editor's cursor as a 1-based line/column.
fn editor_cursor(editor: &TextEditor) -> CursorPosition {
    let Some(buf) = editor.buffer() else {
        return CursorPosition::default();
    };
    let pos = editor.insert_position();
    let prefix = buf.text_range(buf.line_start(pos), pos).unwrap_or_default();
    CursorPosition::from_line_prefix(buf.count_lines(0, pos), &prefix)
}

impl AppState {
    /// Take ownership of the built widgets and paint the surface with the
    /// shell's startup theme.
    pub fn new(
        widgets: MainWidgets,
        shell: Shell,
        store: Box<dyn SettingsStore>,
        sender: Sender<Message>,
    ) -> Self {
        let mut state = Self {
            window: widgets.wind,
            editor: widgets.text_editor,
            menu: widgets.menu,
            status_bar: widgets.status_bar,
            sender,
            shell,
            store,
        };
        let theme = state.shell.theme();
        state.apply_theme(theme);
        state
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        apply_surface_style(&mut self.editor, theme.style());
    }

    /// Poll the settings store every `interval` for the lifetime of the app.
    pub fn start_theme_watcher(&self, interval: Duration) {
        let s = self.sender;
        let secs = interval.as_secs_f64();
        app::add_timeout3(secs, move |handle| {
            s.send(Message::ThemePoll);
            app::repeat_timeout3(secs, handle);
        });
    }

    pub fn handle_message(&mut self, msg: Message) {
        let editor = &self.editor;
        let effect = self.shell.handle(msg, self.store.as_ref(), || editor_cursor(editor));

        match effect {
            Some(Effect::ApplyTheme(theme)) => self.apply_theme(theme),
            Some(Effect::SetCursorLabel(label)) => self.status_bar.set_cursor_label(&label),
            Some(Effect::CloseWindow) => self.window.hide(),
            None => debug!(?msg, "no visible change"),
        }
    }
}
