//! Message handling for the editor shell, independent of any widget.
//!
//! `AppState` owns the FLTK widgets and turns the returned [`Effect`]s into
//! widget calls.

use tracing::{debug, info};

use super::controllers::{StatusBarModel, ThemeSync};
use super::domain::{CursorPosition, Message, Theme};
use super::infrastructure::settings_store::SettingsStore;

/// What the window has to do in response to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ApplyTheme(Theme),
    SetCursorLabel(String),
    CloseWindow,
}

#[derive(Debug, Clone)]
pub struct Shell {
    theme: ThemeSync,
    status: StatusBarModel,
}

impl Shell {
    pub fn new(theme: ThemeSync) -> Self {
        Self {
            theme,
            status: StatusBarModel::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.applied()
    }

    pub fn status(&self) -> &StatusBarModel {
        &self.status
    }

    /// Handle one message. `cursor` is only called for `CursorMoved`.
    pub fn handle(
        &mut self,
        msg: Message,
        store: &dyn SettingsStore,
        cursor: impl FnOnce() -> CursorPosition,
    ) -> Option<Effect> {
        match msg {
            Message::Exit => {
                info!("exit requested");
                Some(Effect::CloseWindow)
            }
            Message::ToggleDarkTheme(checked) => Some(Effect::ApplyTheme(self.theme.toggle(checked))),
            Message::CursorMoved => {
                if self.status.set_cursor(cursor()) {
                    Some(Effect::SetCursorLabel(self.status.cursor_label()))
                } else {
                    None
                }
            }
            Message::ThemePoll => self.theme.poll(store).map(Effect::ApplyTheme),
            Message::Unwired(label) => {
                debug!(label, "menu item has no action");
                None
            }
        }
    }
}
