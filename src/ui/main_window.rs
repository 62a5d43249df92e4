use fltk::{
    app::{self, Sender},
    enums::{Event, Font},
    group::{Flex, FlexType},
    image::IcoImage,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use tracing::warn;

use crate::app::controllers::StatusBarModel;
use crate::app::domain::{MENU_LAYOUT, Message, ShellConfig};
use super::menu::build_menu;
use super::status_bar::{STATUS_BAR_HEIGHT, StatusBar};

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: StatusBar,
}

/// FLTK's default window callback also fires on Escape. Only a close
/// request from the window manager should end the session.
pub fn closes_window(event: Event) -> bool {
    event == Event::Close
}

pub fn build_main_window(
    config: &ShellConfig,
    status: &StatusBarModel,
    sender: &Sender<Message>,
) -> MainWidgets {
    let mut wind = Window::new(config.x, config.y, config.width, config.height, None);
    wind.set_label(&config.title);
    wind.set_xclass("Notepad");
    wind.set_callback(|w| {
        if closes_window(app::event()) {
            w.hide();
        }
    });

    match IcoImage::load(&config.icon_path) {
        Ok(icon) => wind.set_icon(Some(icon)),
        Err(e) => warn!(path = %config.icon_path, error = ?e, "failed to load window icon"),
    }

    let mut flex = Flex::new(0, 0, config.width, config.height, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);
    build_menu(&mut menu, sender, MENU_LAYOUT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(config.font_size);

    // FLTK has no cursor-moved signal. The message is queued, so by the
    // time it is dispatched the editor has already moved the cursor.
    let s = *sender;
    text_editor.handle(move |_, event| {
        if matches!(
            event,
            Event::KeyDown | Event::KeyUp | Event::Push | Event::Drag | Event::Released | Event::Paste
        ) {
            s.send(Message::CursorMoved);
        }
        false
    });

    let status_bar = StatusBar::new(status);
    flex.fixed(&status_bar.row, STATUS_BAR_HEIGHT);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        status_bar,
    }
}
