use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::menu_layout::{ItemFlags, Menu, resolve_layout};
use crate::app::domain::Message;

fn menu_flag(flags: ItemFlags) -> MenuFlag {
    let mut flag = MenuFlag::Normal;
    if flags.toggle {
        flag = flag | MenuFlag::Toggle;
    }
    if flags.inactive {
        flag = flag | MenuFlag::Inactive;
    }
    if flags.divider {
        flag = flag | MenuFlag::MenuDivider;
    }
    flag
}

/// Add every item of `layout` to the menu bar. Each item sends its own
/// message; toggles report their state after the click.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, layout: &[Menu]) {
    for item in resolve_layout(layout) {
        let s = *sender;
        let flag = menu_flag(item.flags);
        let path = item.path.clone();
        menu.add(&path, Shortcut::None, flag, move |m| {
            let checked = m.mvalue().map(|i| i.value()).unwrap_or(false);
            s.send(item.message(checked));
        });
    }
}
