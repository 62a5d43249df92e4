//! Declarative description of the menu bar.
//!
//! Most entries are placeholders that only exist to give the menu its
//! familiar shape. Only [`MenuCommand`] items do anything; everything else is
//! routed to [`Message::Unwired`] and ignored.

use super::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    ToggleDarkTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        command: Option<MenuCommand>,
        enabled: bool,
        checkable: bool,
    },
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

const fn inert(label: &'static str) -> MenuEntry {
    MenuEntry::Item { label, command: None, enabled: true, checkable: false }
}

const fn disabled(label: &'static str) -> MenuEntry {
    MenuEntry::Item { label, command: None, enabled: false, checkable: false }
}

const SEP: MenuEntry = MenuEntry::Separator;

pub const MENU_LAYOUT: &[Menu] = &[
    Menu {
        title: "File",
        entries: &[
            inert("New"),
            inert("New Window"),
            inert("Open..."),
            inert("Save"),
            inert("Save As..."),
            SEP,
            inert("Page Setup..."),
            inert("Print..."),
            SEP,
            MenuEntry::Item {
                label: "Exit",
                command: Some(MenuCommand::Exit),
                enabled: true,
                checkable: false,
            },
        ],
    },
    Menu {
        title: "Edit",
        entries: &[
            disabled("Undo"),
            disabled("Redo"),
            SEP,
            inert("Cut"),
            inert("Copy"),
            inert("Paste"),
            inert("Delete"),
            SEP,
            inert("Look Up"),
            inert("Find and Replace"),
            SEP,
            inert("Select All"),
            inert("Insert Timestamp"),
        ],
    },
    Menu {
        title: "Format",
        entries: &[
            MenuEntry::Item {
                label: "Word Wrap",
                command: None,
                enabled: false,
                checkable: true,
            },
            inert("Font"),
            MenuEntry::Item {
                label: "Dark Theme",
                command: Some(MenuCommand::ToggleDarkTheme),
                enabled: true,
                checkable: true,
            },
        ],
    },
];

/// Toolkit-neutral item flags. `divider` marks an item followed by a
/// separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    pub divider: bool,
    pub inactive: bool,
    pub toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub path: String,
    pub label: &'static str,
    pub command: Option<MenuCommand>,
    pub flags: ItemFlags,
}

impl ResolvedItem {
    /// Message sent when the item is picked. `checked` is the item's state
    /// after the click and only matters for checkable items.
    pub fn message(&self, checked: bool) -> Message {
        match self.command {
            Some(MenuCommand::Exit) => Message::Exit,
            Some(MenuCommand::ToggleDarkTheme) => Message::ToggleDarkTheme(checked),
            None => Message::Unwired(self.label),
        }
    }
}

/// Flatten menus into menu-bar paths, folding each separator into a divider
/// on the item before it. Leading and repeated separators have nothing to
/// attach to and are dropped.
pub fn resolve_layout(menus: &[Menu]) -> Vec<ResolvedItem> {
    let mut items = Vec::new();
    for menu in menus {
        let first = items.len();
        for entry in menu.entries {
            match *entry {
                MenuEntry::Item { label, command, enabled, checkable } => {
                    items.push(ResolvedItem {
                        path: format!("{}/{}", menu.title, label),
                        label,
                        command,
                        flags: ItemFlags {
                            divider: false,
                            inactive: !enabled,
                            toggle: checkable,
                        },
                    });
                }
                MenuEntry::Separator => {
                    if items.len() > first {
                        if let Some(last) = items.last_mut() {
                            last.flags.divider = true;
                        }
                    }
                }
            }
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> Vec<ResolvedItem> {
        resolve_layout(MENU_LAYOUT)
    }

    fn find(path: &str) -> ResolvedItem {
        resolved()
            .into_iter()
            .find(|i| i.path == path)
            .unwrap_or_else(|| panic!("missing menu item {}", path))
    }

    #[test]
    fn test_menu_titles_in_order() {
        let titles: Vec<_> = MENU_LAYOUT.iter().map(|m| m.title).collect();
        assert_eq!(titles, ["File", "Edit", "Format"]);
    }

    #[test]
    fn test_item_order() {
        let paths: Vec<_> = resolved().into_iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            [
                "File/New",
                "File/New Window",
                "File/Open...",
                "File/Save",
                "File/Save As...",
                "File/Page Setup...",
                "File/Print...",
                "File/Exit",
                "Edit/Undo",
                "Edit/Redo",
                "Edit/Cut",
                "Edit/Copy",
                "Edit/Paste",
                "Edit/Delete",
                "Edit/Look Up",
                "Edit/Find and Replace",
                "Edit/Select All",
                "Edit/Insert Timestamp",
                "Format/Word Wrap",
                "Format/Font",
                "Format/Dark Theme",
            ]
        );
    }

    #[test]
    fn test_separators_become_dividers() {
        let dividers: Vec<_> = resolved()
            .into_iter()
            .filter(|i| i.flags.divider)
            .map(|i| i.path)
            .collect();
        assert_eq!(
            dividers,
            [
                "File/Save As...",
                "File/Print...",
                "Edit/Redo",
                "Edit/Delete",
                "Edit/Find and Replace",
            ]
        );
    }

    #[test]
    fn test_disabled_items() {
        let inactive: Vec<_> = resolved()
            .into_iter()
            .filter(|i| i.flags.inactive)
            .map(|i| i.path)
            .collect();
        assert_eq!(inactive, ["Edit/Undo", "Edit/Redo", "Format/Word Wrap"]);
    }

    #[test]
    fn test_checkable_items() {
        assert!(find("Format/Word Wrap").flags.toggle);
        assert!(find("Format/Dark Theme").flags.toggle);
        assert!(!find("Format/Font").flags.toggle);
    }

    #[test]
    fn test_only_exit_and_dark_theme_are_wired() {
        let wired: Vec<_> = resolved()
            .into_iter()
            .filter_map(|i| i.command.map(|c| (i.path, c)))
            .collect();
        assert_eq!(
            wired,
            [
                ("File/Exit".to_string(), MenuCommand::Exit),
                ("Format/Dark Theme".to_string(), MenuCommand::ToggleDarkTheme),
            ]
        );
    }

    #[test]
    fn test_item_messages() {
        assert_eq!(find("File/Exit").message(false), Message::Exit);
        assert_eq!(find("Format/Dark Theme").message(true), Message::ToggleDarkTheme(true));
        assert_eq!(find("Format/Dark Theme").message(false), Message::ToggleDarkTheme(false));
        assert_eq!(find("Edit/Copy").message(false), Message::Unwired("Copy"));
        assert_eq!(find("Format/Word Wrap").message(true), Message::Unwired("Word Wrap"));
    }

    #[test]
    fn test_leading_and_doubled_separators_are_dropped() {
        const ODD: &[Menu] = &[Menu {
            title: "Odd",
            entries: &[SEP, inert("A"), SEP, SEP, inert("B")],
        }];
        let items = resolve_layout(ODD);
        assert_eq!(items.len(), 2);
        assert!(items[0].flags.divider);
        assert!(!items[1].flags.divider);
    }

    #[test]
    fn test_separator_does_not_leak_into_previous_menu() {
        const TWO: &[Menu] = &[
            Menu { title: "One", entries: &[inert("A")] },
            Menu { title: "Two", entries: &[SEP, inert("B")] },
        ];
        let items = resolve_layout(TWO);
        assert!(!items[0].flags.divider);
    }
}
