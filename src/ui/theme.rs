use fltk::{enums::Color, prelude::*, text::TextEditor};

use crate::app::domain::SurfaceStyle;

fn to_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

/// Paint the text surface with a background/foreground pair. The cursor
/// follows the foreground so it stays visible on either background.
pub fn apply_surface_style(editor: &mut TextEditor, style: SurfaceStyle) {
    editor.set_color(to_color(style.background));
    editor.set_text_color(to_color(style.foreground));
    editor.set_cursor_color(to_color(style.foreground));
    editor.redraw();
}
