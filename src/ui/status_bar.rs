use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::controllers::StatusBarModel;

pub const STATUS_BAR_HEIGHT: i32 = 24;

pub struct StatusBar {
    pub row: Flex,
    cursor: Frame,
}

fn field(label: &str, width: i32, row: &mut Flex) -> Frame {
    let mut frame = Frame::default().with_label(label);
    frame.set_frame(FrameType::ThinDownFrame);
    frame.set_align(Align::Center | Align::Inside);
    frame.set_label_size(12);
    row.fixed(&frame, width);
    frame
}

impl StatusBar {
    /// Lay out the fields right-aligned: encoding, line ending, zoom,
    /// cursor position.
    pub fn new(model: &StatusBarModel) -> Self {
        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_margin(2);

        Frame::default();
        field(model.encoding(), 80, &mut row);
        field(model.line_ending(), 120, &mut row);
        field(model.zoom(), 60, &mut row);
        let cursor = field(&model.cursor_label(), 150, &mut row);

        row.end();
        Self { row, cursor }
    }

    pub fn set_cursor_label(&mut self, label: &str) {
        self.cursor.set_label(label);
        self.cursor.redraw();
    }
}
