use crate::types::{ DrawCommand, TextCell };

/// write head position in PDF user space (origin bottom-left, y grows upwards)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

/// container for the draw commands of one page
#[derive(Debug,Clone,PartialEq)]
pub struct Page {
    /// 1-based
    pub number: usize,
    pub commands: Vec<DrawCommand>,
    pub cursor: Cursor,
}

impl Page {
    pub fn new(number: usize, cursor: Cursor) -> Self {
        Page {
            number,
            commands: Vec::new(),
            cursor,
        }
    }

    pub fn text_cells(&self) -> impl Iterator<Item = &TextCell> {
        self.commands.iter().filter_map(DrawCommand::as_text_cell)
    }

    /// text of every cell on the page, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.text_cells().map(|cell| cell.text.as_str()).collect()
    }
}
