use std::path::PathBuf;
use crate::types::{ TextAlignment, TextStyle };

#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub enum Border {
   #[default]
    None,
    /// all four sides
    Full,
}

/// Where the cursor goes after a cell has been drawn
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub enum Advance {
    /// to the right edge of the cell, same line
   #[default]
    Right,
    /// to the left margin, one cell height down
    NextLine,
    /// one cell height down, same horizontal position
    Below,
}

/// Request for a single text cell, consumed by `Document::draw_cell()`
/// ```text
/// Example
/// let cell = Cell::new("Contraseña", mm(50.0), mm(8.0))
///     .with_border(Border::Full)               // Border
///     .and_alignment(TextAlignment::Center)    // TextAlignment
///     .and_advance(Advance::NextLine);         // Advance
/// ```
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cell<'a> {
    pub text: &'a str,
    /// `None` stretches the cell to the right margin
    pub width: Option<f32>,
    pub height: f32,
    pub border: Border,
    pub align: TextAlignment,
    pub advance: Advance,
}

impl<'a> Cell<'a> {
    pub fn new(text: &'a str, width: f32, height: f32) -> Self {
        Cell {
            text,
            width: Some(width),
            height,
            border: Border::None,
            align: TextAlignment::Left,
            advance: Advance::Right,
        }
    }

    /// cell spanning from the cursor to the right margin
    pub fn full_width(text: &'a str, height: f32) -> Self {
        Cell {
            width: None,
            ..Cell::new(text, 0.0, height)
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn and_alignment(mut self, align: TextAlignment) -> Self {
        self.align = align;
        self
    }

    pub fn and_advance(mut self, advance: Advance) -> Self {
        self.advance = advance;
        self
    }
}

/// A placed text cell; `(x, y)` is its top-left corner in PDF user space
#[derive(Debug,Clone,PartialEq)]
pub struct TextCell {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub border: Border,
    pub align: TextAlignment,
    pub style: TextStyle,
}

/// A placed image; `resource` indexes the document's decoded images
#[derive(Debug,Clone,PartialEq)]
pub struct ImagePlacement {
    pub path: PathBuf,
    pub resource: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug,Clone,PartialEq)]
pub enum DrawCommand {
    TextCell(TextCell),
    Image(ImagePlacement),
}

impl DrawCommand {
    pub fn as_text_cell(&self) -> Option<&TextCell> {
        match self {
            DrawCommand::TextCell(cell) => Some(cell),
            DrawCommand::Image(_) => None,
        }
    }
}
