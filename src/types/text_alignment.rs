use serde::Deserialize;

/// Horizontal placement of text inside a cell
#[derive(Debug,Clone,Copy,Default,Deserialize,PartialEq,Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
   #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// distance from the cell's left edge to the start of the text
    pub fn offset(&self, text_width: f32, cell_width: f32, padding: f32) -> f32 {
        match self {
            TextAlignment::Left => padding,
            TextAlignment::Center => (cell_width - text_width) / 2.0,
            TextAlignment::Right => cell_width - padding - text_width,
        }
    }
}
