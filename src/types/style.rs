use serde::Deserialize;
use crate::types::FontFamily;

#[derive(Debug,Clone,Copy,Default,Deserialize,PartialEq,Eq,Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
   #[default]
    Normal,
    Bold,
}

/// 8-bit RGB fill color for text
#[derive(Debug,Clone,Copy,Default,Deserialize,PartialEq,Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// components scaled to the 0.0..=1.0 range used by PDF operators
    pub fn components(&self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// Style passed to every draw call. The document keeps no "current" font or color.
/// ```text
/// Example
/// let heading = TextStyle::new()
///     .with_size(15.0)              // f32, points
///     .and_weight(Weight::Bold)     // Weight
///     .and_color(Color::rgb(102, 126, 234));
/// ```
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: Weight,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    /// default settings:
    /// - Font family: Helvetica
    /// - Weight: normal
    /// - Font size: 11.0
    /// - Color: black
    pub fn new() -> Self {
        TextStyle::default()
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn and_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn and_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// shorthand for `.and_weight(Weight::Bold)`
    pub fn bold(self) -> Self {
        self.and_weight(Weight::Bold)
    }

    /// rendered width of `text` in points
    pub fn text_width(&self, text: &str) -> f32 {
        self.family.metrics().text_width(text, self.weight, self.size)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            family: FontFamily::Helvetica,
            weight: Weight::Normal,
            size: 11.0,
            color: Color::BLACK,
        }
    }
}
