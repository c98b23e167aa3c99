use serde::Deserialize;
use crate::types::Cursor;

/// converts millimetres to PDF points
pub fn mm(value: f32) -> f32 {
    value * 72.0 / 25.4
}

/// What to do with characters the built-in fonts can not show
#[derive(Debug,Clone,Copy,Default,Deserialize,PartialEq,Eq)]
#[serde(rename_all = "lowercase")]
pub enum GlyphPolicy {
    /// replace the character with `?` and log a warning
   #[default]
    Substitute,
    /// reject the draw call with `Error::Encoding`
    Fail,
}

/// # Page geometry
/// All values are PDF points. The write cursor starts at the top-left margin corner and moves
/// down the page; once a draw would cross `margin_bottom` a page break is triggered.
/// ```text
/// Example
/// let setup = PageSetup::a4()
///     .and_page_break(true, mm(18.0))
///     .and_glyph_policy(GlyphPolicy::Fail);
/// ```
#[derive(Debug,Clone,Copy,Deserialize,PartialEq)]
#[serde(default)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// distance from the bottom edge that triggers an automatic page break
    pub margin_bottom: f32,
    /// horizontal padding between a cell border and its text
    pub cell_padding: f32,
    pub line_width: f32,
    pub auto_page_break: bool,
    pub glyph_policy: GlyphPolicy,
}

impl PageSetup {
    /// A4 portrait, 10mm side margins, page break 20mm above the bottom edge
    pub fn a4() -> Self {
        PageSetup {
            width: 595.28,
            height: 841.89,
            margin_left: mm(10.0),
            margin_top: mm(10.0),
            margin_right: mm(10.0),
            margin_bottom: mm(20.0),
            cell_padding: mm(1.0),
            line_width: mm(0.2),
            auto_page_break: true,
            glyph_policy: GlyphPolicy::Substitute,
        }
    }

    /// US letter portrait, same margins as `a4`
    pub fn letter() -> Self {
        PageSetup {
            width: 612.0,
            height: 792.0,
            ..PageSetup::a4()
        }
    }

    /// builder function toggling automatic page breaks and their trigger margin
    pub fn and_page_break(mut self, auto: bool, margin_bottom: f32) -> Self {
        self.auto_page_break = auto;
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn and_glyph_policy(mut self, policy: GlyphPolicy) -> Self {
        self.glyph_policy = policy;
        self
    }

    /// cursor position of a fresh page
    pub fn origin(&self) -> Cursor {
        Cursor {
            x: self.margin_left,
            y: self.height - self.margin_top,
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn printable_width(&self) -> f32 {
        self.right_edge() - self.margin_left
    }

    /// vertical room between the top margin and the page break trigger
    pub fn printable_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        PageSetup::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_millimetres() {
        assert!((mm(25.4) - 72.0).abs() < 1e-4);
        assert!((mm(210.0) - 595.28).abs() < 0.01);
    }

    #[test]
    fn origin_is_top_left_margin_corner() {
        let setup = PageSetup::a4();
        let origin = setup.origin();

        assert_eq!(origin.x, setup.margin_left);
        assert_eq!(origin.y, setup.height - setup.margin_top);
    }

    #[test]
    fn partial_json_falls_back_to_a4() {
        let setup: PageSetup = serde_json::from_str(r#"{ "auto_page_break": false, "glyph_policy": "fail" }"#).unwrap();

        assert!(!setup.auto_page_break);
        assert_eq!(setup.glyph_policy, GlyphPolicy::Fail);
        assert_eq!(setup.width, PageSetup::a4().width);
    }

    #[test]
    fn letter_keeps_margins() {
        let letter = PageSetup::letter();

        assert_eq!(letter.width, 612.0);
        assert_eq!(letter.margin_bottom, PageSetup::a4().margin_bottom);
    }
}
