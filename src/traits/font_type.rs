use unicode_normalization::UnicodeNormalization;
use crate::types::Weight;

/// Width metrics of a built-in font family. Widths are expressed in thousandths of an em, as
/// listed in the AFM files of the PDF standard fonts, and scaled to points by `standardize`.
///
/// Registering a new family means providing the width of every printable character for both
/// weights; accented letters fall back to the width of their base letter.
pub trait FontType {
    /// PostScript name written as `/BaseFont`
    fn base_font(&self, weight: Weight) -> &'static [u8];
    fn normal(&self, ch: char) -> Option<u16>;
    fn bold(&self, ch: char) -> Option<u16>;
    /// width used for encodable characters missing from the tables
    fn missing_width(&self) -> u16;

    fn standardize(&self, width: u16, font_size: f32) -> f32 {
        f32::from(width) * font_size / 1000.0
    }

    fn char_width(&self, ch: char, weight: Weight, font_size: f32) -> f32 {
        let lookup = |ch: char| match weight {
            Weight::Normal => self.normal(ch),
            Weight::Bold => self.bold(ch),
        };

        let width = lookup(ch)
            .or_else(|| base_letter(ch).and_then(lookup))
            .unwrap_or_else(|| self.missing_width());

        self.standardize(width, font_size)
    }

    fn text_width(&self, text: &str, weight: Weight, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width(ch, weight, font_size))
            .sum()
    }
}

/// `ñ` -> `n`, `É` -> `E`; `None` when `ch` does not decompose onto an ASCII letter
fn base_letter(ch: char) -> Option<char> {
    std::iter::once(ch)
        .nfd()
        .next()
        .filter(|base| *base != ch && base.is_ascii_alphabetic())
}
