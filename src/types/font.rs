use crate::{
    traits::FontType,
    types::{ encoding, Weight }
};

/// Helvetica / Helvetica-Bold, the standard stand-in for Arial
pub struct Helvetica;

/// Courier / Courier-Bold, every glyph is 600 units wide
pub struct Courier;

// widths for ' ' (0x20) through '~' (0x7E)
const HELVETICA_NORMAL: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn ascii_width(table: &[u16; 95], ch: char) -> Option<u16> {
    let index = (ch as u32).checked_sub(0x20)?;
    table.get(index as usize).copied()
}

/// non-ASCII glyphs that are not plain accented letters: (normal, bold)
fn helvetica_extended(ch: char) -> Option<(u16, u16)> {
    let widths = match ch {
        '\u{a0}' => (278, 278),
        '¡' => (333, 333),
        '¿' => (611, 611),
        '°' => (400, 400),
        'ª' => (370, 370),
        'º' => (365, 365),
        '«' | '»' => (556, 556),
        '·' => (278, 278),
        '©' | '®' => (737, 737),
        '§' => (556, 556),
        '×' | '÷' => (584, 584),
        'ß' => (611, 611),
        'æ' => (889, 889),
        'Æ' => (1000, 1000),
        'ø' => (611, 611),
        'Ø' => (778, 778),
        '€' => (556, 556),
        '‘' | '’' => (222, 278),
        '“' | '”' => (333, 500),
        '–' => (556, 556),
        '—' | '…' => (1000, 1000),
        '•' => (350, 350),
        _ => return None,
    };

    Some(widths)
}

impl FontType for Helvetica {
    fn base_font(&self, weight: Weight) -> &'static [u8] {
        match weight {
            Weight::Normal => b"Helvetica",
            Weight::Bold => b"Helvetica-Bold",
        }
    }

    fn normal(&self, ch: char) -> Option<u16> {
        ascii_width(&HELVETICA_NORMAL, ch).or_else(|| helvetica_extended(ch).map(|(normal, _)| normal))
    }

    fn bold(&self, ch: char) -> Option<u16> {
        ascii_width(&HELVETICA_BOLD, ch).or_else(|| helvetica_extended(ch).map(|(_, bold)| bold))
    }

    fn missing_width(&self) -> u16 {
        556
    }
}

impl FontType for Courier {
    fn base_font(&self, weight: Weight) -> &'static [u8] {
        match weight {
            Weight::Normal => b"Courier",
            Weight::Bold => b"Courier-Bold",
        }
    }

    fn normal(&self, ch: char) -> Option<u16> {
        encoding::win_ansi(ch).map(|_| 600)
    }

    fn bold(&self, ch: char) -> Option<u16> {
        self.normal(ch)
    }

    fn missing_width(&self) -> u16 {
        600
    }
}
