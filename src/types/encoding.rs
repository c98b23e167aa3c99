//! WinAnsiEncoding, the single-byte encoding used with the built-in Type 1 fonts
use std::borrow::Cow;
use log::warn;
use crate::types::{ Error, GlyphPolicy, Result };

pub const REPLACEMENT: char = '?';

/// byte for `ch` in WinAnsiEncoding, `None` when the fonts have no glyph for it
pub fn win_ansi(ch: char) -> Option<u8> {
    match ch as u32 {
        code @ (0x20..=0x7e | 0xa0..=0xff) => u8::try_from(code).ok(),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8a),
            '‹' => Some(0x8b),
            'Œ' => Some(0x8c),
            'Ž' => Some(0x8e),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9a),
            '›' => Some(0x9b),
            'œ' => Some(0x9c),
            'ž' => Some(0x9e),
            'Ÿ' => Some(0x9f),
            _ => None,
        },
    }
}

/// Makes `text` drawable: tabs and line breaks become spaces, other characters outside
/// WinAnsi are replaced or rejected according to `policy`. Borrows when nothing changes.
pub fn sanitize(text: &str, policy: GlyphPolicy) -> Result<Cow<'_, str>> {
    if text.chars().all(|ch| win_ansi(ch).is_some()) {
        return Ok(Cow::Borrowed(text));
    }

    let mut clean = String::with_capacity(text.len());
    let mut substituted = 0usize;

    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => clean.push(' '),
            ch if win_ansi(ch).is_some() => clean.push(ch),
            ch => match policy {
                GlyphPolicy::Substitute => {
                    substituted += 1;
                    clean.push(REPLACEMENT);
                }
                GlyphPolicy::Fail => {
                    return Err(Error::Encoding { ch, text: text.to_string() });
                }
            },
        }
    }

    if substituted > 0 {
        warn!("substituted {substituted} unsupported character(s) in {text:?}");
    }

    Ok(Cow::Owned(clean))
}

/// encodes sanitized text for a content stream `Str`
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().filter_map(win_ansi).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_maps_to_itself() {
        assert_eq!(win_ansi('A'), Some(b'A'));
        assert_eq!(win_ansi('ñ'), Some(0xf1));
        assert_eq!(win_ansi('°'), Some(0xb0));
        assert_eq!(win_ansi('€'), Some(0x80));
        assert_eq!(win_ansi('✓'), None);
        assert_eq!(win_ansi('\u{81}'), None);
    }

    #[test]
    fn clean_text_is_borrowed() {
        let text = "Contraseña N°";

        assert!(matches!(sanitize(text, GlyphPolicy::Fail), Ok(Cow::Borrowed(_))));
    }

    #[test]
    fn substitutes_unsupported_characters() {
        let clean = sanitize("listo ✅\tok", GlyphPolicy::Substitute).unwrap();

        assert_eq!(clean, "listo ? ok");
    }

    #[test]
    fn fail_policy_reports_the_character() {
        match sanitize("café 🚀", GlyphPolicy::Fail) {
            Err(Error::Encoding { ch, text }) => {
                assert_eq!(ch, '🚀');
                assert_eq!(text, "café 🚀");
            }
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_controls_never_fail() {
        assert_eq!(sanitize("a\nb", GlyphPolicy::Fail).unwrap(), "a b");
    }

    #[test]
    fn encodes_single_bytes() {
        assert_eq!(encode("Año €"), vec![b'A', 0xf1, b'o', b' ', 0x80]);
    }
}
