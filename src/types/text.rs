
/// Greedy word wrap of a paragraph into `Line`s no wider than a given width
/// ```text
/// Example
/// let block = TextBlock::wrap(text, max_width, |word| style.text_width(word));
/// for line in &block.lines {
///     println!("{}", line.text());
/// }
/// ```
#[derive(Debug,Default)]
pub struct TextBlock<'a> {
    pub lines: Vec<Line<'a>>,
}

impl<'a> TextBlock<'a> {
    /// - hard line breaks are kept, a blank input line becomes an empty `Line`
    /// - runs of spaces and tabs collapse to a single space, no-break spaces are kept
    /// - a line breaks at the last space that keeps it within `max_width`
    /// - a word wider than `max_width` on its own is split between characters
    pub fn wrap<F>(text: &'a str, max_width: f32, measure: F) -> Self
    where
        F: Fn(&str) -> f32,
    {
        let mut block = TextBlock::default();
        let space = measure(" ");
        let text = text.strip_suffix('\n').unwrap_or(text);

        for paragraph in text.split('\n') {
            let mut line = Line::default();

            // only ASCII whitespace breaks, a no-break space binds its neighbours
            let tokens = paragraph
                .split(|ch: char| ch.is_ascii_whitespace())
                .filter(|token| !token.is_empty());

            for token in tokens {
                let width = measure(token);

                if !line.body.is_empty() {
                    if line.width + space + width <= max_width {
                        line.push(token, width, space);
                        continue;
                    }

                    block.lines.push(std::mem::take(&mut line));
                }

                if width <= max_width {
                    line.push(token, width, space);
                    continue;
                }

                let mut pieces = split_token(token, max_width, &measure);

                // the last piece starts the next line so following words can join it
                if let Some((tail, tail_width)) = pieces.pop() {
                    for (piece, piece_width) in pieces {
                        let mut full = Line::default();
                        full.push(piece, piece_width, space);
                        block.lines.push(full);
                    }

                    line.push(tail, tail_width, space);
                }
            }

            block.lines.push(line);
        }

        block
    }

    /// wrapped lines as strings
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }
}

/// splits a single over-long token, every piece holds at least one character
fn split_token<'t, F>(token: &'t str, max_width: f32, measure: &F) -> Vec<(&'t str, f32)>
where
    F: Fn(&str) -> f32,
{
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for (index, ch) in token.char_indices() {
        let next = index + ch.len_utf8();

        if end > start && measure(&token[start..next]) > max_width {
            let piece = &token[start..end];
            pieces.push((piece, measure(piece)));
            start = end;
        }

        end = next;
    }

    if start < token.len() {
        let piece = &token[start..];
        pieces.push((piece, measure(piece)));
    }

    pieces
}

/// Wrapper for `Word` objects that fit the available width
#[derive(Debug,Default)]
pub struct Line<'a> {
    pub body: Vec<Word<'a>>,
    /// width including the spaces between words
    pub width: f32,
}

impl<'a> Line<'a> {
    fn push(&mut self, text: &'a str, width: f32, space: f32) {
        if !self.body.is_empty() {
            self.width += space;
        }

        self.width += width;
        self.body.push(Word { text, width });
    }

    /// words joined by single spaces
    pub fn text(&self) -> String {
        self.body
            .iter()
            .map(|word| word.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug)]
pub struct Word<'a> {
    pub text: &'a str,
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    // one unit per character keeps the arithmetic obvious
    fn chars(text: &str) -> f32 {
        text.chars().count() as f32
    }

    #[test]
    fn breaks_at_last_fitting_space() {
        let block = TextBlock::wrap("the quick brown fox jumps", 10.0, chars);

        assert_eq!(block.texts(), vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn lines_never_exceed_width() {
        let text = "Sistema de Registro de Votos 2025: instalación, configuración, optimizaciones";
        let block = TextBlock::wrap(text, 18.0, chars);

        for line in &block.lines {
            assert!(line.width <= 18.0, "{:?} is {} wide", line.text(), line.width);
            assert_eq!(line.width, chars(&line.text()));
        }
    }

    #[test]
    fn rejoining_lines_normalizes_whitespace() {
        let text = "  Incluye:   instalación,\tconfiguración,  optimizaciones y   soporte.  ";
        let block = TextBlock::wrap(text, 14.0, chars);
        let rejoined = block.texts().join(" ");
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

        assert_eq!(rejoined, normalized);
    }

    #[test]
    fn splits_overlong_tokens_mid_word() {
        let block = TextBlock::wrap("ab abcdefghij xy", 4.0, chars);

        assert_eq!(block.texts(), vec!["ab", "abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn tail_of_split_token_accepts_next_word() {
        let block = TextBlock::wrap("abcdefg h", 4.0, chars);

        assert_eq!(block.texts(), vec!["abcd", "efg", "h"]);
        let block = TextBlock::wrap("abcdef g", 4.0, chars);
        assert_eq!(block.texts(), vec!["abcd", "ef g"]);
    }

    #[test]
    fn keeps_hard_breaks_and_blank_lines() {
        let block = TextBlock::wrap("Versión: 2025\n\nAutor: Equipo\n", 40.0, chars);

        assert_eq!(block.texts(), vec!["Versión: 2025", "", "Autor: Equipo"]);
        assert!(block.lines[1].is_empty());
    }

    #[test]
    fn carriage_returns_are_whitespace() {
        let block = TextBlock::wrap("uno\r\ndos\r\n", 40.0, chars);

        assert_eq!(block.texts(), vec!["uno", "dos"]);
    }

    #[test]
    fn no_break_space_keeps_words_together() {
        let block = TextBlock::wrap("N°\u{a0}1 abc", 40.0, chars);

        assert_eq!(block.texts(), vec!["N°\u{a0}1 abc"]);

        let block = TextBlock::wrap("abc N°\u{a0}1", 5.0, chars);

        assert_eq!(block.texts(), vec!["abc", "N°\u{a0}1"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        let block = TextBlock::wrap("", 10.0, chars);

        assert_eq!(block.lines.len(), 1);
        assert!(block.lines[0].is_empty());
    }
}
