//! Line breaking for styled paragraphs.

use crate::canvas::DrawOp;
use crate::fonts::{self, StandardFont};
use crate::richtext::Span;
use crate::style::{Alignment, Color, ParagraphStyle};

const UNDERLINE_OFFSET: f32 = 0.1;
const UNDERLINE_THICKNESS: f32 = 0.05;

/// Font attributes shared by a run of characters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStyle {
    pub font: StandardFont,
    pub size: f32,
    pub color: Color,
    pub underline: bool,
}

impl RunStyle {
    fn for_span(style: &ParagraphStyle, span: &Span) -> Self {
        let family = fonts::default_font_family();
        Self {
            font: family.get(style.bold || span.is_bold(), style.italic || span.is_italic()),
            size: style.font_size,
            color: span.color().unwrap_or(style.color),
            underline: span.is_underlined(),
        }
    }

    fn width(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}

/// Part of a word set in a single run style.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub style: RunStyle,
    pub width: f32,
}

/// Characters between two whitespace runs. Inline emphasis can change inside a word.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Word {
    pub fragments: Vec<Fragment>,
    pub width: f32,
}

impl Word {
    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn push_char(&mut self, ch: char, style: RunStyle) {
        let advance = style.width(ch.encode_utf8(&mut [0; 4]));
        match self.fragments.last_mut() {
            Some(last) if last.style == style => {
                last.text.push(ch);
                last.width += advance;
            }
            _ => self.fragments.push(Fragment {
                text: ch.to_string(),
                style,
                width: advance,
            }),
        }
        self.width += advance;
    }

    /// Splits a word wider than `max_width` into pieces that each fit, keeping at least
    /// one character per piece.
    fn split_to_fit(self, max_width: f32) -> Vec<Word> {
        let mut pieces = Vec::new();
        let mut current = Word::default();
        for fragment in self.fragments {
            for ch in fragment.text.chars() {
                let advance = fragment.style.width(ch.encode_utf8(&mut [0; 4]));
                if !current.is_empty() && current.width + advance > max_width {
                    pieces.push(std::mem::take(&mut current));
                }
                current.push_char(ch, fragment.style);
            }
        }
        if !current.is_empty() {
            pieces.push(current);
        }
        pieces
    }
}

enum Token {
    Word(Word),
    /// A collapsed whitespace run, with the width of one space in its run style.
    Space(f32),
    Break,
}

fn tokenize(spans: &[Span], style: &ParagraphStyle) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = Word::default();

    for span in spans {
        let run = RunStyle::for_span(style, span);
        for ch in span.text().chars() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
                if ch == '\n' {
                    tokens.push(Token::Break);
                } else if !matches!(tokens.last(), Some(Token::Space(_))) {
                    tokens.push(Token::Space(run.width(" ")));
                }
            } else {
                word.push_char(ch, run);
            }
        }
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}

/// One wrapped line of a paragraph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    /// Words with the natural gap that precedes each of them.
    pub words: Vec<(f32, Word)>,
    /// Natural width including the gaps.
    pub width: f32,
    /// Whether the line ends the paragraph or a forced line break.
    pub hard_break: bool,
}

impl Line {
    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn push(&mut self, gap: f32, word: Word) {
        let gap = if self.is_empty() { 0.0 } else { gap };
        self.width += gap + word.width;
        self.words.push((gap, word));
    }

    fn finish(mut self, hard_break: bool) -> Line {
        self.hard_break = hard_break;
        self
    }

    /// Plain text of the line, with single spaces between words.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (index, (_, word)) in self.words.iter().enumerate() {
            if index > 0 {
                text.push(' ');
            }
            for fragment in &word.fragments {
                text.push_str(&fragment.text);
            }
        }
        text
    }

    /// Draw operations for the line with its left edge at `x` and baseline at `y`.
    pub fn draw_ops(&self, x: f32, y: f32, available: f32, alignment: Alignment) -> Vec<DrawOp> {
        let slack = (available - self.width).max(0.0);
        let gaps = self.words.len().saturating_sub(1);
        let (mut cursor, extra_gap) = match alignment {
            Alignment::Left => (x, 0.0),
            Alignment::Center => (x + slack / 2.0, 0.0),
            Alignment::Right => (x + slack, 0.0),
            Alignment::Justified if !self.hard_break && gaps > 0 => (x, slack / gaps as f32),
            Alignment::Justified => (x, 0.0),
        };

        let mut ops = Vec::new();
        for (index, (gap, word)) in self.words.iter().enumerate() {
            if index > 0 {
                cursor += gap + extra_gap;
            }
            for fragment in &word.fragments {
                let style = fragment.style;
                ops.push(DrawOp::Text {
                    x: cursor,
                    y,
                    font: style.font,
                    size: style.size,
                    color: style.color,
                    text: fragment.text.clone(),
                });
                if style.underline {
                    let underline_y = y - style.size * UNDERLINE_OFFSET;
                    ops.push(DrawOp::Line {
                        from: (cursor, underline_y),
                        to: (cursor + fragment.width, underline_y),
                        width: style.size * UNDERLINE_THICKNESS,
                        color: style.color,
                    });
                }
                cursor += fragment.width;
            }
        }
        ops
    }
}

/// Greedily wraps `spans` into lines no wider than `max_width`.
///
/// Whitespace runs collapse to one space, `\n` forces a break, and words wider than
/// the line are split between characters. A paragraph without words yields no lines.
pub fn wrap_spans(spans: &[Span], style: &ParagraphStyle, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut pending_gap = 0.0;

    for token in tokenize(spans, style) {
        match token {
            Token::Space(width) => pending_gap = width,
            Token::Break => {
                lines.push(std::mem::take(&mut current).finish(true));
                pending_gap = 0.0;
            }
            Token::Word(word) => {
                if !current.is_empty() && current.width + pending_gap + word.width > max_width {
                    lines.push(std::mem::take(&mut current).finish(false));
                }
                if current.is_empty() && word.width > max_width {
                    let mut pieces = word.split_to_fit(max_width);
                    let last = pieces.pop();
                    for piece in pieces {
                        let mut line = Line::default();
                        line.push(0.0, piece);
                        lines.push(line.finish(false));
                    }
                    if let Some(last) = last {
                        current.push(0.0, last);
                    }
                } else {
                    current.push(pending_gap, word);
                }
                pending_gap = 0.0;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current.finish(true));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::parse_markup;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let style = ParagraphStyle::new(10.0);
        let word = StandardFont::Helvetica.text_width("aaaa", 10.0);
        let space = StandardFont::Helvetica.text_width(" ", 10.0);
        let spans = vec![Span::new("aaaa aaaa aaaa")];

        let lines = wrap_spans(&spans, &style, 2.0 * word + space + 0.01);
        assert_eq!(texts(&lines), vec!["aaaa aaaa", "aaaa"]);
        assert!(!lines[0].hard_break);
        assert!(lines[1].hard_break);
    }

    #[test]
    fn collapses_whitespace_and_honours_line_breaks() {
        let style = ParagraphStyle::new(11.0);
        let spans = parse_markup("**Assunto:**   Bem-vindo!\nOlá  [NOME]").unwrap();
        let lines = wrap_spans(&spans, &style, 500.0);

        assert_eq!(texts(&lines), vec!["Assunto: Bem-vindo!", "Olá [NOME]"]);
        assert!(lines[0].hard_break);
        let first = &lines[0].words[0].1.fragments[0];
        assert_eq!(first.style.font, StandardFont::HelveticaBold);
    }

    #[test]
    fn splits_words_wider_than_the_line() {
        let style = ParagraphStyle::new(10.0);
        let spans = vec![Span::new("https://tribebuild.app/criar-minha-tribo")];
        let max_width = 60.0;
        let lines = wrap_spans(&spans, &style, max_width);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.width <= max_width + 1e-3));
        let joined: String = lines.iter().map(Line::text).collect();
        assert_eq!(joined, "https://tribebuild.app/criar-minha-tribo");
    }

    #[test]
    fn empty_paragraph_has_no_lines() {
        let style = ParagraphStyle::new(10.0);
        assert!(wrap_spans(&[Span::new("   ")], &style, 100.0).is_empty());
        assert!(wrap_spans(&[], &style, 100.0).is_empty());
    }

    #[test]
    fn justification_skips_the_last_line() {
        let style = ParagraphStyle::new(10.0);
        let lines = wrap_spans(&[Span::new("um dois tres quatro cinco seis")], &style, 80.0);
        assert!(lines.len() >= 2);

        let first = lines[0].draw_ops(0.0, 0.0, 80.0, Alignment::Justified);
        let last_x = match first.last() {
            Some(DrawOp::Text { x, text, font, size, .. }) => x + font.text_width(text, *size),
            other => panic!("unexpected op {other:?}"),
        };
        assert!((last_x - 80.0).abs() < 1e-3);

        let last = lines[lines.len() - 1].draw_ops(0.0, 0.0, 80.0, Alignment::Justified);
        let plain = lines[lines.len() - 1].draw_ops(0.0, 0.0, 80.0, Alignment::Left);
        assert_eq!(last, plain);
    }

    #[test]
    fn underlined_fragments_get_a_rule() {
        let style = ParagraphStyle::new(10.0);
        let spans = parse_markup("ver __link__").unwrap();
        let lines = wrap_spans(&spans, &style, 200.0);
        let ops = lines[0].draw_ops(0.0, 100.0, 200.0, Alignment::Left);

        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[2], DrawOp::Line { .. }));
    }
}
