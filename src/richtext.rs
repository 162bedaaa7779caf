//! Styled text fragments and the inline markup used to author them.
//!
//! Paragraph copy is written with a small markdown-like syntax and turned into [`Span`]s,
//! which carry the inline overrides (bold, italic, underline, colour) that are applied on
//! top of a paragraph's named style when the text is laid out.

use thiserror::Error;

use crate::style::Color;

/// A slice of text together with inline style overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
    underline: bool,
}

impl Span {
    /// Creates a new span with the provided text and no overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Colour override; `None` keeps the paragraph colour.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_underlined(&self) -> bool {
        self.underline
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(self) -> Self {
        self.with_bold(true)
    }

    /// Convenience shorthand that marks the span as italic.
    pub fn italic(self) -> Self {
        self.with_italic(true)
    }

    /// Convenience shorthand that marks the span as underlined.
    pub fn underline(self) -> Self {
        self.with_underline(true)
    }

    /// Convenience shorthand that assigns a color to the span.
    pub fn colored(self, color: Color) -> Self {
        self.with_color(Some(color))
    }
}

/// Concatenated text of a run of spans, without styling.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Malformed inline markup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at byte {index})")]
pub struct MarkupError {
    index: usize,
    message: String,
}

impl MarkupError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the input where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Underline,
    Color(Color),
}

impl Marker {
    fn closing_token(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Underline => "__",
            Marker::Color(_) => "}",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Marker::Bold => "bold span",
            Marker::Italic => "italic span",
            Marker::Underline => "underline span",
            Marker::Color(_) => "color span",
        }
    }
}

struct Parser {
    spans: Vec<Span>,
    buffer: String,
    open: Vec<(Marker, usize)>,
}

impl Parser {
    fn current_span(&self, text: String) -> Span {
        let mut span = Span::new(text);
        for (marker, _) in &self.open {
            match *marker {
                Marker::Bold => span.bold = true,
                Marker::Italic => span.italic = true,
                Marker::Underline => span.underline = true,
                Marker::Color(color) => span.color = Some(color),
            }
        }
        span
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            let span = self.current_span(text);
            self.spans.push(span);
        }
    }

    fn open(&mut self, marker: Marker, index: usize) {
        self.flush();
        self.open.push((marker, index));
    }

    /// `**` inside an italic run opens bold unless it is the tail of `***`.
    fn opens_bold_inside_italic(&self, marker: Marker, rest: &str) -> bool {
        matches!(marker, Marker::Italic)
            && rest.starts_with("**")
            && !rest.starts_with("***")
            && !self.open.iter().any(|(open, _)| matches!(open, Marker::Bold))
    }

    /// Closes the innermost marker if `rest` starts with its closing token.
    fn try_close(&mut self, rest: &str) -> Option<usize> {
        let (marker, _) = *self.open.last()?;
        let token = marker.closing_token();
        if !rest.starts_with(token) || self.opens_bold_inside_italic(marker, rest) {
            return None;
        }
        self.flush();
        self.open.pop();
        Some(token.len())
    }
}

/// Parses inline markup into spans.
///
/// - `**bold**`, `*italic*` and `__underline__` may be nested
/// - `[color=#RRGGBB]{text}` colours the enclosed text
/// - a newline forces a line break when the paragraph is laid out
/// - a backslash makes the next character literal, e.g. `\*` for an asterisk
///
/// A closing token always closes the innermost open marker, so markers must be
/// closed in the reverse order they were opened.
pub fn parse_markup(input: &str) -> Result<Vec<Span>, MarkupError> {
    let mut parser = Parser {
        spans: Vec::new(),
        buffer: String::new(),
        open: Vec::new(),
    };
    let mut index = 0;

    while let Some(ch) = input[index..].chars().next() {
        let rest = &input[index..];

        if ch == '\\' {
            let escaped = rest[1..].chars().next().unwrap_or('\\');
            parser.buffer.push(escaped);
            index += 1 + if rest.len() > 1 { escaped.len_utf8() } else { 0 };
        } else if let Some(consumed) = parser.try_close(rest) {
            index += consumed;
        } else if rest.starts_with("**") {
            parser.open(Marker::Bold, index);
            index += 2;
        } else if rest.starts_with("__") {
            parser.open(Marker::Underline, index);
            index += 2;
        } else if ch == '*' {
            parser.open(Marker::Italic, index);
            index += 1;
        } else if rest.starts_with("[color=") {
            let (color, consumed) = parse_color_directive(rest, index)?;
            parser.open(Marker::Color(color), index);
            index += consumed;
        } else if ch == '}' {
            return Err(MarkupError::new(
                index,
                "unexpected closing token `}` without matching opening `[color=...]`",
            ));
        } else {
            parser.buffer.push(ch);
            index += ch.len_utf8();
        }
    }

    if let Some(&(marker, opened_at)) = parser.open.last() {
        return Err(MarkupError::new(
            opened_at,
            format!("unterminated {}", marker.description()),
        ));
    }

    parser.flush();
    Ok(parser.spans)
}

/// Parses `[color=#RRGGBB]{` at the start of `input`, returning the colour and the
/// number of bytes consumed.
fn parse_color_directive(input: &str, index: usize) -> Result<(Color, usize), MarkupError> {
    const PREFIX: &str = "[color=";
    let after_prefix = &input[PREFIX.len()..];
    if !after_prefix.starts_with('#') {
        return Err(MarkupError::new(
            index + PREFIX.len(),
            "expected `#` followed by a hexadecimal RGB value",
        ));
    }

    let hex = after_prefix.get(1..7).ok_or_else(|| {
        MarkupError::new(
            index + PREFIX.len() + 1,
            "incomplete color specification; expected 6 hexadecimal digits",
        )
    })?;
    let color = Color::from_hex(hex).ok_or_else(|| {
        MarkupError::new(
            index + PREFIX.len() + 1,
            "invalid RGB specification; use hexadecimal digits only",
        )
    })?;

    let consumed = PREFIX.len() + 7;
    if !input[consumed..].starts_with("]{") {
        return Err(MarkupError::new(
            index + consumed,
            "expected `]{` after the color value",
        ));
    }

    Ok((color, consumed + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_text() {
        let spans = parse_markup("Olá, [NOME]!").unwrap();
        assert_eq!(spans, vec![Span::new("Olá, [NOME]!")]);
    }

    #[test]
    fn parse_nested_styles() {
        let spans = parse_markup("This is **very *cool***!").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("This is "),
                Span::new("very ").bold(),
                Span::new("cool").bold().italic(),
                Span::new("!"),
            ]
        );
    }

    #[test]
    fn parse_bold_nested_in_italic() {
        let spans = parse_markup("*a **b** c*").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("a ").italic(),
                Span::new("b").italic().bold(),
                Span::new(" c").italic(),
            ]
        );
    }

    #[test]
    fn parse_italic_followed_by_bold() {
        let spans = parse_markup("*a***b**").unwrap();
        assert_eq!(spans, vec![Span::new("a").italic(), Span::new("b").bold()]);
    }

    #[test]
    fn parse_bold_label_with_line_breaks() {
        let spans = parse_markup("**Assunto:** Bem-vindo!\nOlá").unwrap();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_bold());
        assert_eq!(spans[0].text(), "Assunto:");
        assert_eq!(spans[1].text(), " Bem-vindo!\nOlá");
        assert_eq!(plain_text(&spans), "Assunto: Bem-vindo!\nOlá");
    }

    #[test]
    fn parse_color_and_underline() {
        let spans = parse_markup("[color=#ff0000]{__Red__} text").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("Red")
                    .colored(Color::Rgb(0xff, 0, 0))
                    .underline(),
                Span::new(" text"),
            ]
        );
    }

    #[test]
    fn backslash_escapes_markers() {
        let spans = parse_markup(r"\*Parabéns, [NOME]!\* **ok**\").unwrap();
        assert_eq!(
            spans,
            vec![Span::new("*Parabéns, [NOME]!* "), Span::new("ok").bold(), Span::new("\\")]
        );
    }

    #[test]
    fn error_on_unterminated_bold() {
        let err = parse_markup("ok **oops").unwrap_err();
        assert!(err.message().contains("unterminated bold"));
        assert_eq!(err.index(), 3);
    }

    #[test]
    fn error_on_invalid_color() {
        let err = parse_markup("[color=#12FG34]{x}").unwrap_err();
        assert!(err.message().contains("invalid RGB"));
    }

    #[test]
    fn error_on_stray_brace() {
        let err = parse_markup("a } b").unwrap_err();
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn error_on_crossed_markers() {
        assert!(parse_markup("**a *b** c*").is_err());
    }
}
