//! Named paragraph styles and the registry that resolves them at layout time.

use std::collections::BTreeMap;

use thiserror::Error;

/// An RGB or greyscale fill colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Greyscale(u8),
}

impl Color {
    pub const BLACK: Color = Color::Greyscale(0);
    pub const WHITE: Color = Color::Greyscale(255);

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Colour components scaled to `0.0..=1.0`, as written by `rg`/`RG` operators.
    pub fn components(self) -> Vec<f32> {
        let scale = |value: u8| f32::from(value) / 255.0;
        match self {
            Color::Rgb(r, g, b) => vec![scale(r), scale(g), scale(b)],
            Color::Greyscale(g) => vec![scale(g)],
        }
    }
}

/// Horizontal placement of the lines of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    /// Lines are stretched to the full width, except the last one.
    Justified,
}

/// Rendering attributes of a named style.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
    pub bold: bool,
    pub italic: bool,
    pub left_indent: f32,
    /// Paragraphs with this style open an entry in the document outline.
    pub bookmark: bool,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl ParagraphStyle {
    /// Plain black text with a leading of 1.2 times the font size.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            leading: font_size * 1.2,
            color: Color::BLACK,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
            bold: false,
            italic: false,
            left_indent: 0.0,
            bookmark: false,
        }
    }

    /// Changes the font size, keeping the 1.2 leading ratio.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self.leading = font_size * 1.2;
        self
    }

    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }

    pub fn with_space_after(mut self, space: f32) -> Self {
        self.space_after = space;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_left_indent(mut self, indent: f32) -> Self {
        self.left_indent = indent;
        self
    }

    pub fn with_bookmark(mut self, bookmark: bool) -> Self {
        self.bookmark = bookmark;
        self
    }
}

/// Returned when a block references a style that was never registered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("style `{name}` is not registered")]
pub struct StyleNotFound {
    pub name: String,
}

/// Maps style names to their attributes.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<String, ParagraphStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a style, replacing any previous style with the same name.
    pub fn register(&mut self, name: impl Into<String>, style: ParagraphStyle) {
        self.styles.insert(name.into(), style);
    }

    /// Chaining variant of [`register`](Self::register).
    pub fn with_style(mut self, name: impl Into<String>, style: ParagraphStyle) -> Self {
        self.register(name, style);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<&ParagraphStyle, StyleNotFound> {
        self.styles.get(name).ok_or_else(|| StyleNotFound {
            name: name.to_owned(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_registered_attributes() {
        let body = ParagraphStyle::new(11.0)
            .with_leading(16.0)
            .with_alignment(Alignment::Justified)
            .with_color(Color::Rgb(15, 23, 42));
        let mut registry = StyleRegistry::new();
        registry.register("Body", body.clone());

        assert_eq!(registry.resolve("Body"), Ok(&body));
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let registry = StyleRegistry::new().with_style("Body", ParagraphStyle::new(11.0));
        let err = registry.resolve("body").unwrap_err();
        assert_eq!(err.name, "body");
        assert_eq!(err.to_string(), "style `body` is not registered");
    }

    #[test]
    fn register_overwrites_previous_style() {
        let registry = StyleRegistry::new()
            .with_style("Tip", ParagraphStyle::new(10.0))
            .with_style("Tip", ParagraphStyle::new(12.0).italic());

        assert_eq!(registry.len(), 1);
        let tip = registry.resolve("Tip").unwrap();
        assert_eq!(tip.font_size, 12.0);
        assert!(tip.italic);
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Color::from_hex("#2563EB"), Some(Color::Rgb(0x25, 0x63, 0xeb)));
        assert_eq!(Color::from_hex("ff6b6b"), Some(Color::Rgb(0xff, 0x6b, 0x6b)));
        assert_eq!(Color::from_hex("#12FG34"), None);
        assert_eq!(Color::from_hex("#fff"), None);
    }

    #[test]
    fn colour_components_are_normalised() {
        assert_eq!(Color::Rgb(255, 0, 51).components(), vec![1.0, 0.0, 0.2]);
        assert_eq!(Color::WHITE.components(), vec![1.0]);
    }
}
