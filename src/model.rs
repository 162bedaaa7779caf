//! Content blocks that make up a document's flowable sequence.
//!
//! Blocks only reference styles by name; the names are resolved against the
//! [`StyleRegistry`](crate::style::StyleRegistry) when the document is laid out, so a
//! sequence can be assembled before (or independently of) the style sheet.

use crate::richtext::{self, MarkupError, Span};
use crate::style::Color;

/// Styled paragraph content.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    style: String,
    spans: Vec<Span>,
}

impl Paragraph {
    pub fn new(style: impl Into<String>, spans: impl Into<Vec<Span>>) -> Self {
        Self {
            style: style.into(),
            spans: spans.into(),
        }
    }

    /// Builds a paragraph from inline markup, see [`richtext::parse_markup`].
    pub fn from_markup(style: impl Into<String>, markup: &str) -> Result<Self, MarkupError> {
        Ok(Self::new(style, richtext::parse_markup(markup)?))
    }

    /// Name of the style the paragraph is rendered with.
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// Grid of styled cells. The first row can be rendered as a header.
#[derive(Clone, Debug, PartialEq)]
pub struct TableBlock {
    style: String,
    rows: Vec<Vec<Vec<Span>>>,
    column_widths: Option<Vec<f32>>,
    header: bool,
    header_fill: Option<Color>,
    grid_color: Color,
    grid_width: f32,
    padding: f32,
}

impl TableBlock {
    /// Creates an empty table whose cell text uses `style`.
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            rows: Vec::new(),
            column_widths: None,
            header: false,
            header_fill: None,
            grid_color: Color::Greyscale(160),
            grid_width: 0.5,
            padding: 4.0,
        }
    }

    /// Appends a row of cells.
    pub fn with_row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<Span>>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a row of unstyled text cells.
    pub fn with_text_row<I, S>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_row(cells.into_iter().map(|text| vec![Span::new(text)]))
    }

    /// Relative column widths; they are scaled to the available width.
    pub fn with_column_widths(mut self, widths: impl Into<Vec<f32>>) -> Self {
        self.column_widths = Some(widths.into());
        self
    }

    /// Renders the first row in bold, optionally over a filled background.
    pub fn with_header(mut self, fill: Option<Color>) -> Self {
        self.header = true;
        self.header_fill = fill;
        self
    }

    pub fn with_grid(mut self, color: Color, width: f32) -> Self {
        self.grid_color = color;
        self.grid_width = width;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn rows(&self) -> &[Vec<Vec<Span>>] {
        &self.rows
    }

    /// Number of columns: the length of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn column_widths(&self) -> Option<&[f32]> {
        self.column_widths.as_deref()
    }

    pub fn has_header(&self) -> bool {
        self.header
    }

    pub fn header_fill(&self) -> Option<Color> {
        self.header_fill
    }

    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    pub fn grid_width(&self) -> f32 {
        self.grid_width
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// Individual content blocks, laid out in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(Paragraph),
    /// Vertical gap of a fixed height, in points.
    Spacer(f32),
    /// Explicit page break request.
    PageBreak,
    /// Styled grid of cells.
    Table(TableBlock),
}

impl Block {
    /// Convenience helper for building a paragraph block from spans.
    pub fn paragraph(style: impl Into<String>, spans: impl Into<Vec<Span>>) -> Self {
        Self::Paragraph(Paragraph::new(style, spans))
    }

    /// Convenience helper for building a paragraph block from a single unstyled span.
    pub fn text(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self::paragraph(style, vec![Span::new(text)])
    }

    pub fn spacer(height: f32) -> Self {
        Self::Spacer(height)
    }

    /// Convenience helper that yields an explicit page break block.
    pub fn page_break() -> Self {
        Self::PageBreak
    }

    /// Name of the style the block references, if any.
    pub fn style_name(&self) -> Option<&str> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph.style()),
            Block::Table(table) => Some(table.style()),
            Block::Spacer(_) | Block::PageBreak => None,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<TableBlock> for Block {
    fn from(table: TableBlock) -> Self {
        Block::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_from_markup_keeps_style_name() {
        let paragraph = Paragraph::from_markup("Body", "**Garantia:** 7 dias").unwrap();
        assert_eq!(paragraph.style(), "Body");
        assert_eq!(paragraph.spans().len(), 2);
        assert!(paragraph.spans()[0].is_bold());
    }

    #[test]
    fn style_name_is_reported_per_variant() {
        assert_eq!(Block::text("H1", "Etapa").style_name(), Some("H1"));
        assert_eq!(Block::from(TableBlock::new("Table")).style_name(), Some("Table"));
        assert_eq!(Block::spacer(10.0).style_name(), None);
        assert_eq!(Block::page_break().style_name(), None);
    }

    #[test]
    fn table_column_count_uses_longest_row() {
        let table = TableBlock::new("Table")
            .with_text_row(["Etapa", "Dia"])
            .with_text_row(["Preparação", "1", "2-3 horas"]);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows()[1][2], vec![Span::new("2-3 horas")]);
    }
}
