//! Pagination of a block sequence onto fixed-size pages.
//!
//! Layout is a single linear pass over the blocks with a running cursor in the content
//! area of the current page. Paragraphs break between wrapped lines, spacers and tables
//! move to the next page wholesale, and a table taller than a whole page starts on a
//! fresh page and is split between rows.

mod text;

use log::debug;

use crate::canvas::DrawOp;
use crate::model::{Block, Paragraph, TableBlock};
use crate::richtext;
use crate::style::{ParagraphStyle, StyleNotFound, StyleRegistry};
use crate::units::PageSetup;

pub use text::{wrap_spans, Fragment, Line, RunStyle, Word};

/// Tolerance for floating point comparisons against the page bottom.
const EPSILON: f32 = 1e-3;

/// Positioned content of one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// 1-based page number.
    pub number: usize,
    pub ops: Vec<DrawOp>,
}

/// Pages a block ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPlacement {
    /// Index of the block in the document sequence.
    pub block: usize,
    pub first_page: usize,
    pub last_page: usize,
}

/// Outline entry pointing at the page a bookmarked paragraph starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub page: usize,
}

/// Result of laying out a document: the pages plus the block-to-page map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPlan {
    pages: Vec<PageLayout>,
    placements: Vec<BlockPlacement>,
    bookmarks: Vec<Bookmark>,
}

impl LayoutPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [PageLayout] {
        &mut self.pages
    }

    /// One entry per block, in block order.
    pub fn placements(&self) -> &[BlockPlacement] {
        &self.placements
    }

    pub fn placement(&self, block: usize) -> Option<&BlockPlacement> {
        self.placements.get(block)
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}

/// Lays out `blocks` on pages described by `setup`.
///
/// Every style name is resolved against `registry`; the first unknown name aborts the
/// layout. An empty sequence still produces one page.
pub fn layout_blocks(
    blocks: &[Block],
    registry: &StyleRegistry,
    setup: &PageSetup,
) -> Result<LayoutPlan, StyleNotFound> {
    let mut paginator = Paginator::new(*setup);
    let mut placements = Vec::with_capacity(blocks.len());
    let mut bookmarks = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        let (first_page, last_page) = match block {
            Block::Paragraph(paragraph) => {
                let style = registry.resolve(paragraph.style())?;
                let pages = paginator.paragraph(paragraph, style);
                if style.bookmark {
                    bookmarks.push(Bookmark {
                        title: bookmark_title(paragraph),
                        page: pages.0,
                    });
                }
                pages
            }
            Block::Spacer(height) => paginator.spacer(*height),
            Block::PageBreak => paginator.page_break(),
            Block::Table(table) => {
                let style = registry.resolve(table.style())?;
                paginator.table(table, style)
            }
        };
        if first_page != last_page {
            debug!("block {index} spans pages {first_page}-{last_page}");
        }
        placements.push(BlockPlacement {
            block: index,
            first_page,
            last_page,
        });
    }

    Ok(LayoutPlan {
        pages: paginator.finish(),
        placements,
        bookmarks,
    })
}

fn bookmark_title(paragraph: &Paragraph) -> String {
    richtext::plain_text(paragraph.spans())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

struct Paginator {
    setup: PageSetup,
    pages: Vec<PageLayout>,
    /// Vertical space consumed on the current page, from the top of the content area.
    cursor: f32,
    /// Whether any block has been placed on the current page.
    has_content: bool,
}

impl Paginator {
    fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            pages: vec![PageLayout {
                number: 1,
                ops: Vec::new(),
            }],
            cursor: 0.0,
            has_content: false,
        }
    }

    fn page_number(&self) -> usize {
        self.pages.len()
    }

    fn content_height(&self) -> f32 {
        self.setup.content_height()
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.content_height() + EPSILON
    }

    /// PDF y coordinate of the cursor.
    fn top(&self) -> f32 {
        self.setup.size.height - self.setup.margins.top - self.cursor
    }

    fn left(&self) -> f32 {
        self.setup.margins.left
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("starting page {number}");
        self.pages.push(PageLayout {
            number,
            ops: Vec::new(),
        });
        self.cursor = 0.0;
        self.has_content = false;
    }

    /// Drops a trailing page that a final page break opened but nothing filled.
    fn finish(mut self) -> Vec<PageLayout> {
        if !self.has_content && self.pages.len() > 1 {
            self.pages.pop();
        }
        self.pages
    }

    fn push_ops(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.extend(ops);
        }
    }

    /// Moves to a new page unless `height` still fits or the page is untouched.
    fn ensure_room(&mut self, height: f32) {
        if self.has_content && !self.fits(height) {
            self.new_page();
        }
    }

    fn space_before(&mut self, space: f32) {
        if !self.has_content {
            return;
        }
        if self.fits(space) {
            self.cursor += space;
        } else {
            self.new_page();
        }
    }

    fn space_after(&mut self, space: f32) {
        self.cursor = (self.cursor + space).min(self.content_height());
    }

    fn paragraph(&mut self, paragraph: &Paragraph, style: &ParagraphStyle) -> (usize, usize) {
        self.space_before(style.space_before);

        let width = (self.setup.content_width() - style.left_indent).max(0.0);
        let lines = wrap_spans(paragraph.spans(), style, width);
        let baseline = baseline_offset(style);

        let mut first_page = None;
        for line in &lines {
            self.ensure_room(style.leading);
            first_page.get_or_insert(self.page_number());

            let x = self.left() + style.left_indent;
            let y = self.top() - baseline;
            let ops = line.draw_ops(x, y, width, style.alignment);
            self.push_ops(ops);
            self.cursor += style.leading;
            self.has_content = true;
        }
        let first_page = first_page.unwrap_or_else(|| self.page_number());

        self.space_after(style.space_after);
        self.has_content = true;
        (first_page, self.page_number())
    }

    fn spacer(&mut self, height: f32) -> (usize, usize) {
        let height = height.clamp(0.0, self.content_height());
        self.ensure_room(height);
        self.cursor += height;
        self.has_content = true;
        let page = self.page_number();
        (page, page)
    }

    fn page_break(&mut self) -> (usize, usize) {
        let page = self.page_number();
        if self.has_content {
            self.new_page();
        } else {
            debug!("ignoring page break on empty page {page}");
        }
        (page, page)
    }

    fn table(&mut self, table: &TableBlock, style: &ParagraphStyle) -> (usize, usize) {
        self.space_before(style.space_before);

        let content_width = self.setup.content_width();
        let columns = column_widths(table, content_width);
        let mut header_style = style.clone();
        header_style.bold = true;

        let rows: Vec<TableRow> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let cell_style = if index == 0 && table.has_header() {
                    &header_style
                } else {
                    style
                };
                TableRow::wrap(cells, cell_style, &columns, table.padding())
            })
            .collect();

        let total: f32 = rows.iter().map(|row| row.height).sum();
        self.ensure_room(total);
        let first_page = self.page_number();

        for (index, row) in rows.iter().enumerate() {
            self.ensure_room(row.height);
            let fill = if index == 0 && table.has_header() {
                table.header_fill()
            } else {
                None
            };
            let ops = row.draw_ops(self.left(), self.top(), &columns, table, fill);
            self.push_ops(ops);
            self.cursor += row.height;
            self.has_content = true;
        }

        self.space_after(style.space_after);
        self.has_content = true;
        (first_page, self.page_number())
    }
}

/// Distance from the top of a line box to its baseline.
fn baseline_offset(style: &ParagraphStyle) -> f32 {
    let font = crate::fonts::default_font_family().get(style.bold, style.italic);
    style.leading - font.descent(style.font_size).abs()
}

/// Column widths in points. Relative widths are scaled to the content width; tables
/// without them, or with a mismatched count, get equal columns.
fn column_widths(table: &TableBlock, content_width: f32) -> Vec<f32> {
    let count = table.column_count();
    if count == 0 {
        return Vec::new();
    }
    match table.column_widths() {
        Some(relative) if relative.len() == count && relative.iter().sum::<f32>() > 0.0 => {
            let total: f32 = relative.iter().sum();
            relative
                .iter()
                .map(|width| width / total * content_width)
                .collect()
        }
        _ => vec![content_width / count as f32; count],
    }
}

struct TableRow {
    cells: Vec<Vec<Line>>,
    style: ParagraphStyle,
    height: f32,
}

impl TableRow {
    fn wrap(
        cells: &[Vec<richtext::Span>],
        style: &ParagraphStyle,
        columns: &[f32],
        padding: f32,
    ) -> Self {
        let cells: Vec<Vec<Line>> = cells
            .iter()
            .zip(columns)
            .map(|(spans, width)| wrap_spans(spans, style, (width - 2.0 * padding).max(0.0)))
            .collect();
        let tallest = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        Self {
            cells,
            style: style.clone(),
            height: tallest as f32 * style.leading + 2.0 * padding,
        }
    }

    fn draw_ops(
        &self,
        left: f32,
        top: f32,
        columns: &[f32],
        table: &TableBlock,
        fill: Option<crate::style::Color>,
    ) -> Vec<DrawOp> {
        let width: f32 = columns.iter().sum();
        let bottom = top - self.height;
        let padding = table.padding();
        let mut ops = Vec::new();

        if let Some(fill) = fill {
            ops.push(DrawOp::Rect {
                x: left,
                y: bottom,
                width,
                height: self.height,
                fill,
            });
        }

        let baseline = baseline_offset(&self.style);
        let mut x = left;
        for (lines, column) in self.cells.iter().zip(columns) {
            let inner = (column - 2.0 * padding).max(0.0);
            for (index, line) in lines.iter().enumerate() {
                let y = top - padding - index as f32 * self.style.leading - baseline;
                ops.extend(line.draw_ops(x + padding, y, inner, self.style.alignment));
            }
            x += column;
        }

        let grid = |from: (f32, f32), to: (f32, f32)| DrawOp::Line {
            from,
            to,
            width: table.grid_width(),
            color: table.grid_color(),
        };
        if table.grid_width() > 0.0 {
            ops.push(grid((left, top), (left + width, top)));
            ops.push(grid((left, bottom), (left + width, bottom)));
            let mut x = left;
            ops.push(grid((x, top), (x, bottom)));
            for column in columns {
                x += column;
                ops.push(grid((x, top), (x, bottom)));
            }
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::Span;
    use crate::units::{Margins, PageSize};

    fn registry() -> StyleRegistry {
        StyleRegistry::new()
            .with_style("Body", ParagraphStyle::new(10.0).with_leading(12.0))
            .with_style("H1", ParagraphStyle::new(20.0).with_bookmark(true))
    }

    /// 100pt of content height, 12pt leading: eight lines per page.
    fn small_page() -> PageSetup {
        PageSetup::new(PageSize::new(200.0, 140.0), Margins::all(20.0))
    }

    fn lines(count: usize) -> Block {
        let text = vec!["linha"; count].join("\n");
        Block::text("Body", text)
    }

    #[test]
    fn empty_document_has_one_page() {
        let plan = layout_blocks(&[], &registry(), &small_page()).unwrap();
        assert_eq!(plan.page_count(), 1);
        assert!(plan.placements().is_empty());
    }

    #[test]
    fn paragraph_breaks_between_lines() {
        let plan = layout_blocks(&[lines(12)], &registry(), &small_page()).unwrap();
        assert_eq!(plan.page_count(), 2);
        assert_eq!(
            plan.placement(0),
            Some(&BlockPlacement {
                block: 0,
                first_page: 1,
                last_page: 2
            })
        );
        let page_two_text = plan.pages()[1]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count();
        assert_eq!(page_two_text, 4);
    }

    #[test]
    fn page_break_on_untouched_page_adds_no_blank_page() {
        let blocks = [Block::page_break(), lines(1), Block::page_break(), Block::page_break()];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.placement(1).map(|p| p.first_page), Some(1));
    }

    #[test]
    fn block_after_page_break_starts_on_next_page() {
        let blocks = [lines(1), Block::page_break(), lines(1)];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();
        assert_eq!(plan.page_count(), 2);
        assert_eq!(plan.placement(2).map(|p| p.first_page), Some(2));
    }

    #[test]
    fn spacer_moves_wholesale_and_is_clamped() {
        let blocks = [lines(7), Block::spacer(30.0), Block::spacer(10_000.0)];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();
        assert_eq!(plan.placement(1).map(|p| p.first_page), Some(2));
        assert_eq!(plan.placement(2).map(|p| p.first_page), Some(3));
        assert_eq!(plan.page_count(), 3);
    }

    #[test]
    fn space_before_is_dropped_at_page_top() {
        let registry = registry().with_style(
            "Spaced",
            ParagraphStyle::new(10.0).with_leading(12.0).with_space_before(50.0),
        );
        let plan = layout_blocks(&[Block::text("Spaced", "topo")], &registry, &small_page()).unwrap();
        match &plan.pages()[0].ops[0] {
            DrawOp::Text { y, .. } => {
                let expected = 140.0 - 20.0 - (12.0 - 2.07);
                assert!((y - expected).abs() < 1e-3, "baseline at {y}");
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn unknown_style_aborts_layout() {
        let err = layout_blocks(&[Block::text("Missing", "x")], &registry(), &small_page())
            .unwrap_err();
        assert_eq!(err.name, "Missing");
    }

    #[test]
    fn bookmarks_record_start_page() {
        let blocks = [
            Block::text("H1", "Etapa  1"),
            Block::page_break(),
            Block::paragraph("H1", vec![Span::new("Etapa "), Span::new("2").bold()]),
        ];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();
        assert_eq!(
            plan.bookmarks(),
            &[
                Bookmark {
                    title: "Etapa 1".into(),
                    page: 1
                },
                Bookmark {
                    title: "Etapa 2".into(),
                    page: 2
                },
            ]
        );
    }

    #[test]
    fn table_moves_to_next_page_when_it_does_not_fit() {
        let table = TableBlock::new("Body")
            .with_padding(4.0)
            .with_text_row(["Etapa", "Tempo"])
            .with_text_row(["Preparação", "1 dia"]);
        // Each row is 12 + 8 = 20pt tall.
        let blocks = [lines(6), Block::from(table)];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();
        assert_eq!(plan.placement(1).map(|p| (p.first_page, p.last_page)), Some((2, 2)));
    }

    #[test]
    fn tall_table_splits_between_rows() {
        let mut table = TableBlock::new("Body").with_header(Some(crate::style::Color::WHITE));
        for row in 0..8 {
            table = table.with_text_row([format!("item {row}"), "ok".to_owned()]);
        }
        let blocks = [lines(1), Block::from(table)];
        let plan = layout_blocks(&blocks, &registry(), &small_page()).unwrap();

        // 8 rows of 20pt on 100pt pages: five on page 2, three on page 3.
        assert_eq!(plan.placement(1).map(|p| (p.first_page, p.last_page)), Some((2, 3)));
        assert!(matches!(plan.pages()[1].ops[0], DrawOp::Rect { .. }));
    }

    #[test]
    fn relative_column_widths_are_scaled() {
        let table = TableBlock::new("Body")
            .with_text_row(["a", "b"])
            .with_column_widths(vec![1.0, 3.0]);
        assert_eq!(column_widths(&table, 200.0), vec![50.0, 150.0]);

        let mismatched = table.with_column_widths(vec![1.0]);
        assert_eq!(column_widths(&mismatched, 200.0), vec![100.0, 100.0]);
    }
}
