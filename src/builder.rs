//! Document construction: collect blocks, lay them out, decorate, and write.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};

use crate::canvas::PageCanvas;
use crate::decorator::PageDecorator;
use crate::error::DocumentError;
use crate::layout::{self, BlockPlacement, LayoutPlan};
use crate::model::{Block, Paragraph, TableBlock};
use crate::pdf::{self, DocumentInfo};
use crate::style::StyleRegistry;
use crate::units::PageSetup;

/// Summary of a rendered document.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    pub page_count: usize,
    /// First and last page of every block, in block order.
    pub block_pages: Vec<BlockPlacement>,
}

/// PDF bytes together with the report describing them.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub report: RenderReport,
}

/// Ordered block sequence plus the styles and page geometry it is rendered with.
#[derive(Clone, Debug)]
pub struct DocumentBuilder {
    registry: StyleRegistry,
    setup: PageSetup,
    info: DocumentInfo,
    bookmarks: bool,
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    /// Creates an empty document using the given style sheet, on A4 pages with the
    /// default margins.
    pub fn new(registry: StyleRegistry) -> Self {
        Self {
            registry,
            setup: PageSetup::default(),
            info: DocumentInfo::default(),
            bookmarks: true,
            blocks: Vec::new(),
        }
    }

    /// Sets the page size and margins.
    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.setup = setup;
        self
    }

    /// Sets the `/Info` metadata written into the file.
    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// Enables or disables the outline generated from bookmarked styles.
    pub fn with_bookmarks(mut self, enabled: bool) -> Self {
        self.bookmarks = enabled;
        self
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn page_setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Adds a block to the end of the sequence.
    pub fn append(&mut self, block: impl Into<Block>) -> &mut Self {
        self.blocks.push(block.into());
        self
    }

    /// Adds a paragraph written in inline markup.
    pub fn paragraph(
        &mut self,
        style: impl Into<String>,
        markup: &str,
    ) -> Result<&mut Self, DocumentError> {
        let paragraph = Paragraph::from_markup(style, markup)?;
        Ok(self.append(paragraph))
    }

    pub fn spacer(&mut self, height: f32) -> &mut Self {
        self.append(Block::spacer(height))
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.append(Block::page_break())
    }

    pub fn table(&mut self, table: TableBlock) -> &mut Self {
        self.append(table)
    }

    /// Paginates the blocks without decorating or writing anything.
    pub fn layout(&self) -> Result<LayoutPlan, DocumentError> {
        let plan = layout::layout_blocks(&self.blocks, &self.registry, &self.setup)?;
        debug!(
            "laid out {} blocks on {} pages",
            self.blocks.len(),
            plan.page_count()
        );
        Ok(plan)
    }

    /// Runs layout, decorates every page once in page order, and serializes the
    /// result in memory.
    pub fn render_to_vec<D>(&self, mut decorator: D) -> Result<RenderedPdf, DocumentError>
    where
        D: PageDecorator,
    {
        let mut plan = self.layout()?;
        for page in plan.pages_mut() {
            let mut canvas = PageCanvas::new(page.number, self.setup);
            decorator.decorate_page(&mut canvas);
            page.ops.extend(canvas.into_ops());
        }

        let bytes = pdf::write_pdf(&plan, &self.setup, &self.info, self.bookmarks)?;
        let report = RenderReport {
            page_count: plan.page_count(),
            block_pages: plan.placements().to_vec(),
        };
        Ok(RenderedPdf { bytes, report })
    }

    /// Renders the document into `path`.
    ///
    /// The file is only created once the whole document has been serialized; if
    /// writing fails midway the partial file is removed again.
    pub fn render<D>(&self, path: impl AsRef<Path>, decorator: D) -> Result<RenderReport, DocumentError>
    where
        D: PageDecorator,
    {
        let path = path.as_ref();
        let rendered = self.render_to_vec(decorator)?;
        write_artifact(path, &rendered.bytes)?;
        info!(
            "wrote {} ({} pages, {} bytes)",
            path.display(),
            rendered.report.page_count,
            rendered.bytes.len()
        );
        Ok(rendered.report)
    }
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let mut file = File::create(path).map_err(|source| DocumentError::io(path, source))?;
    if let Err(source) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(err) = fs::remove_file(path) {
            warn!("failed to remove partial file {}: {err}", path.display());
        }
        return Err(DocumentError::io(path, source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::NoDecoration;
    use crate::style::ParagraphStyle;

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new(StyleRegistry::new().with_style("Body", ParagraphStyle::new(11.0)))
    }

    #[test]
    fn helpers_append_in_order() {
        let mut document = builder();
        document
            .paragraph("Body", "**Olá**")
            .unwrap()
            .spacer(10.0)
            .page_break();

        assert!(matches!(document.blocks()[0], Block::Paragraph(_)));
        assert_eq!(document.blocks()[1], Block::Spacer(10.0));
        assert_eq!(document.blocks()[2], Block::PageBreak);
    }

    #[test]
    fn malformed_markup_is_reported() {
        let mut document = builder();
        let err = document.paragraph("Body", "**sem fim").unwrap_err();
        assert!(matches!(err, DocumentError::Markup(_)));
        assert!(document.blocks().is_empty());
    }

    #[test]
    fn unknown_style_fails_render() {
        let mut document = builder();
        document.paragraph("Corpo", "texto").unwrap();
        let err = document.render_to_vec(NoDecoration).unwrap_err();
        match err {
            DocumentError::StyleNotFound(missing) => assert_eq!(missing.name, "Corpo"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn report_matches_layout() {
        let mut document = builder();
        document.paragraph("Body", "um").unwrap();
        document.page_break();
        document.paragraph("Body", "dois").unwrap();

        let rendered = document.render_to_vec(NoDecoration).unwrap();
        assert_eq!(rendered.report.page_count, 2);
        assert_eq!(rendered.report.block_pages[2].first_page, 2);
        assert!(rendered.bytes.starts_with(b"%PDF-1.7"));
    }
}
