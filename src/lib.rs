//! Document-assembly pipeline for the TribeBuild bonus PDFs.
//!
//! A document is a flat sequence of [`Block`]s that reference named styles. The
//! [`DocumentBuilder`] resolves the styles, paginates the blocks onto fixed-size pages,
//! hands every page to a [`PageDecorator`], and writes the result as a PDF file.

pub mod builder;
pub mod canvas;
pub mod decorator;
pub mod documents;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod richtext;
pub mod style;
pub mod theme;
pub mod units;

pub use builder::{DocumentBuilder, RenderReport, RenderedPdf};
pub use canvas::{DrawOp, PageCanvas};
pub use decorator::{BrandedDecorator, NoDecoration, PageDecorator};
pub use documents::{generate_all, BonusDocument, Generated};
pub use error::DocumentError;
pub use layout::{BlockPlacement, Bookmark, LayoutPlan};
pub use model::{Block, Paragraph, TableBlock};
pub use pdf::DocumentInfo;
pub use richtext::{parse_markup, Span};
pub use style::{Alignment, Color, ParagraphStyle, StyleNotFound, StyleRegistry};
pub use theme::BrandTheme;
pub use units::{Margins, PageSetup, PageSize};
