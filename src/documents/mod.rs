//! The three TribeBuild bonus documents.
//!
//! Each document is a fixed block sequence built on the brand style sheet and rendered
//! through the same [`DocumentBuilder`] pipeline with a [`BrandedDecorator`].

mod checklist;
mod launch_guide;
mod templates;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::builder::{DocumentBuilder, RenderReport};
use crate::decorator::BrandedDecorator;
use crate::error::DocumentError;
use crate::pdf::DocumentInfo;
use crate::style::StyleRegistry;
use crate::theme::{names, BrandTheme};
use crate::units::cm;

/// Directory the binary writes into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public/downloads";

const AUTHOR: &str = "TribeBuild";
const CREATOR: &str = concat!("bonus_pdf ", env!("CARGO_PKG_VERSION"));
const SIGNATURE: &str = "Feito com carinho pelo TribeBuild";

/// One of the bonus PDFs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BonusDocument {
    Templates,
    LaunchGuide,
    Checklist,
}

impl BonusDocument {
    /// Every bonus document, in generation order.
    pub const ALL: [BonusDocument; 3] = [
        BonusDocument::Templates,
        BonusDocument::LaunchGuide,
        BonusDocument::Checklist,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            BonusDocument::Templates => "templates-prontos-tribebuild.pdf",
            BonusDocument::LaunchGuide => "guia-lancamento-tribebuild.pdf",
            BonusDocument::Checklist => "checklist-configuracao-tribebuild.pdf",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BonusDocument::Templates => "Templates Prontos",
            BonusDocument::LaunchGuide => "Guia de Lançamento",
            BonusDocument::Checklist => "Checklist de Configuração",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            BonusDocument::Templates => "Copie, cole e personalize para seu negócio",
            BonusDocument::LaunchGuide => "Passo a passo para lançar seu app com sucesso",
            BonusDocument::Checklist => "Nada esquecido, tudo funcionando",
        }
    }

    /// Assembles the document's blocks on the brand style sheet.
    pub fn build(self, theme: &BrandTheme) -> Result<DocumentBuilder, DocumentError> {
        let info = DocumentInfo::new()
            .with_title(self.title())
            .with_author(AUTHOR)
            .with_subject(self.subject())
            .with_creator(CREATOR);
        let mut document = DocumentBuilder::new(StyleRegistry::from_theme(theme)).with_info(info);

        match self {
            BonusDocument::Templates => templates::write(&mut document)?,
            BonusDocument::LaunchGuide => launch_guide::write(&mut document, theme)?,
            BonusDocument::Checklist => checklist::write(&mut document)?,
        }
        Ok(document)
    }

    /// Builds and renders the document into `dir`.
    pub fn generate(
        self,
        dir: impl AsRef<Path>,
        theme: &BrandTheme,
    ) -> Result<RenderReport, DocumentError> {
        let path = dir.as_ref().join(self.file_name());
        let document = self.build(theme)?;
        let decorator = BrandedDecorator::new(theme, document.page_setup());
        document.render(&path, decorator)
    }
}

impl fmt::Display for BonusDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Outcome of generating one bonus document.
#[derive(Debug)]
pub struct Generated {
    pub document: BonusDocument,
    pub path: PathBuf,
    pub result: Result<RenderReport, DocumentError>,
}

/// Generates every bonus document into `dir`. A failing document does not stop the
/// remaining ones.
pub fn generate_all(dir: impl AsRef<Path>, theme: &BrandTheme) -> Vec<Generated> {
    let dir = dir.as_ref();
    BonusDocument::ALL
        .into_iter()
        .map(|document| {
            let result = document.generate(dir, theme);
            match &result {
                Ok(report) => info!("{document}: {} pages", report.page_count),
                Err(err) => error!("{document}: {err}"),
            }
            Generated {
                document,
                path: dir.join(document.file_name()),
                result,
            }
        })
        .collect()
}

/// Cover page: title block and the bonus value, followed by a page break.
fn cover(
    document: &mut DocumentBuilder,
    title: &str,
    subtitle: &str,
    value: &str,
) -> Result<(), DocumentError> {
    document.spacer(cm(3.0));
    document.paragraph(names::MAIN_TITLE, title)?;
    document.paragraph(names::SUBTITLE, subtitle)?;
    document.spacer(cm(1.0));
    document.paragraph(
        names::HIGHLIGHT,
        &format!("Valor: {value} | Seu bônus exclusivo TribeBuild"),
    )?;
    document.page_break();
    Ok(())
}

/// Closing page with a short message and the signature line.
fn closing(
    document: &mut DocumentBuilder,
    title: &str,
    subtitle: &str,
    message: &str,
) -> Result<(), DocumentError> {
    document.spacer(cm(3.0));
    document.paragraph(names::MAIN_TITLE, title)?;
    document.paragraph(names::SUBTITLE, subtitle)?;
    document.spacer(cm(1.0));
    document.paragraph(names::BODY, message)?;
    signature(document)
}

fn signature(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.spacer(cm(2.0));
    document.paragraph(names::HIGHLIGHT, SIGNATURE)?;
    Ok(())
}

/// One paragraph per item, all in the same style.
fn items(document: &mut DocumentBuilder, style: &str, entries: &[&str]) -> Result<(), DocumentError> {
    for entry in entries {
        document.paragraph(style, entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn file_names_are_fixed() {
        let files: Vec<_> = BonusDocument::ALL.iter().map(|d| d.file_name()).collect();
        assert_eq!(
            files,
            vec![
                "templates-prontos-tribebuild.pdf",
                "guia-lancamento-tribebuild.pdf",
                "checklist-configuracao-tribebuild.pdf",
            ]
        );
    }

    #[test]
    fn every_document_starts_with_a_cover() {
        let theme = BrandTheme::tribebuild();
        for document in BonusDocument::ALL {
            let builder = document.build(&theme).unwrap();
            let blocks = builder.blocks();
            assert!(matches!(blocks[0], Block::Spacer(_)), "{document}");
            assert_eq!(blocks[1].style_name(), Some(names::MAIN_TITLE), "{document}");
            assert_eq!(builder.info().title.as_deref(), Some(document.title()));
        }
    }

    #[test]
    fn every_document_lays_out_on_several_pages() {
        let theme = BrandTheme::tribebuild();
        for document in BonusDocument::ALL {
            let plan = document.build(&theme).unwrap().layout().unwrap();
            assert!(plan.page_count() >= 5, "{document}: {} pages", plan.page_count());
            assert!(!plan.bookmarks().is_empty(), "{document}");
        }
    }
}
