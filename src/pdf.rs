//! Serialization of a [`LayoutPlan`] into PDF bytes with `lopdf`.
//!
//! Every page gets one content stream built from its draw operations. The four
//! Helvetica faces are referenced as standard Type 1 fonts with `WinAnsiEncoding`, so
//! nothing is embedded. Nothing time- or randomness-dependent is written, which keeps the
//! output byte-identical across runs.

use std::collections::BTreeSet;

use log::warn;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::canvas::DrawOp;
use crate::error::DocumentError;
use crate::fonts::{self, StandardFont};
use crate::layout::{Bookmark, LayoutPlan};
use crate::style::Color;
use crate::units::PageSetup;

const PDF_VERSION: &str = "1.7";

/// Optional `/Info` dictionary entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.creator.is_none()
    }

    fn to_dictionary(&self) -> Dictionary {
        let mut dictionary = Dictionary::new();
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                dictionary.set(key, text_string(value));
            }
        }
        dictionary
    }
}

/// Writes the laid-out pages as a complete PDF file.
///
/// `bookmarks` controls whether the plan's bookmarks are written as a flat outline.
pub fn write_pdf(
    plan: &LayoutPlan,
    setup: &PageSetup,
    info: &DocumentInfo,
    bookmarks: bool,
) -> Result<Vec<u8>, DocumentError> {
    let mut document = Document::with_version(PDF_VERSION);
    let pages_id = document.new_object_id();

    let mut font_resources = Dictionary::new();
    for font in StandardFont::ALL {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        font_resources.set(font.resource_name(), font_id);
    }
    let resources_id = document.add_object(dictionary! {
        "Font" => font_resources,
    });

    let mut substituted = BTreeSet::new();
    let mut page_ids = Vec::with_capacity(plan.page_count());
    for page in plan.pages() {
        let content = Content {
            operations: content_operations(&page.ops, &mut substituted),
        };
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }
    for ch in &substituted {
        warn!(
            "character {ch:?} (U+{:04X}) cannot be encoded in WinAnsiEncoding; replaced with `?`",
            u32::from(*ch)
        );
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
        "Count" => Object::Integer(page_ids.len() as i64),
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            setup.size.width.into(),
            setup.size.height.into(),
        ],
    };
    document.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if bookmarks && !plan.bookmarks().is_empty() {
        let outlines_id = write_outlines(&mut document, plan.bookmarks(), &page_ids);
        catalog.set("Outlines", outlines_id);
        catalog.set("PageMode", "UseOutlines");
    }
    let catalog_id = document.add_object(catalog);
    document.trailer.set("Root", catalog_id);

    if !info.is_empty() {
        let info_id = document.add_object(info.to_dictionary());
        document.trailer.set("Info", info_id);
    }

    document.compress();

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

fn content_operations(ops: &[DrawOp], substituted: &mut BTreeSet<char>) -> Vec<Operation> {
    let mut operations = Vec::new();
    for op in ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                let bytes = fonts::encode_win_ansi(text, substituted);
                if bytes.is_empty() {
                    continue;
                }
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![Object::Name(font.resource_name().into()), (*size).into()],
                ));
                operations.push(color_operation(*color, false));
                operations.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(bytes, StringFormat::Hexadecimal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                operations.push(color_operation(*color, true));
                operations.push(Operation::new("w", vec![(*width).into()]));
                operations.push(Operation::new("m", vec![from.0.into(), from.1.into()]));
                operations.push(Operation::new("l", vec![to.0.into(), to.1.into()]));
                operations.push(Operation::new("S", vec![]));
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                operations.push(color_operation(*fill, false));
                operations.push(Operation::new(
                    "re",
                    vec![(*x).into(), (*y).into(), (*width).into(), (*height).into()],
                ));
                operations.push(Operation::new("f", vec![]));
            }
        }
    }
    operations
}

fn color_operation(color: Color, stroke: bool) -> Operation {
    let operator = match (color, stroke) {
        (Color::Rgb(..), false) => "rg",
        (Color::Rgb(..), true) => "RG",
        (Color::Greyscale(_), false) => "g",
        (Color::Greyscale(_), true) => "G",
    };
    let operands = color.components().into_iter().map(Object::from).collect();
    Operation::new(operator, operands)
}

/// Writes a flat outline with one `/Dest [page /Fit]` entry per bookmark and returns the
/// id of the outline root.
fn write_outlines(document: &mut Document, bookmarks: &[Bookmark], page_ids: &[ObjectId]) -> ObjectId {
    let outlines_id = document.new_object_id();
    let entries: Vec<(ObjectId, &Bookmark, ObjectId)> = bookmarks
        .iter()
        .filter_map(|bookmark| {
            let page_id = page_ids.get(bookmark.page.checked_sub(1)?)?;
            Some((document.new_object_id(), bookmark, *page_id))
        })
        .collect();

    for (index, (entry_id, bookmark, page_id)) in entries.iter().enumerate() {
        let mut dictionary = dictionary! {
            "Title" => text_string(&bookmark.title),
            "Parent" => outlines_id,
            "Dest" => vec![Object::Reference(*page_id), Object::Name(b"Fit".to_vec())],
        };
        if index > 0 {
            dictionary.set("Prev", Object::Reference(entries[index - 1].0));
        }
        if let Some(next) = entries.get(index + 1) {
            dictionary.set("Next", Object::Reference(next.0));
        }
        document
            .objects
            .insert(*entry_id, Object::Dictionary(dictionary));
    }

    let mut root = dictionary! {
        "Type" => "Outlines",
        "Count" => Object::Integer(entries.len() as i64),
    };
    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        root.set("First", Object::Reference(first.0));
        root.set("Last", Object::Reference(last.0));
    }
    document.objects.insert(outlines_id, Object::Dictionary(root));
    outlines_id
}

/// PDF text string: UTF-16BE with a byte order mark.
fn text_string(value: &str) -> Object {
    let mut bytes = vec![0xfe, 0xff];
    bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}
