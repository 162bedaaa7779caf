//! Positioned drawing operations and the per-page surface handed to decorators.
//!
//! Coordinates are PDF user space: points, origin at the bottom-left corner of the page.

use crate::fonts::StandardFont;
use crate::style::Color;
use crate::units::{PageSetup, PageSize};

/// A single positioned drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A run of text in one font, starting on the baseline at `(x, y)`.
    Text {
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Color,
        text: String,
    },
    /// A stroked straight line.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
    /// A filled rectangle with its lower-left corner at `(x, y)`.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    },
}

/// Drawing surface for one page.
#[derive(Clone, Debug)]
pub struct PageCanvas {
    page_number: usize,
    setup: PageSetup,
    ops: Vec<DrawOp>,
}

impl PageCanvas {
    pub fn new(page_number: usize, setup: PageSetup) -> Self {
        Self {
            page_number,
            setup,
            ops: Vec::new(),
        }
    }

    /// 1-based number of the page being drawn.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn size(&self) -> PageSize {
        self.setup.size
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Color,
        text: impl Into<String>,
    ) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text: text.into(),
        });
    }

    /// Draws text so that it ends at `right`.
    pub fn text_right(
        &mut self,
        right: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Color,
        text: impl Into<String>,
    ) {
        let text = text.into();
        let x = right - font.text_width(&text, size);
        self.text(x, y, font, size, color, text);
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Color) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    pub fn text_width(&self, font: StandardFont, text: &str, size: f32) -> f32 {
        font.text_width(text, size)
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}
