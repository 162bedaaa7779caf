//! Page geometry expressed in PDF points (1/72 inch).

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// Converts centimetres to points.
pub fn cm(value: f32) -> f32 {
    mm(value * 10.0)
}

/// Width and height of a page in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// ISO A4 (210 x 297 mm).
    pub const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Page margins in points, in CSS order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::trbl(value, value, value, value)
    }

    /// Same value for top and bottom, and for left and right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::trbl(vertical, horizontal, vertical, horizontal)
    }
}

/// Page size plus margins; derives the content area used by the layout engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageSetup {
    /// A4 with 2 cm side margins and 2.5 cm top/bottom margins.
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Margins::symmetric(cm(2.5), cm(2.0)),
        }
    }
}

impl PageSetup {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    pub fn content_width(&self) -> f32 {
        (self.size.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn content_height(&self) -> f32 {
        (self.size.height - self.margins.top - self.margins.bottom).max(0.0)
    }
}
