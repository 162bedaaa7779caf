//! Standard PDF fonts used by the generated documents.
//!
//! The documents are set in the Helvetica family that every PDF viewer ships with, so
//! nothing has to be embedded or located on disk. Layout measures text with the core
//! AFM advance widths and the writer encodes strings with `WinAnsiEncoding`.

mod metrics;

use std::collections::BTreeSet;

use metrics::{HELVETICA_BOLD_WIDTHS, HELVETICA_WIDTHS};

/// Byte written in place of characters that `WinAnsiEncoding` cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

const DESCENDER: f32 = -207.0;

/// One face of the standard Helvetica family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl StandardFont {
    /// All faces, in resource order.
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
    ];

    /// PostScript name written as `/BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Resource name used inside page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique
        )
    }

    fn widths(self) -> &'static [u16; 224] {
        if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        }
    }

    /// Advance width of a WinAnsi code point at the given size.
    pub fn code_width(self, code: u8, size: f32) -> f32 {
        let units = match code {
            32..=255 => self.widths()[usize::from(code - 32)],
            _ => 0,
        };
        f32::from(units) * size / 1000.0
    }

    /// Width of `text` at `size`. Characters outside `WinAnsiEncoding` are measured
    /// as the replacement glyph.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars()
            .filter(|&ch| !is_invisible(ch))
            .map(|ch| self.code_width(win_ansi_code(ch).unwrap_or(REPLACEMENT_BYTE), size))
            .sum()
    }

    /// Distance from the baseline to the bottom of descenders. Negative.
    pub fn descent(self, size: f32) -> f32 {
        DESCENDER * size / 1000.0
    }
}

/// Maps a character to its `WinAnsiEncoding` byte.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => return u8::try_from(u32::from(ch)).ok(),
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(code)
}

/// Zero-width characters that are dropped instead of being replaced: variation
/// selectors, joiners, and the combining keycap.
fn is_invisible(ch: char) -> bool {
    matches!(
        ch,
        '\u{200b}'..='\u{200d}' | '\u{fe00}'..='\u{fe0f}' | '\u{20e3}'
    )
}

/// Encodes text for a `Tj` operand. Unsupported characters become
/// [`REPLACEMENT_BYTE`] and are recorded in `substituted`.
pub fn encode_win_ansi(text: &str, substituted: &mut BTreeSet<char>) -> Vec<u8> {
    text.chars()
        .filter(|&ch| !is_invisible(ch))
        .map(|ch| {
            win_ansi_code(ch).unwrap_or_else(|| {
                substituted.insert(ch);
                REPLACEMENT_BYTE
            })
        })
        .collect()
}

/// The four faces of a family, selected by emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontFamily<T> {
    pub regular: T,
    pub bold: T,
    pub italic: T,
    pub bold_italic: T,
}

impl<T: Copy> FontFamily<T> {
    pub fn get(&self, bold: bool, italic: bool) -> T {
        match (bold, italic) {
            (false, false) => self.regular,
            (true, false) => self.bold,
            (false, true) => self.italic,
            (true, true) => self.bold_italic,
        }
    }
}

/// Returns the standard Helvetica family.
pub fn default_font_family() -> FontFamily<StandardFont> {
    FontFamily {
        regular: StandardFont::Helvetica,
        bold: StandardFont::HelveticaBold,
        italic: StandardFont::HelveticaOblique,
        bold_italic: StandardFont::HelveticaBoldOblique,
    }
}
