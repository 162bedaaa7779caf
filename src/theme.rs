//! Brand configuration shared by the style sheet and the page decorations.

use crate::style::{Alignment, Color, ParagraphStyle, StyleRegistry};

/// Brand colours and footer copy. Passed explicitly wherever they are needed, so
/// documents with different themes can be built side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandTheme {
    pub primary: Color,
    pub accent: Color,
    pub dark: Color,
    pub light: Color,
    /// Subtitle text.
    pub muted: Color,
    /// Tip callouts.
    pub tip: Color,
    /// Footer text.
    pub footer: Color,
    pub tagline: String,
    /// Prefix of the page label in the footer, followed by the page number.
    pub page_label: String,
}

impl Default for BrandTheme {
    fn default() -> Self {
        Self::tribebuild()
    }
}

impl BrandTheme {
    /// The TribeBuild palette.
    pub fn tribebuild() -> Self {
        Self {
            primary: Color::Rgb(0x25, 0x63, 0xeb),
            accent: Color::Rgb(0xff, 0x6b, 0x6b),
            dark: Color::Rgb(0x0f, 0x17, 0x2a),
            light: Color::Rgb(0xf8, 0xfa, 0xfc),
            muted: Color::Rgb(0x64, 0x74, 0x8b),
            tip: Color::Rgb(0x05, 0x96, 0x69),
            footer: Color::Rgb(0x94, 0xa3, 0xb8),
            tagline: "TribeBuild - Transforme seu conhecimento em um app exclusivo".to_owned(),
            page_label: "Página".to_owned(),
        }
    }

    pub fn with_page_label(mut self, label: impl Into<String>) -> Self {
        self.page_label = label.into();
        self
    }

    /// Footer label for a 1-based page number.
    pub fn page_label(&self, page_number: usize) -> String {
        format!("{} {}", self.page_label, page_number)
    }
}

/// Names of the styles registered by [`StyleRegistry::from_theme`].
pub mod names {
    pub const MAIN_TITLE: &str = "MainTitle";
    pub const SUBTITLE: &str = "Subtitle";
    pub const H1: &str = "H1";
    pub const H2: &str = "H2";
    pub const H3: &str = "H3";
    pub const BODY: &str = "Body";
    pub const HIGHLIGHT: &str = "Highlight";
    pub const TIP: &str = "Tip";
    pub const LIST_ITEM: &str = "ListItem";
    pub const TABLE: &str = "Table";
}

impl StyleRegistry {
    /// The brand style sheet. Leading values come from the base styles each brand
    /// style overrides.
    pub fn from_theme(theme: &BrandTheme) -> Self {
        StyleRegistry::new()
            .with_style(
                names::MAIN_TITLE,
                ParagraphStyle::new(28.0)
                    .with_leading(22.0)
                    .with_color(theme.dark)
                    .with_space_after(20.0)
                    .with_alignment(Alignment::Center)
                    .bold(),
            )
            .with_style(
                names::SUBTITLE,
                ParagraphStyle::new(14.0)
                    .with_leading(12.0)
                    .with_color(theme.muted)
                    .with_space_after(30.0)
                    .with_alignment(Alignment::Center),
            )
            .with_style(
                names::H1,
                ParagraphStyle::new(20.0)
                    .with_leading(22.0)
                    .with_color(theme.primary)
                    .with_space_before(25.0)
                    .with_space_after(15.0)
                    .bold()
                    .with_bookmark(true),
            )
            .with_style(
                names::H2,
                ParagraphStyle::new(16.0)
                    .with_leading(18.0)
                    .with_color(theme.dark)
                    .with_space_before(20.0)
                    .with_space_after(10.0)
                    .bold(),
            )
            .with_style(
                names::H3,
                ParagraphStyle::new(13.0)
                    .with_leading(14.0)
                    .with_color(theme.accent)
                    .with_space_before(15.0)
                    .with_space_after(8.0)
                    .bold(),
            )
            .with_style(
                names::BODY,
                ParagraphStyle::new(11.0)
                    .with_leading(16.0)
                    .with_color(theme.dark)
                    .with_space_after(10.0)
                    .with_alignment(Alignment::Justified),
            )
            .with_style(
                names::HIGHLIGHT,
                ParagraphStyle::new(12.0)
                    .with_leading(12.0)
                    .with_color(theme.primary)
                    .with_space_after(10.0)
                    .bold(),
            )
            .with_style(
                names::TIP,
                ParagraphStyle::new(10.0)
                    .with_leading(12.0)
                    .with_color(theme.tip)
                    .with_space_before(10.0)
                    .with_space_after(10.0)
                    .with_left_indent(20.0)
                    .italic(),
            )
            .with_style(
                names::LIST_ITEM,
                ParagraphStyle::new(11.0)
                    .with_leading(12.0)
                    .with_color(theme.dark)
                    .with_space_after(6.0)
                    .with_left_indent(15.0),
            )
            .with_style(
                names::TABLE,
                ParagraphStyle::new(10.0).with_color(theme.dark),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_sheet_registers_every_style() {
        let registry = StyleRegistry::from_theme(&BrandTheme::tribebuild());
        for name in [
            names::MAIN_TITLE,
            names::SUBTITLE,
            names::H1,
            names::H2,
            names::H3,
            names::BODY,
            names::HIGHLIGHT,
            names::TIP,
            names::LIST_ITEM,
            names::TABLE,
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn brand_sheet_follows_theme_colours() {
        let theme = BrandTheme::tribebuild();
        let mut other = theme.clone();
        other.primary = Color::Rgb(1, 2, 3);

        let default_sheet = StyleRegistry::from_theme(&theme);
        let other_sheet = StyleRegistry::from_theme(&other);

        assert_eq!(default_sheet.resolve(names::H1).unwrap().color, theme.primary);
        assert_eq!(other_sheet.resolve(names::H1).unwrap().color, Color::Rgb(1, 2, 3));
        assert!(other_sheet.resolve(names::H1).unwrap().bookmark);
        assert_eq!(default_sheet.resolve(names::BODY).unwrap().font_size, 11.0);
    }

    #[test]
    fn brand_sheet_keeps_inherited_leading() {
        let sheet = StyleRegistry::from_theme(&BrandTheme::tribebuild());
        let leading = |name| sheet.resolve(name).unwrap().leading;
        assert_eq!(leading(names::MAIN_TITLE), 22.0);
        assert_eq!(leading(names::SUBTITLE), 12.0);
        assert_eq!(leading(names::H1), 22.0);
        assert_eq!(leading(names::H2), 18.0);
        assert_eq!(leading(names::H3), 14.0);
        assert_eq!(leading(names::BODY), 16.0);
        assert_eq!(leading(names::HIGHLIGHT), 12.0);
        assert_eq!(leading(names::TIP), 12.0);
        assert_eq!(leading(names::LIST_ITEM), 12.0);
    }

    #[test]
    fn page_label_appends_number() {
        let theme = BrandTheme::tribebuild().with_page_label("Page");
        assert_eq!(theme.page_label(3), "Page 3");
    }
}
