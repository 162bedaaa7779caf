//! Per-page decorations drawn after a page's content has been laid out.
//!
//! A [`PageDecorator`] is invoked exactly once per page, in page order, with a
//! [`PageCanvas`] for that page. Closures taking `&mut PageCanvas` implement the trait,
//! so ad-hoc decorations do not need a dedicated type.

use crate::canvas::PageCanvas;
use crate::fonts::StandardFont;
use crate::style::Color;
use crate::theme::BrandTheme;
use crate::units::{cm, PageSetup};

/// Draws headers, footers, or other furniture onto a finished page.
pub trait PageDecorator {
    fn decorate_page(&mut self, canvas: &mut PageCanvas);
}

impl<F> PageDecorator for F
where
    F: FnMut(&mut PageCanvas),
{
    fn decorate_page(&mut self, canvas: &mut PageCanvas) {
        self(canvas)
    }
}

/// Decorator that leaves every page untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDecoration;

impl PageDecorator for NoDecoration {
    fn decorate_page(&mut self, _canvas: &mut PageCanvas) {}
}

/// Brand header rule and footer line with the tagline and page label.
#[derive(Clone, Debug)]
pub struct BrandedDecorator {
    rule_color: Color,
    rule_width: f32,
    /// Distance of the header rule from the top edge.
    rule_offset: f32,
    /// Baseline of the footer text, measured from the bottom edge.
    footer_baseline: f32,
    left: f32,
    right: f32,
    font: StandardFont,
    font_size: f32,
    theme: BrandTheme,
}

impl BrandedDecorator {
    pub fn new(theme: &BrandTheme, setup: &PageSetup) -> Self {
        Self {
            rule_color: theme.primary,
            rule_width: 3.0,
            rule_offset: cm(1.5),
            footer_baseline: cm(1.5),
            left: setup.margins.left,
            right: setup.size.width - setup.margins.right,
            font: StandardFont::Helvetica,
            font_size: 9.0,
            theme: theme.clone(),
        }
    }
}

impl PageDecorator for BrandedDecorator {
    fn decorate_page(&mut self, canvas: &mut PageCanvas) {
        let rule_y = canvas.size().height - self.rule_offset;
        canvas.line(
            (self.left, rule_y),
            (self.right, rule_y),
            self.rule_width,
            self.rule_color,
        );

        canvas.text(
            self.left,
            self.footer_baseline,
            self.font,
            self.font_size,
            self.theme.footer,
            self.theme.tagline.as_str(),
        );
        let label = self.theme.page_label(canvas.page_number());
        canvas.text_right(
            self.right,
            self.footer_baseline,
            self.font,
            self.font_size,
            self.theme.footer,
            label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;

    #[test]
    fn branded_decorator_draws_rule_and_footer() {
        let theme = BrandTheme::tribebuild();
        let setup = PageSetup::default();
        let mut decorator = BrandedDecorator::new(&theme, &setup);
        let mut canvas = PageCanvas::new(4, setup);
        decorator.decorate_page(&mut canvas);

        let ops = canvas.ops();
        assert_eq!(ops.len(), 3);
        match &ops[0] {
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                assert_eq!(*width, 3.0);
                assert_eq!(*color, theme.primary);
                assert!((from.0 - cm(2.0)).abs() < 1e-3);
                assert!((to.0 - (setup.size.width - cm(2.0))).abs() < 1e-3);
                assert!((from.1 - (setup.size.height - cm(1.5))).abs() < 1e-3);
            }
            other => panic!("expected header rule, got {other:?}"),
        }
        match &ops[1] {
            DrawOp::Text { text, size, .. } => {
                assert_eq!(text, &theme.tagline);
                assert_eq!(*size, 9.0);
            }
            other => panic!("expected tagline, got {other:?}"),
        }
        match &ops[2] {
            DrawOp::Text { text, color, .. } => {
                assert_eq!(text, "Página 4");
                assert_eq!(*color, theme.footer);
            }
            other => panic!("expected page label, got {other:?}"),
        }
    }

    #[test]
    fn closures_act_as_decorators() {
        let mut seen = Vec::new();
        {
            let mut decorator = |canvas: &mut PageCanvas| seen.push(canvas.page_number());
            for page in 1..=3 {
                let mut canvas = PageCanvas::new(page, PageSetup::default());
                decorator.decorate_page(&mut canvas);
            }
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn footer_label_follows_theme() {
        let theme = BrandTheme::tribebuild().with_page_label("Page");
        let setup = PageSetup::default();
        let mut decorator = BrandedDecorator::new(&theme, &setup);
        let mut canvas = PageCanvas::new(12, setup);
        decorator.decorate_page(&mut canvas);

        let labels: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.last(), Some(&"Page 12"));
    }
}
