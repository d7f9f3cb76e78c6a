use crate::page::TextStyle;
use crate::units::*;
use crate::wrap::wrap_greedy;

/// Font-metric dependent text measurement, supplied by whatever will eventually
/// render the document. Layout never guesses text sizes; it always asks the measurer.
pub trait TextMeasurer {
    /// Break `text` into lines that fit within `max_width` when set in `style`
    fn wrap_lines(&self, text: &str, max_width: Mm, style: &TextStyle) -> Vec<String>;

    /// The rendered width of a single line of text
    fn width_of_text(&self, text: &str, style: &TextStyle) -> Mm;
}

/// Measures text as if every glyph had the same advance, a fixed fraction of the
/// font size. Handy for hosts that have no font files available and for tests,
/// since results are fully predictable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Glyph advance as a fraction of the font size (0.6 suits most monospace faces)
    pub advance: f32,
    /// Extra width applied to bold text, as a fraction of the regular advance
    pub bold_extra: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        MonospaceMeasurer {
            advance: 0.6,
            bold_extra: 0.0,
        }
    }
}

impl MonospaceMeasurer {
    /// The width of one glyph in `style`
    pub fn glyph_width(&self, style: &TextStyle) -> Mm {
        let advance = match style.weight {
            crate::FontWeight::Regular => self.advance,
            crate::FontWeight::Bold => self.advance * (1.0 + self.bold_extra),
        };
        (style.size * advance).into()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn wrap_lines(&self, text: &str, max_width: Mm, style: &TextStyle) -> Vec<String> {
        wrap_greedy(text, max_width, |s| self.width_of_text(s, style))
    }

    fn width_of_text(&self, text: &str, style: &TextStyle) -> Mm {
        self.glyph_width(style) * text.chars().count() as f32
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn wrap_lines(&self, text: &str, max_width: Mm, style: &TextStyle) -> Vec<String> {
        (**self).wrap_lines(text, max_width, style)
    }

    fn width_of_text(&self, text: &str, style: &TextStyle) -> Mm {
        (**self).width_of_text(text, style)
    }
}
