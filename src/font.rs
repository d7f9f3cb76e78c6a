use crate::measure::TextMeasurer;
use crate::page::{FontWeight, TextStyle};
use crate::wrap::wrap_greedy;
use crate::{Mm, Pt, ReportError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType / OpenType font, used for its metrics when measuring and
/// wrapping text
pub struct Font {
    pub face: OwnedFace,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = self.face.as_face_ref();
        f.debug_struct("Font")
            .field("units_per_em", &face.units_per_em())
            .field("glyphs", &face.number_of_glyphs())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, ReportError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text at the given font size. Characters
    /// missing from the font are measured as the replacement glyph, newlines are ignored.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter(|&ch| ch != '\n')
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.replacement_glyph_id()))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// A [TextMeasurer] backed by real font metrics. A bold face is optional; without one,
/// bold text is measured with the regular face.
#[derive(Debug)]
pub struct FontMeasurer {
    pub regular: Font,
    pub bold: Option<Font>,
}

impl FontMeasurer {
    pub fn new(regular: Font, bold: Option<Font>) -> FontMeasurer {
        FontMeasurer { regular, bold }
    }

    /// The face a given weight is set in
    pub fn face(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

impl TextMeasurer for FontMeasurer {
    fn wrap_lines(&self, text: &str, max_width: Mm, style: &TextStyle) -> Vec<String> {
        wrap_greedy(text, max_width, |s| self.width_of_text(s, style))
    }

    fn width_of_text(&self, text: &str, style: &TextStyle) -> Mm {
        self.face(style.weight)
            .width_of_text(text, style.size)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours::BLACK;

    const REGULAR: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
    const BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

    fn measurer(with_bold: bool) -> FontMeasurer {
        let regular = Font::load(REGULAR.to_vec()).expect("regular face parses");
        let bold = with_bold.then(|| Font::load(BOLD.to_vec()).expect("bold face parses"));
        FontMeasurer::new(regular, bold)
    }

    #[test]
    fn widths_scale_with_font_size() {
        let m = measurer(false);
        let small = m.width_of_text("Incident Report", &TextStyle::new(Pt(10.0), BLACK));
        let large = m.width_of_text("Incident Report", &TextStyle::new(Pt(20.0), BLACK));
        assert!(small > Mm(0.0));
        assert!((large.0 - small.0 * 2.0).abs() < 1e-3);
        assert_eq!(m.width_of_text("", &TextStyle::new(Pt(10.0), BLACK)), Mm(0.0));
    }

    #[test]
    fn newlines_take_no_width() {
        let m = measurer(false);
        let style = TextStyle::new(Pt(10.0), BLACK);
        assert_eq!(m.width_of_text("ab\n", &style), m.width_of_text("ab", &style));
    }

    #[test]
    fn bold_falls_back_to_the_regular_face() {
        let regular = TextStyle::new(Pt(12.0), BLACK);
        let bold = regular.bold();

        let with_bold = measurer(true);
        assert!(std::ptr::eq(
            with_bold.face(FontWeight::Bold),
            with_bold.bold.as_ref().expect("bold face loaded")
        ));
        assert!(with_bold.width_of_text("Summary", &bold) > with_bold.width_of_text("Summary", &regular));

        let without = measurer(false);
        assert!(std::ptr::eq(without.face(FontWeight::Bold), &without.regular));
        assert_eq!(
            without.width_of_text("Summary", &bold),
            without.width_of_text("Summary", &regular)
        );
    }

    #[test]
    fn wrapped_lines_fit_the_column() {
        let m = measurer(true);
        let text = "Door access badge stopped working after the firmware update was pushed \
                    to every reader on the third floor, including the supply room.";
        for style in [TextStyle::new(Pt(10.0), BLACK), TextStyle::new(Pt(10.0), BLACK).bold()] {
            let max_width = Mm(60.0);
            let lines = m.wrap_lines(text, max_width, &style);
            assert!(lines.len() > 1);
            for line in lines.iter() {
                // words are summed one at a time while wrapping, so allow for rounding
                assert!(
                    m.width_of_text(line, &style) <= max_width + Mm(1e-3),
                    "{line:?} is too wide"
                );
            }
            assert_eq!(
                lines.join(" ").split_whitespace().collect::<Vec<_>>(),
                text.split_whitespace().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn rejects_non_font_data() {
        let result = Font::load(b"this is not a font file".to_vec());
        assert!(matches!(result, Err(ReportError::FaceParsing(_))));
    }
}
