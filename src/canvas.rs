//! The primitive drawing surface layout is performed against.
//!
//! Layout code only ever talks to the [Canvas] trait, so any backend that can fill
//! rectangles, stroke lines, draw text and images and start new pages can host it.
//! [DocumentCanvas] is the backend shipped with the crate: it records every primitive
//! into a [Document] for a later encoder to serialize.

use crate::colour::Colour;
use crate::document::Document;
use crate::image::Image;
use crate::info::Info;
use crate::page::{DrawCommand, Page, TextStyle};
use crate::rect::Rect;
use crate::units::*;
use crate::ReportError;
use id_arena::Id;

/// Primitive drawing operations plus page management. All drawing targets the most
/// recently added page.
pub trait Canvas {
    /// What the canvas turns into once layout is complete
    type Output;

    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    fn rounded_rect(&mut self, rect: Rect, radius: Mm, colour: Colour);

    fn line(&mut self, from: (Mm, Mm), to: (Mm, Mm), width: Mm, colour: Colour);

    /// Draw a single line of text; `y` is the top of the line box
    fn draw_text(&mut self, text: &str, x: Mm, y: Mm, style: &TextStyle);

    /// Decode and place an image. Fails if the data is not a usable image.
    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<(), ReportError>;

    /// Start a new blank page, returning its 0-based index
    fn add_page(&mut self) -> usize;

    fn page_count(&self) -> usize;

    /// Stop drawing and hand over the result
    fn finish(self) -> Self::Output
    where
        Self: Sized;
}

/// A [Canvas] that records draw commands into an in-memory [Document]
#[derive(Debug)]
pub struct DocumentCanvas {
    document: Document,
    width: Mm,
    height: Mm,
    current: Option<Id<Page>>,
}

impl DocumentCanvas {
    /// Create an empty canvas whose pages will all be `width` by `height`
    pub fn new(width: Mm, height: Mm) -> DocumentCanvas {
        DocumentCanvas {
            document: Document::default(),
            width,
            height,
            current: None,
        }
    }

    /// Sets information about the document
    pub fn set_info(&mut self, info: Info) {
        self.document.info = Some(info);
    }

    fn current_page(&mut self) -> &mut Page {
        let id = match self.current {
            Some(id) => id,
            None => {
                self.add_page();
                self.document.page_order[self.document.page_order.len() - 1]
            }
        };
        &mut self.document.pages[id]
    }

    fn push(&mut self, command: DrawCommand) {
        self.current_page().push(command);
    }
}

impl Canvas for DocumentCanvas {
    type Output = Document;

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.push(DrawCommand::FillRect { rect, colour });
    }

    fn rounded_rect(&mut self, rect: Rect, radius: Mm, colour: Colour) {
        self.push(DrawCommand::RoundedRect {
            rect,
            radius,
            colour,
        });
    }

    fn line(&mut self, from: (Mm, Mm), to: (Mm, Mm), width: Mm, colour: Colour) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            colour,
        });
    }

    fn draw_text(&mut self, text: &str, x: Mm, y: Mm, style: &TextStyle) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<(), ReportError> {
        let image = Image::from_bytes(data)?;
        let image = self.document.add_image(image);
        self.push(DrawCommand::Image { image, rect });
        Ok(())
    }

    fn add_page(&mut self) -> usize {
        let id = self.document.add_page(Page::new(self.width, self.height));
        self.current = Some(id);
        self.document.page_count() - 1
    }

    fn page_count(&self) -> usize {
        self.document.page_count()
    }

    fn finish(self) -> Document {
        self.document
    }
}
