use crate::colour::Colour;
use crate::image::Image;
use crate::rect::Rect;
use crate::units::*;
use id_arena::Id;

/// Horizontal anchoring of a text run relative to its `x` coordinate
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Align {
    /// `x` is the left edge of the text
    #[default]
    Left,
    /// `x` is the horizontal centre of the text
    Center,
    /// `x` is the right edge of the text
    Right,
}

/// Which face of the report font a run is set in
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// How a text run should be set
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub align: Align,
    pub weight: FontWeight,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(size: Pt, colour: Colour) -> TextStyle {
        TextStyle {
            align: Align::Left,
            weight: FontWeight::Regular,
            size,
            colour,
        }
    }

    pub fn bold(mut self) -> TextStyle {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn aligned(mut self, align: Align) -> TextStyle {
        self.align = align;
        self
    }
}

/// A single primitive drawn onto a page. Coordinates are page coordinates with the
/// origin at the top-left; text `y` is the top of the line box.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        colour: Colour,
    },
    RoundedRect {
        rect: Rect,
        radius: Mm,
        colour: Colour,
    },
    Line {
        from: (Mm, Mm),
        to: (Mm, Mm),
        width: Mm,
        colour: Colour,
    },
    Text {
        text: String,
        x: Mm,
        y: Mm,
        style: TextStyle,
    },
    Image {
        image: Id<Image>,
        rect: Rect,
    },
}

/// A page is a fixed-size rectangle and the ordered list of everything drawn on it
#[derive(Debug)]
pub struct Page {
    pub width: Mm,
    pub height: Mm,
    pub(crate) commands: Vec<DrawCommand>,
}

impl Page {
    /// Create a blank page of the given size
    pub fn new(width: Mm, height: Mm) -> Page {
        Page {
            width,
            height,
            commands: Vec::default(),
        }
    }

    /// Everything drawn on the page, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether anything has been drawn on the page yet
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the text runs on this page as `(text, x, y, style)`
    pub fn text_runs(&self) -> impl Iterator<Item = (&str, Mm, Mm, &TextStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, x, y, style } => Some((text.as_str(), *x, *y, style)),
            _ => None,
        })
    }

    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
