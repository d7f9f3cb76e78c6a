use crate::units::*;

/// An axis-aligned rectangle in page coordinates (top-left origin, `y` growing down),
/// specified by its top-left corner and its size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: Mm,
    /// Top edge
    pub y: Mm,
    pub width: Mm,
    pub height: Mm,
}

impl Rect {
    pub fn new(x: Mm, y: Mm, width: Mm, height: Mm) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge
    pub fn right(&self) -> Mm {
        self.x + self.width
    }

    /// The bottom edge
    pub fn bottom(&self) -> Mm {
        self.y + self.height
    }
}
