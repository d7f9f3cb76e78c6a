//! The vertical write position and the page-break rule.

use crate::canvas::Canvas;
use crate::units::Mm;

/// Whether placing `needed` units of content at `y` would cross the bottom margin of a
/// page `page_height` tall. This is the only page-break rule in the crate; the cursor
/// and [check_page_break](crate::DocumentComposer::check_page_break) both defer to it so
/// they can never disagree.
pub fn would_overflow(y: Mm, needed: Mm, page_height: Mm, margin: Mm) -> bool {
    y + needed > page_height - margin
}

/// Tracks where the next block of content goes on the current page, and starts new
/// pages when a block would not fit.
///
/// Callers follow a strict protocol: measure the block, [reserve](LayoutCursor::reserve)
/// exactly that height, draw at the returned `y`, then [advance](LayoutCursor::advance)
/// by the same height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Index of the page currently being written to
    pub page: usize,
    /// The current vertical offset from the top of the page
    pub y: Mm,
    pub margin: Mm,
    pub page_height: Mm,
    pub page_width: Mm,
}

impl LayoutCursor {
    /// A cursor at the top margin of `page`
    pub fn new(page: usize, page_width: Mm, page_height: Mm, margin: Mm) -> LayoutCursor {
        LayoutCursor {
            page,
            y: margin,
            margin,
            page_height,
            page_width,
        }
    }

    /// The height available between the top and bottom margins of a page
    pub fn usable_height(&self) -> Mm {
        self.page_height - self.margin * 2.0
    }

    /// The space left on the current page above the bottom margin
    pub fn remaining(&self) -> Mm {
        self.page_height - self.margin - self.y
    }

    /// Whether a block of `height` fits on the current page without a break
    pub fn fits(&self, height: Mm) -> bool {
        !would_overflow(self.y, height, self.page_height, self.margin)
    }

    /// Make room for a block of `height`, returning the `y` to draw it at. If the block
    /// would cross the bottom margin a new page is started first. The cursor itself is
    /// not moved past the block; call [advance](LayoutCursor::advance) once it is drawn.
    ///
    /// Blocks taller than a whole page break once and are then placed anyway, running
    /// past the bottom margin.
    pub fn reserve<C: Canvas + ?Sized>(&mut self, canvas: &mut C, height: Mm) -> Mm {
        if !self.fits(height) {
            log::debug!(
                "page break before block of {height}mm at y={}mm on page {}",
                self.y,
                self.page
            );
            self.force_break(canvas);

            if height > self.usable_height() {
                log::warn!(
                    "block of {height}mm is taller than the usable page height of {}mm and will overflow page {}",
                    self.usable_height(),
                    self.page
                );
            }
        }
        self.y
    }

    /// Commit the cursor past a block of `height`. No bounds are checked here; the same
    /// height must have been reserved first.
    pub fn advance(&mut self, height: Mm) {
        self.y += height;
        log::trace!("cursor advanced {height}mm to y={}mm", self.y);
    }

    /// Start a new page unconditionally and move to its top margin
    pub fn force_break<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.page = canvas.add_page();
        self.y = self.margin;
    }

    /// Whether the cursor sits at the top of its page
    pub fn at_page_top(&self) -> bool {
        self.y == self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DocumentCanvas;

    const H: Mm = Mm(230.0);
    const M: Mm = Mm(15.0);

    fn setup() -> (DocumentCanvas, LayoutCursor) {
        let mut canvas = DocumentCanvas::new(Mm(210.0), H);
        let page = canvas.add_page();
        (canvas, LayoutCursor::new(page, Mm(210.0), H, M))
    }

    #[test]
    fn reserve_without_break_keeps_position() {
        let (mut canvas, mut cursor) = setup();
        cursor.advance(Mm(50.0));
        assert_eq!(cursor.reserve(&mut canvas, Mm(20.0)), Mm(65.0));
        assert_eq!(cursor.y, Mm(65.0));
        assert_eq!(cursor.remaining(), Mm(150.0));
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let (mut canvas, mut cursor) = setup();
        let need = cursor.usable_height();
        assert_eq!(cursor.reserve(&mut canvas, need), M);
        cursor.advance(need);
        assert_eq!(cursor.y, H - M);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn overflow_breaks_before_placement() {
        let (mut canvas, mut cursor) = setup();
        cursor.advance(Mm(190.0));
        let y = cursor.reserve(&mut canvas, Mm(30.0));
        assert_eq!(y, M);
        assert_eq!(cursor.page, 1);
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn oversized_blocks_break_once_and_overflow() {
        let (mut canvas, mut cursor) = setup();
        cursor.advance(Mm(10.0));
        let y = cursor.reserve(&mut canvas, Mm(500.0));
        assert_eq!(y, M);
        cursor.advance(Mm(500.0));
        assert_eq!(canvas.page_count(), 2);
        assert!(cursor.y > H - M);
    }

    #[test]
    fn force_break_always_adds_a_page() {
        let (mut canvas, mut cursor) = setup();
        cursor.force_break(&mut canvas);
        cursor.force_break(&mut canvas);
        assert_eq!(canvas.page_count(), 3);
        assert_eq!(cursor.page, 2);
        assert!(cursor.at_page_top());
    }

    #[test]
    fn bound_invariant_holds_over_long_sequences() {
        let (mut canvas, mut cursor) = setup();
        let usable = cursor.usable_height().0;
        // deterministic pseudo-random heights in (0, usable]
        let mut state: u32 = 0x2545_f491;
        for _ in 0..2_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let h = Mm(((state % 10_000) as f32 / 10_000.0) * usable + 0.01).min(Mm(usable));

            let y0 = cursor.reserve(&mut canvas, h);
            assert!(y0 >= M && y0 <= H - M, "y0={y0} out of bounds");
            assert!(y0 + h <= H - M, "block of {h} at {y0} crosses the margin");
            cursor.advance(h);
            assert!(cursor.y >= M && cursor.y <= H - M);
        }
    }
}
