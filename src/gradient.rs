//! Linear colour gradients, rendered as a stack of flat horizontal bands.
//!
//! The primitive renderer only knows how to fill flat rectangles, so a gradient is
//! approximated by `n` strips whose colours are sampled at `i / n` along the
//! gradient. More bands look smoother and cost more draw calls.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::rect::Rect;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("a gradient needs at least two colour stops, got {0}")]
    TooFewStops(usize),

    #[error("the first colour stop must sit at offset 0, not {0}")]
    FirstNotZero(f32),

    #[error("the last colour stop must sit at offset 1, not {0}")]
    LastNotOne(f32),

    #[error("colour stop offsets must strictly increase ({previous} is followed by {next})")]
    NotIncreasing { previous: f32, next: f32 },
}

/// A control point on a gradient
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ColorStop {
    /// Position along the gradient, from 0.0 to 1.0
    pub offset: f32,
    pub colour: Colour,
}

impl ColorStop {
    pub fn new(offset: f32, colour: Colour) -> ColorStop {
        ColorStop { offset, colour }
    }
}

/// An ordered run of at least two colour stops, starting at offset 0 and ending at
/// offset 1 with strictly increasing offsets in between
#[derive(Clone, PartialEq, Debug)]
pub struct LinearGradient {
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Build a gradient from explicit stops, validating their ordering
    pub fn new(stops: Vec<ColorStop>) -> Result<LinearGradient, GradientError> {
        let (first, last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if stops.len() >= 2 => (first, last),
            _ => return Err(GradientError::TooFewStops(stops.len())),
        };
        if first.offset != 0.0 {
            return Err(GradientError::FirstNotZero(first.offset));
        }
        if last.offset != 1.0 {
            return Err(GradientError::LastNotOne(last.offset));
        }
        if let Some(pair) = stops.windows(2).find(|w| w[1].offset <= w[0].offset) {
            return Err(GradientError::NotIncreasing {
                previous: pair[0].offset,
                next: pair[1].offset,
            });
        }
        Ok(LinearGradient { stops })
    }

    /// The common case: a straight blend from `start` to `end`
    pub fn two_stop(start: Colour, end: Colour) -> LinearGradient {
        LinearGradient {
            stops: vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Sample the gradient. `ratio` is clamped into `[0, 1]`; the stops bracketing it
    /// are located and blended linearly within their sub-range.
    pub fn colour_at(&self, ratio: f32) -> Colour {
        let ratio = ratio.clamp(0.0, 1.0);
        let upper = self
            .stops
            .iter()
            .position(|s| s.offset >= ratio)
            .unwrap_or(self.stops.len() - 1)
            .max(1);
        let (a, b) = (self.stops[upper - 1], self.stops[upper]);
        let t = (ratio - a.offset) / (b.offset - a.offset);
        a.colour.lerp(b.colour, t)
    }

    /// The colour of each of `n` bands; band `i` is sampled at `i / n`
    pub fn bands(&self, n: usize) -> Vec<Colour> {
        (0..n)
            .map(|i| self.colour_at(i as f32 / n as f32))
            .collect()
    }
}

/// Fill `rect` top to bottom with `bands` horizontal strips of the gradient
pub fn fill_banded<C: Canvas>(canvas: &mut C, gradient: &LinearGradient, rect: Rect, bands: usize) {
    if bands == 0 {
        return;
    }
    let strip = rect.height / bands as f32;
    for (i, colour) in gradient.bands(bands).into_iter().enumerate() {
        let y = rect.y + strip * i as f32;
        canvas.fill_rect(Rect::new(rect.x, y, rect.width, strip), colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn two_stop_band_endpoints() {
        let c0 = Colour::new_rgb_bytes(0, 0, 0);
        let c1 = Colour::new_rgb_bytes(200, 100, 50);
        let gradient = LinearGradient::two_stop(c0, c1);
        let n = 35;
        let bands = gradient.bands(n);

        assert_eq!(bands.len(), n);
        assert_eq!(bands[0], c0);
        let last_ratio = (n - 1) as f32 / n as f32;
        assert_eq!(bands[n - 1], c0.lerp(c1, last_ratio));
        assert_ne!(bands[n - 1], c1);
    }

    #[test]
    fn three_stops_interpolate_within_their_bracket() {
        let gradient = LinearGradient::new(vec![
            ColorStop::new(0.0, colours::BLACK),
            ColorStop::new(0.5, colours::WHITE),
            ColorStop::new(1.0, colours::BLACK),
        ])
        .expect("valid stops");

        assert_eq!(gradient.colour_at(0.5), colours::WHITE);
        assert_eq!(gradient.colour_at(0.25).to_bytes(), [128, 128, 128]);
        assert_eq!(gradient.colour_at(0.75).to_bytes(), [128, 128, 128]);
        assert_eq!(gradient.colour_at(1.0), colours::BLACK);
        assert_eq!(gradient.colour_at(7.0), colours::BLACK);
        assert_eq!(gradient.colour_at(-1.0), colours::BLACK);
    }

    #[test]
    fn rejects_malformed_stops() {
        let stop = |o| ColorStop::new(o, colours::RED);
        assert_eq!(
            LinearGradient::new(vec![stop(0.0)]),
            Err(GradientError::TooFewStops(1))
        );
        assert_eq!(
            LinearGradient::new(vec![stop(0.1), stop(1.0)]),
            Err(GradientError::FirstNotZero(0.1))
        );
        assert_eq!(
            LinearGradient::new(vec![stop(0.0), stop(0.9)]),
            Err(GradientError::LastNotOne(0.9))
        );
        assert_eq!(
            LinearGradient::new(vec![stop(0.0), stop(0.5), stop(0.5), stop(1.0)]),
            Err(GradientError::NotIncreasing {
                previous: 0.5,
                next: 0.5
            })
        );
    }
}
