use serde::{Deserialize, Serialize};

/// A colour in the RGB space. r, g, and b range from 0.0 to 1.0
///
/// When (de)serialized, colours are written as `[r, g, b]` byte triples so that
/// palettes can be copied straight out of a design tool.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a neutral grey, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour { r: g, g, b: g }
    }

    /// Linearly interpolate each channel towards `other`. `t = 0.0` yields `self`,
    /// `t = 1.0` yields `other`.
    pub fn lerp(self, other: Colour, t: f32) -> Colour {
        Colour {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Composite this colour at the given opacity over an opaque `background`,
    /// producing the flat colour a viewer would see.
    pub fn over(self, background: Colour, opacity: f32) -> Colour {
        background.lerp(self, opacity.clamp(0.0, 1.0))
    }

    /// The colour as 0-255 channel bytes, rounded to the nearest value
    pub fn to_bytes(self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        c.to_bytes()
    }
}

impl From<(f32, f32, f32)> for Colour {
    fn from(c: (f32, f32, f32)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey(0.0);
    pub const WHITE: Colour = Colour::new_grey(1.0);
    pub const RED: Colour = Colour::new_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Colour = Colour::new_rgb(0.0, 0.0, 1.0);
}
