use crate::colour::{colours, Colour};
use serde::{Deserialize, Serialize};

/// The named set of colours a report is drawn with. Layout code never picks colours
/// on its own; everything it paints comes from one of these slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Top of the header gradient band
    pub header_start: Colour,
    /// Bottom of the header gradient band
    pub header_end: Colour,
    /// Title and subtitle drawn on top of the header band
    pub header_text: Colour,
    /// The metadata bar fill, before opacity is applied
    pub bar: Colour,
    /// Text inside the metadata bar
    pub bar_text: Colour,
    /// What the page looks like where nothing has been drawn
    pub background: Colour,
    /// Section title text
    pub section_title: Colour,
    /// The short rule underneath section titles
    pub accent: Colour,
    /// Key labels in key/value rows
    pub label: Colour,
    /// Values in key/value rows
    pub text: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            header_start: Colour::new_rgb_bytes(37, 99, 235),
            header_end: Colour::new_rgb_bytes(30, 64, 175),
            header_text: colours::WHITE,
            bar: Colour::new_rgb_bytes(219, 234, 254),
            bar_text: Colour::new_rgb_bytes(30, 41, 59),
            background: colours::WHITE,
            section_title: Colour::new_rgb_bytes(30, 64, 175),
            accent: Colour::new_rgb_bytes(59, 130, 246),
            label: Colour::new_rgb_bytes(51, 65, 85),
            text: Colour::new_rgb_bytes(15, 23, 42),
        }
    }
}
