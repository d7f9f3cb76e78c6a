//! Layout configuration: page geometry, the fixed block sizes of the report layout,
//! font sizes and page-break policy. Every field has a default, so a configuration
//! file only needs to mention what it changes.

use crate::pagesize::{PageSize, A4};
use crate::palette::Palette;
use crate::units::*;
use crate::ReportError;
use serde::{Deserialize, Serialize};

/// The physical page: its size and the uniform margin content is kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: Mm,
    pub height: Mm,
    pub margin: Mm,
}

impl PageGeometry {
    /// Geometry for one of the [pagesize](crate::pagesize) constants
    pub fn from_size(size: PageSize, margin: Mm) -> PageGeometry {
        PageGeometry {
            width: size.0.into(),
            height: size.1.into(),
            margin,
        }
    }

    /// The width available between the left and right margins
    pub fn content_width(&self) -> Mm {
        self.width - self.margin * 2.0
    }

    /// The height available between the top and bottom margins
    pub fn usable_height(&self) -> Mm {
        self.height - self.margin * 2.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::from_size(A4, Mm(15.0))
    }
}

/// What happens at the start of each report section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBreak {
    /// Sections follow each other, breaking only when they run out of room
    #[default]
    Flow,
    /// Every section after the first starts on a fresh page
    NewPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageGeometry,
    pub palette: Palette,

    /// Height of the gradient header band at the top of the first page
    pub header_height: Mm,
    /// How many flat strips the header gradient is drawn with
    pub gradient_bands: usize,
    /// Offset from the page top to the title and subtitle lines
    pub title_offset: Mm,
    pub subtitle_offset: Mm,
    /// Square logo size, drawn at the left margin inside the header
    pub logo_size: Mm,

    pub metadata_bar_height: Mm,
    pub metadata_bar_radius: Mm,
    /// Opacity of the metadata bar over the page background
    pub bar_opacity: f32,

    /// Vertical space taken by a section title, including its underline
    pub section_title_height: Mm,
    pub underline_length: Mm,
    pub underline_width: Mm,

    pub line_height: Mm,
    /// Gap left under each key/value row
    pub row_spacing: Mm,
    /// Horizontal space reserved for the key label before values start
    pub label_column_width: Mm,
    /// Gap inserted between top-level blocks (header, metadata bar, sections)
    pub block_gap: Mm,

    pub title_size: Pt,
    pub subtitle_size: Pt,
    pub bar_text_size: Pt,
    pub section_title_size: Pt,
    pub body_size: Pt,

    pub section_break: SectionBreak,
    /// Reserve room for a section title together with its first row, so titles are
    /// never left alone at the bottom of a page
    pub keep_title_with_first_row: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page: PageGeometry::default(),
            palette: Palette::default(),
            header_height: Mm(35.0),
            gradient_bands: 35,
            title_offset: Mm(10.0),
            subtitle_offset: Mm(20.0),
            logo_size: Mm(20.0),
            metadata_bar_height: Mm(12.0),
            metadata_bar_radius: Mm(2.0),
            bar_opacity: 0.35,
            section_title_height: Mm(8.0),
            underline_length: Mm(30.0),
            underline_width: Mm(0.5),
            line_height: Mm(5.0),
            row_spacing: Mm(3.0),
            label_column_width: Mm(50.0),
            block_gap: Mm(5.0),
            title_size: Pt(18.0),
            subtitle_size: Pt(10.0),
            bar_text_size: Pt(9.0),
            section_title_size: Pt(12.0),
            body_size: Pt(10.0),
            section_break: SectionBreak::Flow,
            keep_title_with_first_row: true,
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<LayoutConfig, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The width key/value rows wrap within, between the margins
    pub fn content_width(&self) -> Mm {
        self.page.content_width()
    }
}
