//! Assembles a report onto pages: header band, metadata bar, then any number of
//! titled sections of key/value rows.
//!
//! There are two ways to drive a [DocumentComposer]:
//!
//! - The cursor-driven methods ([header](DocumentComposer::header),
//!   [metadata](DocumentComposer::metadata), [section](DocumentComposer::section),
//!   [key_value](DocumentComposer::key_value), [finish](DocumentComposer::finish)) measure
//!   each block, reserve exactly its height on the composer's [LayoutCursor], draw it and
//!   advance. They enforce the report structure
//!   `header → metadata → (section → key_value*)* → finish`.
//! - The `render_*` methods take an explicit `y` and return the `y` below what they drew,
//!   for callers that track position themselves. [render_key_value] and
//!   [check_page_break] share the page-break rule with the cursor.
//!
//! [render_key_value]: DocumentComposer::render_key_value
//! [check_page_break]: DocumentComposer::check_page_break

use crate::canvas::{Canvas, DocumentCanvas};
use crate::config::{LayoutConfig, SectionBreak};
use crate::cursor::{would_overflow, LayoutCursor};
use crate::document::Document;
use crate::gradient::{fill_banded, LinearGradient};
use crate::info::Info;
use crate::measure::TextMeasurer;
use crate::page::{Align, TextStyle};
use crate::rect::Rect;
use crate::report::{Entry, MetadataField, Report};
use crate::units::*;
use crate::wrap::{normalize, wrap_text};
use crate::ReportError;

const BAR_PADDING: Mm = Mm(4.0);

/// A key/value row that has been measured but not yet drawn
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueBlock {
    pub key: String,
    /// The value, already normalized and wrapped to the value column
    pub lines: Vec<String>,
    /// Total vertical space the row takes, including the gap below it
    pub height: Mm,
}

/// A section heading and the length of the rule drawn underneath it
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTitle {
    pub text: String,
    pub underline_length: Mm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Header,
    Metadata,
    Section,
    KeyValue,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Header => "header",
            Phase::Metadata => "metadata",
            Phase::Section => "section",
            Phase::KeyValue => "key/value",
        }
    }
}

/// Drives a [Canvas] and a [LayoutCursor] to lay out one report. A composer is used
/// for exactly one document: [finish](DocumentComposer::finish) consumes it.
pub struct DocumentComposer<C: Canvas, M: TextMeasurer> {
    canvas: C,
    measurer: M,
    config: LayoutConfig,
    cursor: LayoutCursor,
    phase: Phase,
    sections: usize,
}

impl<C: Canvas, M: TextMeasurer> DocumentComposer<C, M> {
    /// Start composing onto `canvas`. A first page is opened if the canvas has none.
    pub fn new(mut canvas: C, measurer: M, config: LayoutConfig) -> Self {
        let page = match canvas.page_count() {
            0 => canvas.add_page(),
            n => n - 1,
        };
        let geometry = config.page;
        DocumentComposer {
            canvas,
            measurer,
            cursor: LayoutCursor::new(page, geometry.width, geometry.height, geometry.margin),
            config,
            phase: Phase::Start,
            sections: 0,
        }
    }

    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    fn title_style(&self) -> TextStyle {
        TextStyle::new(self.config.title_size, self.config.palette.header_text)
            .bold()
            .aligned(Align::Center)
    }

    fn subtitle_style(&self) -> TextStyle {
        TextStyle::new(self.config.subtitle_size, self.config.palette.header_text)
            .aligned(Align::Center)
    }

    fn bar_style(&self) -> TextStyle {
        TextStyle::new(self.config.bar_text_size, self.config.palette.bar_text)
    }

    fn section_style(&self) -> TextStyle {
        TextStyle::new(self.config.section_title_size, self.config.palette.section_title).bold()
    }

    fn label_style(&self) -> TextStyle {
        TextStyle::new(self.config.body_size, self.config.palette.label).bold()
    }

    fn value_style(&self) -> TextStyle {
        TextStyle::new(self.config.body_size, self.config.palette.text)
    }

    /// Draw the gradient header band across the top of the current page with a centred
    /// title and subtitle, returning the `y` just below the band.
    ///
    /// The logo is best-effort: if it cannot be decoded or drawn, the failure is logged
    /// and the header is drawn without it.
    pub fn render_header(&mut self, logo: Option<&[u8]>, title: &str, subtitle: &str) -> Mm {
        let width = self.config.page.width;
        let height = self.config.header_height;
        let gradient = LinearGradient::two_stop(
            self.config.palette.header_start,
            self.config.palette.header_end,
        );
        fill_banded(
            &mut self.canvas,
            &gradient,
            Rect::new(Mm(0.0), Mm(0.0), width, height),
            self.config.gradient_bands,
        );

        if let Some(data) = logo {
            let size = self.config.logo_size;
            let rect = Rect::new(self.config.page.margin, (height - size) / 2.0, size, size);
            if let Err(e) = self.canvas.draw_image(data, rect) {
                log::warn!("drawing the header without its logo: {e}");
            }
        }

        let centre = width / 2.0;
        let style = self.title_style();
        self.canvas
            .draw_text(title, centre, self.config.title_offset, &style);
        let style = self.subtitle_style();
        self.canvas
            .draw_text(subtitle, centre, self.config.subtitle_offset, &style);

        height
    }

    /// Draw the translucent metadata bar at `y`, returning `y + bar height`. The first
    /// field is left-aligned, the last right-aligned, and any in between are spread
    /// evenly across the bar.
    pub fn render_metadata_bar(&mut self, fields: &[MetadataField], y: Mm) -> Mm {
        let margin = self.config.page.margin;
        let width = self.config.content_width();
        let height = self.config.metadata_bar_height;
        let palette = &self.config.palette;
        let fill = palette.bar.over(palette.background, self.config.bar_opacity);
        self.canvas.rounded_rect(
            Rect::new(margin, y, width, height),
            self.config.metadata_bar_radius,
            fill,
        );

        let text_y = y + (height - self.config.line_height) / 2.0;
        let style = self.bar_style();
        let last = fields.len().saturating_sub(1);
        for (i, field) in fields.iter().enumerate() {
            let text = format!("{}: {}", field.label, normalize(field.value.as_deref()));
            let (x, align) = if i == 0 {
                (margin + BAR_PADDING, Align::Left)
            } else if i == last {
                (margin + width - BAR_PADDING, Align::Right)
            } else {
                (margin + width * (i as f32 / last as f32), Align::Center)
            };
            self.canvas
                .draw_text(&text, x, text_y, &style.aligned(align));
        }

        y + height
    }

    /// Draw a bold section title at `y` with a short rule underneath, returning the `y`
    /// below the title block. Titles are assumed to fit on one line.
    pub fn render_section_title(&mut self, title: &str, y: Mm, margin: Mm) -> Mm {
        let heading = SectionTitle {
            text: title.to_string(),
            underline_length: self.config.underline_length,
        };
        let style = self.section_style();
        self.canvas.draw_text(&heading.text, margin, y, &style);

        let rule_y = y + self.config.line_height + Mm(1.0);
        self.canvas.line(
            (margin, rule_y),
            (margin + heading.underline_length, rule_y),
            self.config.underline_width,
            self.config.palette.accent,
        );

        y + self.config.section_title_height
    }

    /// Wrap a row's value to the value column and work out how tall the row will be.
    /// The key is drawn on a single line and does not contribute to the height.
    pub fn measure_key_value(&self, key: &str, value: Option<&str>, max_width: Mm) -> KeyValueBlock {
        let column = max_width - self.config.label_column_width;
        let lines = wrap_text(&self.measurer, value, column, &self.value_style());
        let height = self.config.line_height * lines.len() as f32 + self.config.row_spacing;
        KeyValueBlock {
            key: key.to_string(),
            lines,
            height,
        }
    }

    fn draw_key_value(&mut self, block: &KeyValueBlock, y: Mm, margin: Mm) {
        let style = self.label_style();
        self.canvas.draw_text(&block.key, margin, y, &style);

        let x = margin + self.config.label_column_width;
        let style = self.value_style();
        for (i, line) in block.lines.iter().enumerate() {
            let line_y = y + self.config.line_height * i as f32;
            self.canvas.draw_text(line, x, line_y, &style);
        }
    }

    /// Draw a key/value row at `y`, first moving to a new page if the wrapped row would
    /// not fit. Returns the `y` below the row, which is exactly
    /// `lines * line_height + row_spacing` past where the row was drawn.
    pub fn render_key_value(
        &mut self,
        key: &str,
        value: Option<&str>,
        y: Mm,
        margin: Mm,
        max_width: Mm,
    ) -> Mm {
        let block = self.measure_key_value(key, value, max_width);
        let y = self.check_page_break(y, block.height, self.config.page.height, margin);
        self.draw_key_value(&block, y, margin);
        y + block.height
    }

    /// If `needed` more units at `current_y` would cross the bottom margin, start a new
    /// page and return `margin`; otherwise return `current_y` untouched. Uses the same
    /// rule as [LayoutCursor::reserve], and keeps the composer's cursor on the new page.
    pub fn check_page_break(&mut self, current_y: Mm, needed: Mm, page_height: Mm, margin: Mm) -> Mm {
        if would_overflow(current_y, needed, page_height, margin) {
            log::debug!("page break before block of {needed}mm at y={current_y}mm");
            self.cursor.force_break(&mut self.canvas);
            margin
        } else {
            current_y
        }
    }

    fn enter(&mut self, op: &'static str, from: &[Phase], next: Phase) -> Result<(), ReportError> {
        if from.contains(&self.phase) {
            self.phase = next;
            Ok(())
        } else {
            Err(ReportError::OutOfOrder {
                current: self.phase.name(),
                found: op,
                expected: match self.phase {
                    Phase::Start => "header",
                    Phase::Header => "metadata",
                    Phase::Metadata => "section",
                    Phase::Section | Phase::KeyValue => "section, key/value or finish",
                },
            })
        }
    }

    /// Draw the header band at the top of the first page and move the cursor below it
    pub fn header(&mut self, logo: Option<&[u8]>, title: &str, subtitle: &str) -> Result<(), ReportError> {
        self.enter("draw the header", &[Phase::Start], Phase::Header)?;
        let bottom = self.render_header(logo, title, subtitle) + self.config.block_gap;
        if bottom > self.cursor.y {
            self.cursor.advance(bottom - self.cursor.y);
        }
        Ok(())
    }

    /// Draw the metadata bar below the header. The cursor stops at the bar's bottom edge;
    /// the section that follows supplies its own gap.
    pub fn metadata(&mut self, fields: &[MetadataField]) -> Result<(), ReportError> {
        self.enter("draw the metadata bar", &[Phase::Header], Phase::Metadata)?;
        let height = self.config.metadata_bar_height;
        let y = self.cursor.reserve(&mut self.canvas, height);
        self.render_metadata_bar(fields, y);
        self.cursor.advance(height);
        Ok(())
    }

    /// Start a new section with the given title
    pub fn section(&mut self, title: &str) -> Result<(), ReportError> {
        self.place_section(title, None)
    }

    fn place_section(&mut self, title: &str, first_row: Option<&Entry>) -> Result<(), ReportError> {
        self.enter(
            "start a section",
            &[Phase::Metadata, Phase::Section, Phase::KeyValue],
            Phase::Section,
        )?;

        if self.config.section_break == SectionBreak::NewPage
            && self.sections > 0
            && !self.cursor.at_page_top()
        {
            self.cursor.force_break(&mut self.canvas);
        }
        self.sections += 1;

        let gap = if self.cursor.at_page_top() {
            Mm(0.0)
        } else {
            self.config.block_gap
        };
        let title_height = gap + self.config.section_title_height;
        let keep_with = match first_row {
            Some(entry) if self.config.keep_title_with_first_row => {
                self.measure_key_value(&entry.key, entry.value.as_deref(), self.config.content_width())
                    .height
            }
            _ => Mm(0.0),
        };
        // a title and row that cannot share even a fresh page are placed separately
        let keep_with = if self.config.section_title_height + keep_with > self.cursor.usable_height() {
            Mm(0.0)
        } else {
            keep_with
        };

        let y = self.cursor.reserve(&mut self.canvas, title_height + keep_with);
        // a break lands us at the top of a page, where no gap is wanted
        let y = if self.cursor.at_page_top() { y } else { y + gap };
        let bottom = self.render_section_title(title, y, self.cursor.margin);
        self.cursor.advance(bottom - self.cursor.y);
        Ok(())
    }

    /// Measure, place and draw one key/value row in the current section
    pub fn key_value(&mut self, key: &str, value: Option<&str>) -> Result<(), ReportError> {
        self.enter(
            "place a key/value row",
            &[Phase::Section, Phase::KeyValue],
            Phase::KeyValue,
        )?;
        let block = self.measure_key_value(key, value, self.config.content_width());
        let y = self.cursor.reserve(&mut self.canvas, block.height);
        self.draw_key_value(&block, y, self.cursor.margin);
        self.cursor.advance(block.height);
        Ok(())
    }

    /// Finish layout and hand back whatever the canvas produces
    pub fn finish(self) -> Result<C::Output, ReportError> {
        if self.phase == Phase::Start {
            return Err(ReportError::OutOfOrder {
                current: self.phase.name(),
                found: "finish",
                expected: "header",
            });
        }
        log::debug!("finished layout on {} page(s)", self.canvas.page_count());
        Ok(self.canvas.finish())
    }

    /// Lay out an entire report: header, metadata bar and every section in order
    pub fn compose(mut self, report: &Report, logo: Option<&[u8]>) -> Result<C::Output, ReportError> {
        let subtitle = report
            .subtitle
            .clone()
            .unwrap_or_else(|| format!("Report ID: {}", report.id));
        self.header(logo, &report.title, &subtitle)?;
        self.metadata(&report.metadata)?;
        for section in report.sections.iter() {
            self.place_section(&section.title, section.entries.first())?;
            for entry in section.entries.iter() {
                self.key_value(&entry.key, entry.value.as_deref())?;
            }
        }
        self.finish()
    }
}

/// Lay out `report` into an in-memory [Document] with the given configuration and
/// text measurer, stamping the document info with the report's title and id
pub fn layout_report<M: TextMeasurer>(
    report: &Report,
    config: LayoutConfig,
    measurer: M,
    logo: Option<&[u8]>,
) -> Result<Document, ReportError> {
    let mut canvas = DocumentCanvas::new(config.page.width, config.page.height);
    canvas.set_info(
        Info::new()
            .title(&report.title)
            .subject(format!("Report {}", report.id))
            .created_now()
            .clone(),
    );
    DocumentComposer::new(canvas, measurer, config).compose(report, logo)
}
