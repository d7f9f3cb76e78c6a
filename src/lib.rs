//! A paginated layout engine for multi-section reports.
//!
//! A [DocumentComposer] walks a report (header band, metadata bar, titled sections of
//! key/value rows) down fixed-size pages, using a [LayoutCursor] to decide where each
//! block goes and when a new page is needed. It draws through the [Canvas] trait and
//! measures text through the [TextMeasurer] trait, so any backend can host it; the
//! bundled [DocumentCanvas] records everything into a [Document] for an encoder to
//! serialize.
//!
//! ```
//! use report_gen::{layout_report, LayoutConfig, MonospaceMeasurer, Report};
//!
//! let report = Report::from_json(r#"{
//!     "id": "RPT-7",
//!     "title": "Incident Report",
//!     "metadata": [{ "label": "Report ID", "value": "RPT-7" }, { "label": "Status" }],
//!     "sections": [{ "title": "Reporter", "entries": [{ "key": "Name", "value": "J. Doe" }] }]
//! }"#).expect("valid report");
//!
//! let doc = layout_report(&report, LayoutConfig::default(), MonospaceMeasurer::default(), None)
//!     .expect("report lays out");
//! assert_eq!(doc.page_count(), 1);
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod composer;
pub use composer::*;

mod config;
pub use config::*;

mod cursor;
pub use cursor::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod gradient;
pub use gradient::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod measure;
pub use measure::*;

mod page;
pub use page::*;

/// Pre-defined paper sizes
pub mod pagesize;

mod palette;
pub use palette::*;

mod rect;
pub use rect::*;

mod report;
pub use report::*;

mod units;
pub use units::*;

/// Line wrapping and missing-value normalization
pub mod wrap;

mod error;
pub use error::*;
