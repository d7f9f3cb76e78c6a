//! End-to-end layout of whole reports through the public API.

use report_gen::{
    layout_report, Canvas, Document, DocumentCanvas, DocumentComposer, DrawCommand, Entry,
    LayoutConfig, MetadataField, Mm, MonospaceMeasurer, PageGeometry, Report, Section,
    TextMeasurer, TextStyle,
};

/// Wraps every value to exactly `self.0` lines, tagged so they can be told apart
struct FixedLines(usize);

impl TextMeasurer for FixedLines {
    fn wrap_lines(&self, text: &str, _max_width: Mm, _style: &TextStyle) -> Vec<String> {
        (0..self.0).map(|i| format!("{text} / line {i}")).collect()
    }

    fn width_of_text(&self, text: &str, _style: &TextStyle) -> Mm {
        Mm(text.chars().count() as f32)
    }
}

fn short_page() -> LayoutConfig {
    LayoutConfig {
        page: PageGeometry {
            width: Mm(210.0),
            height: Mm(230.0),
            margin: Mm(15.0),
        },
        ..LayoutConfig::default()
    }
}

fn report_with_rows(rows: usize) -> Report {
    Report {
        id: "RPT-20".into(),
        title: "Twenty rows".into(),
        subtitle: Some("Layout check".into()),
        metadata: vec![
            MetadataField::new("Report ID", Some("RPT-20")),
            MetadataField::new("Status", Some("Open")),
        ],
        sections: vec![Section {
            title: "Findings".into(),
            entries: (0..rows)
                .map(|i| Entry::new(format!("Key {i}"), Some(format!("value {i}"))))
                .collect(),
        }],
    }
}

fn texts(doc: &Document, page: usize) -> Vec<(String, Mm)> {
    doc.page(page)
        .expect("page exists")
        .text_runs()
        .map(|(t, _, y, _)| (t.to_string(), y))
        .collect()
}

#[test]
fn lays_out_a_json_report() {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = Report::from_json(
        r#"{
            "id": "RPT-1042",
            "title": "Incident Report",
            "metadata": [
                { "label": "Report ID", "value": "RPT-1042" },
                { "label": "Closed", "value": null }
            ],
            "sections": [
                { "title": "Reporter", "entries": [
                    { "key": "Name", "value": "Jordan Doe" },
                    { "key": "Email" }
                ]},
                { "title": "Details", "entries": [
                    { "key": "Summary", "value": "Door access badge stopped working after the firmware update." }
                ]}
            ]
        }"#,
    )
    .expect("valid report");

    let doc = layout_report(
        &report,
        LayoutConfig::default(),
        MonospaceMeasurer::default(),
        None,
    )
    .expect("report lays out");

    assert_eq!(doc.page_count(), 1);
    let info = doc.info().expect("info is set");
    assert_eq!(info.title.as_deref(), Some("Incident Report"));
    assert_eq!(info.subject.as_deref(), Some("Report RPT-1042"));
    assert!(info.created.is_some());

    let runs: Vec<String> = texts(&doc, 0).into_iter().map(|(t, _)| t).collect();
    assert_eq!(runs[0], "Incident Report");
    assert_eq!(runs[1], "Report ID: RPT-1042");
    assert!(runs.contains(&"Closed: N/A".to_string()));
    assert!(runs.contains(&"Email".to_string()));
    assert!(runs.contains(&"N/A".to_string()));
    assert!(runs.contains(&"Details".to_string()));
}

#[test]
fn twenty_rows_of_three_lines_span_three_pages() {
    // header and metadata bar leave the section starting at y=65 on the first page,
    // so 8 rows of 18 fit there, 11 on the second page and the last one on a third
    let doc = DocumentComposer::new(
        DocumentCanvas::new(Mm(210.0), Mm(230.0)),
        FixedLines(3),
        short_page(),
    )
    .compose(&report_with_rows(20), None)
    .expect("report lays out");

    assert_eq!(doc.page_count(), 3);

    let keys_on = |page| {
        texts(&doc, page)
            .into_iter()
            .filter(|(t, _)| t.starts_with("Key"))
            .count()
    };
    assert_eq!((keys_on(0), keys_on(1), keys_on(2)), (8, 11, 1));
}

#[test]
fn no_row_is_split_across_pages() {
    let lines = 3;
    let doc = DocumentComposer::new(
        DocumentCanvas::new(Mm(210.0), Mm(230.0)),
        FixedLines(lines),
        short_page(),
    )
    .compose(&report_with_rows(45), None)
    .expect("report lays out");

    let bottom = Mm(230.0 - 15.0);
    let mut rows_seen = 0;
    for page in 0..doc.page_count() {
        let runs = texts(&doc, page);
        for (i, (text, y)) in runs.iter().enumerate() {
            if let Some(index) = text.strip_prefix("Key ") {
                rows_seen += 1;
                let values = &runs[i + 1..i + 1 + lines];
                for (n, (line, line_y)) in values.iter().enumerate() {
                    assert_eq!(line, &format!("value {index} / line {n}"));
                    assert!(*line_y + Mm(5.0) <= bottom, "{line} runs past the margin");
                }
                assert!(*y >= Mm(15.0));
            }
        }
    }
    assert_eq!(rows_seen, 45);
}

#[test]
fn long_wrapped_values_keep_the_cursor_in_bounds() {
    let report = Report {
        id: "LONG".into(),
        title: "Long values".into(),
        subtitle: None,
        metadata: vec![MetadataField::new("Report ID", Some("LONG"))],
        sections: (0..4)
            .map(|s| Section {
                title: format!("Section {s}"),
                entries: (0..12)
                    .map(|i| Entry::new(format!("Field {i}"), Some(lipsum::lipsum(10 + i * 7))))
                    .collect(),
            })
            .collect(),
    };

    let config = short_page();
    let doc = layout_report(&report, config.clone(), MonospaceMeasurer::default(), None)
        .expect("report lays out");
    assert!(doc.page_count() > 1);

    for page in doc.pages() {
        for (text, _, y, _) in page.text_runs() {
            assert!(
                y + config.line_height <= config.page.height - config.page.margin,
                "{text:?} at {y} runs past the bottom margin"
            );
        }
    }
}

#[test]
fn broken_logo_does_not_stop_the_build() {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = layout_report(
        &report_with_rows(2),
        LayoutConfig::default(),
        MonospaceMeasurer::default(),
        Some(b"not an image"),
    )
    .expect("report lays out without its logo");

    let page = doc.page(0).expect("first page");
    assert!(!page
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Image { .. })));
    let runs: Vec<String> = texts(&doc, 0).into_iter().map(|(t, _)| t).collect();
    assert_eq!(&runs[..2], &["Twenty rows", "Layout check"]);
}

#[test]
fn independent_builds_run_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let report = report_with_rows(10 * (n + 1));
            std::thread::spawn(move || {
                layout_report(&report, short_page(), MonospaceMeasurer::default(), None)
                    .map(|doc| doc.page_count())
            })
        })
        .collect();

    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread ran").expect("report lays out"))
        .collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn composer_accepts_a_canvas_with_pages_already_in_it() {
    let mut canvas = DocumentCanvas::new(Mm(210.0), Mm(297.0));
    canvas.add_page();
    canvas.add_page();
    let composer = DocumentComposer::new(canvas, MonospaceMeasurer::default(), LayoutConfig::default());
    assert_eq!(composer.cursor().page, 1);
}
