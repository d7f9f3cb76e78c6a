use report_gen::{layout_report, DrawCommand, Font, FontMeasurer, LayoutConfig, Report, ReportError};

fn run(path: &str) -> Result<(), ReportError> {
    let report = Report::from_json(&std::fs::read_to_string(path)?)?;

    // measure with real glyph widths
    let regular = Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())?;
    let bold = Font::load(include_bytes!("../assets/DejaVuSans-Bold.ttf").to_vec())?;
    let measurer = FontMeasurer::new(regular, Some(bold));

    let doc = layout_report(&report, LayoutConfig::default(), measurer, None)?;

    println!("{}: {} page(s)", report.title, doc.page_count());
    for (i, page) in doc.pages().enumerate() {
        let shapes = page
            .commands()
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Text { .. }))
            .count();
        println!("page {} ({shapes} shapes)", i + 1);
        for (text, x, y, _) in page.text_runs() {
            println!("  {:>6.1} {:>6.1}  {text}", y.0, x.0);
        }
    }
    Ok(())
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/incident.json".to_string());
    if let Err(e) = run(&path) {
        eprintln!("failed to lay out {path}: {e}");
        std::process::exit(1);
    }
}
