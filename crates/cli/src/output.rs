use labelcheck_core::FieldStatus;
use labelcheck_ocr::{BatchReport, LabelReport};

pub fn print_batch(json: bool, batch: &BatchReport) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(batch)?);
    } else {
        print!("{}", render_batch(batch));
    }
    Ok(())
}

fn status_label(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Detected => "ok",
        FieldStatus::Missing => "MISSING",
        FieldStatus::FormattingIssue => "CHECK",
    }
}

pub fn render_report(report: &LabelReport) -> String {
    let s = &report.summary;
    let verdict = if s.is_compliant { "compliant" } else { "needs review" };
    let mut out = format!(
        "{}: {verdict} ({} detected, {} missing, {} formatting issues)\n",
        report.filename, s.detected, s.missing, s.formatting_issues
    );

    for row in report.fields.rows() {
        let value = row.value.map(|v| v.replace('\n', " ")).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {:<20} {:<8} {:.2}  {value}\n",
            row.name,
            status_label(row.status),
            row.confidence
        ));
        for issue in row.issues {
            out.push_str(&format!("      ! {issue}\n"));
        }
    }
    out
}

pub fn render_batch(batch: &BatchReport) -> String {
    let mut out = String::new();
    for report in &batch.results {
        out.push_str(&render_report(report));
        out.push('\n');
    }
    for failure in &batch.failures {
        out.push_str(&format!("{}: failed: {}\n", failure.filename, failure.error));
    }
    let b = &batch.batch_summary;
    out.push_str(&format!(
        "{} labels, {} fully compliant, {} need review\n",
        b.total_images, b.fully_compliant, b.needs_review
    ));
    out
}
