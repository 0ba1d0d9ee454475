//! CSV serialization of an analysis report.
//!
//! The output is a single text stream: a commented header, a key/value
//! summary, a per-column statistics table, an optional correlations section,
//! and the insight text flattened to plain lines. Sections whose data is
//! absent are omitted entirely; absent numeric statistics inside a kept
//! section are written as `N/A`.

use chrono::Utc;

use crate::error::AppError;
use crate::models::{AnalysisReport, ColumnKind};

use super::{export_filename, ExportArtifact, ExportFormat, ExportRequest, ExportStrategy};

/// CSV export, the terminal strategy of the pipeline.
pub struct CsvExportStrategy;

impl ExportStrategy for CsvExportStrategy {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, request: &ExportRequest<'_>) -> Result<ExportArtifact, AppError> {
        let text = render_csv(request);
        if text.is_empty() {
            return Err(AppError::Export("CSV serializer produced no output".to_string()));
        }
        Ok(ExportArtifact {
            filename: export_filename(request.source_name, "csv"),
            content_type: "text/csv",
            bytes: text.into_bytes(),
        })
    }
}

fn render_csv(request: &ExportRequest<'_>) -> String {
    let report = request.report;
    let mut out = String::new();

    out.push_str("# Analysis Export\n");
    out.push_str(&format!("# Source: {}\n", request.source_name));
    out.push_str(&format!("# Generated: {}\n", Utc::now().to_rfc3339()));
    out.push('\n');

    if let Some(summary) = &report.summary {
        out.push_str("## Summary\n");
        out.push_str("Metric,Value\n");
        out.push_str(&format!("Rows,{}\n", summary.rows));
        out.push_str(&format!("Columns,{}\n", summary.columns));
        out.push_str(&format!("Missing Values,{}\n", summary.missing_values));
        out.push_str(&format!("Duplicate Rows,{}\n", summary.duplicate_rows));
        out.push('\n');
    }

    if let Some(tally) = &report.sentiment_summary {
        out.push_str("## Sentiment\n");
        out.push_str("Positive,Neutral,Negative,Total\n");
        out.push_str(&format!(
            "{},{},{},{}\n",
            tally.positive, tally.neutral, tally.negative, tally.total
        ));
        out.push('\n');
    }

    if !report.columns.is_empty() {
        out.push_str("## Columns\n");
        out.push_str("Name,Type,Missing,Unique,Min,Max,Mean,Median,Std Dev\n");
        for column in &report.columns {
            out.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                escape(&column.name),
                kind_label(column.kind),
                column.missing,
                column.unique_values,
                stat(column.min),
                stat(column.max),
                stat(column.mean),
                stat(column.median),
                stat(column.std),
            ));
        }
        out.push('\n');
    }

    if !report.correlations.is_empty() {
        out.push_str("## Correlations\n");
        out.push_str("Column 1,Column 2,Correlation\n");
        for pair in &report.correlations {
            out.push_str(&format!(
                "{},{},{}\n",
                escape(&pair.column1),
                escape(&pair.column2),
                pair.correlation
            ));
        }
        out.push('\n');
    }

    let insight_lines: Vec<&str> = report.insights.iter().map(|s| s.as_str()).collect();
    let insights_text = if let Some(extra) = request.ai_insights {
        let mut combined = insight_lines.join("\n");
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(extra);
        combined
    } else {
        insight_lines.join("\n")
    };

    if !insights_text.trim().is_empty() {
        out.push_str("## Insights\n");
        for line in flatten_markdown(&insights_text).lines() {
            out.push_str(&format!("{}\n", escape(line)));
        }
    }

    out
}

fn kind_label(kind: Option<ColumnKind>) -> &'static str {
    match kind {
        Some(ColumnKind::Numeric) => "numeric",
        Some(ColumnKind::Categorical) => "categorical",
        Some(ColumnKind::Datetime) => "datetime",
        None => "unknown",
    }
}

fn stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}

/// Escapes one CSV field: quote when it contains a delimiter, quote, or
/// newline, doubling embedded quotes.
pub fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Flattens light markdown into plain text lines: heading markers are
/// stripped, bullet markers become a plain asterisk, runs of blank lines
/// collapse to one.
pub fn flatten_markdown(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = false;

    for raw in text.lines() {
        let trimmed = raw.trim();

        let flattened = if let Some(heading) = trimmed.strip_prefix('#') {
            heading.trim_start_matches('#').trim().to_string()
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
            .or_else(|| trimmed.strip_prefix("+ "))
        {
            format!("* {}", item.trim())
        } else {
            trimmed.to_string()
        };

        if flattened.is_empty() {
            if !previous_blank && !lines.is_empty() {
                lines.push(String::new());
            }
            previous_blank = true;
        } else {
            lines.push(flattened);
            previous_blank = false;
        }
    }

    // Drop a trailing blank left by the collapse.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_field() {
        assert_eq!(escape("age"), "age");
    }

    #[test]
    fn test_escape_delimiters_and_quotes() {
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_flatten_markdown_headings_and_bullets() {
        let text = "## Findings\n\n\n- first point\n* second point\n+ third point\n\nplain text";
        let flat = flatten_markdown(text);
        assert_eq!(
            flat,
            "Findings\n\n* first point\n* second point\n* third point\n\nplain text"
        );
    }

    #[test]
    fn test_flatten_markdown_collapses_blank_runs() {
        let flat = flatten_markdown("a\n\n\n\nb");
        assert_eq!(flat, "a\n\nb");
    }
}
