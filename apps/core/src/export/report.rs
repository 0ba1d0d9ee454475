//! Formatted DOCX rendering of an analysis report.

use std::io::Cursor;

use chrono::Utc;
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::error::AppError;
use crate::models::AnalysisReport;

use super::csv::flatten_markdown;
use super::{export_filename, ExportArtifact, ExportFormat, ExportRequest, ExportStrategy};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The rich document export, preferred over CSV when it succeeds.
pub struct DocxReportStrategy;

impl ExportStrategy for DocxReportStrategy {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, request: &ExportRequest<'_>) -> Result<ExportArtifact, AppError> {
        let docx = build_document(request);

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| AppError::Export(format!("DOCX packing failed: {}", e)))?;

        let bytes = buffer.into_inner();
        if bytes.is_empty() {
            return Err(AppError::Export("DOCX renderer produced no output".to_string()));
        }

        Ok(ExportArtifact {
            filename: export_filename(request.source_name, "docx"),
            content_type: DOCX_CONTENT_TYPE,
            bytes,
        })
    }
}

fn build_document(request: &ExportRequest<'_>) -> Docx {
    let report = request.report;

    let mut docx = Docx::new()
        .add_paragraph(heading(&format!("Analysis Report: {}", request.source_name), 32))
        .add_paragraph(text_paragraph(&format!(
            "Generated: {}",
            Utc::now().to_rfc3339()
        )));

    if let Some(summary) = &report.summary {
        docx = docx.add_paragraph(heading("Summary", 28)).add_table(Table::new(vec![
            key_value_row("Rows", &summary.rows.to_string()),
            key_value_row("Columns", &summary.columns.to_string()),
            key_value_row("Missing Values", &summary.missing_values.to_string()),
            key_value_row("Duplicate Rows", &summary.duplicate_rows.to_string()),
        ]));
    }

    if let Some(tally) = &report.sentiment_summary {
        docx = docx.add_paragraph(heading("Sentiment", 28)).add_table(Table::new(vec![
            key_value_row("Positive", &format!("{:.1}%", tally.positive * 100.0)),
            key_value_row("Neutral", &format!("{:.1}%", tally.neutral * 100.0)),
            key_value_row("Negative", &format!("{:.1}%", tally.negative * 100.0)),
            key_value_row("Items", &tally.total.to_string()),
        ]));
    }

    if !report.columns.is_empty() {
        let mut rows = vec![TableRow::new(vec![
            header_cell("Name"),
            header_cell("Missing"),
            header_cell("Unique"),
            header_cell("Mean"),
        ])];
        for column in &report.columns {
            rows.push(TableRow::new(vec![
                text_cell(&column.name),
                text_cell(&column.missing.to_string()),
                text_cell(&column.unique_values.to_string()),
                text_cell(&column.mean.map_or_else(|| "N/A".to_string(), |v| format!("{}", v))),
            ]));
        }
        docx = docx.add_paragraph(heading("Columns", 28)).add_table(Table::new(rows));
    }

    if !report.correlations.is_empty() {
        let mut rows = vec![TableRow::new(vec![
            header_cell("Column 1"),
            header_cell("Column 2"),
            header_cell("Correlation"),
        ])];
        for pair in &report.correlations {
            rows.push(TableRow::new(vec![
                text_cell(&pair.column1),
                text_cell(&pair.column2),
                text_cell(&format!("{}", pair.correlation)),
            ]));
        }
        docx = docx
            .add_paragraph(heading("Correlations", 28))
            .add_table(Table::new(rows));
    }

    let mut insight_text = report.insights.join("\n");
    if let Some(extra) = request.ai_insights {
        if !insight_text.is_empty() {
            insight_text.push('\n');
        }
        insight_text.push_str(extra);
    }
    if !insight_text.trim().is_empty() {
        docx = docx.add_paragraph(heading("Insights", 28));
        for line in flatten_markdown(&insight_text).lines() {
            docx = docx.add_paragraph(text_paragraph(line));
        }
    }

    docx
}

fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(size).bold())
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(text_paragraph(text))
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()))
}

fn key_value_row(key: &str, value: &str) -> TableRow {
    TableRow::new(vec![header_cell(key), text_cell(value)])
}
