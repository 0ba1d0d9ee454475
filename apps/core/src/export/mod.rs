//! # Export Module
//!
//! Turns an analysis report into a downloadable artifact.
//!
//! Strategies are tried in a fixed order: the formatted document first,
//! then the CSV serializer. A strategy failure is not surfaced unless the
//! last strategy also fails; the caller is told which format was actually
//! produced.
//!
//! ## Components
//! - `csv`: flat CSV serialization with markdown flattening
//! - `report`: DOCX document rendering

pub mod csv;
pub mod report;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::AnalysisReport;

pub use csv::CsvExportStrategy;
pub use report::DocxReportStrategy;

/// Output format of an export strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Csv,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// A rendered, downloadable artifact.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Everything a strategy needs to render one export.
pub struct ExportRequest<'a> {
    /// The report to serialize.
    pub report: &'a AnalysisReport,
    /// Generated insight text, when available.
    pub ai_insights: Option<&'a str>,
    /// Name of the analyzed source (file name, video title, handle).
    pub source_name: &'a str,
}

/// One way of rendering an export.
pub trait ExportStrategy: Send + Sync {
    fn format(&self) -> ExportFormat;
    fn render(&self, request: &ExportRequest<'_>) -> Result<ExportArtifact, AppError>;
}

/// Outcome of a successful export, naming the format actually produced.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub artifact: ExportArtifact,
    pub format: ExportFormat,
}

/// Ordered chain of export strategies.
pub struct ExportPipeline {
    strategies: Vec<Box<dyn ExportStrategy>>,
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportPipeline {
    /// The standard chain: formatted document first, CSV as the fallback.
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(DocxReportStrategy),
                Box::new(CsvExportStrategy),
            ],
        }
    }

    /// Builds a pipeline from an explicit strategy order.
    pub fn with_strategies(strategies: Vec<Box<dyn ExportStrategy>>) -> Self {
        Self { strategies }
    }

    /// Renders the first export that succeeds.
    ///
    /// Failures of earlier strategies are logged and absorbed; only a
    /// failure of the final strategy is returned to the caller.
    pub fn export(&self, request: &ExportRequest<'_>) -> Result<ExportOutcome, AppError> {
        let mut last_error = AppError::Export("no export strategies configured".to_string());

        for strategy in &self.strategies {
            match strategy.render(request) {
                Ok(artifact) => {
                    info!(
                        format = strategy.format().label(),
                        filename = %artifact.filename,
                        "export rendered"
                    );
                    return Ok(ExportOutcome {
                        format: strategy.format(),
                        artifact,
                    });
                }
                Err(e) => {
                    warn!(
                        format = strategy.format().label(),
                        error = %e,
                        "export strategy failed, trying next"
                    );
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Derives the export file name from the source name: the original stem with
/// an `_analysis` suffix and the strategy's extension.
pub fn export_filename(source_name: &str, extension: &str) -> String {
    let stem = std::path::Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("analysis");
    format!("{}_analysis.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_strips_extension() {
        assert_eq!(export_filename("sales.csv", "csv"), "sales_analysis.csv");
        assert_eq!(export_filename("report.final.csv", "docx"), "report.final_analysis.docx");
        assert_eq!(export_filename("no_extension", "csv"), "no_extension_analysis.csv");
        assert_eq!(export_filename("", "csv"), "analysis_analysis.csv");
    }
}
