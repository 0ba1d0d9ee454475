//! Analysis orchestration.
//!
//! `AnalysisService` is what a UI page talks to. It wires the local
//! classifier, the result cache, the remote client, and the export pipeline
//! together, and owns all input validation so bad input is rejected before
//! any work starts.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::cache::AnalysisCache;
use crate::cleaner;
use crate::client::{AnalysisApi, CsvUpload, RemoteAnalysisClient};
use crate::config::EngineConfig;
use crate::error::AppError;
use crate::export::{ExportOutcome, ExportPipeline, ExportRequest};
use crate::models::{
    AnalysisResponse, SaveCsvAnalysis, SaveTextAnalysis, SaveTwitterAnalysis, SavedAnalysisRecord,
    SavedAnalysisSummary, SentimentTally, TwitterAnalysisRequest, YoutubeAnalysisRequest,
};
use crate::sentiment::{
    detect_emotions, insights, ClassificationResult, EmotionScores, SentimentClassifier,
    SentimentLabel, SentimentScores,
};
use crate::youtube;

/// Upload size ceiling for CSV files.
const MAX_CSV_BYTES: usize = 10 * 1024 * 1024;
/// Saved text analyses carry a preview this long.
const TEXT_PREVIEW_CHARS: usize = 150;
/// Saved dataset summaries carry an insights preview this long.
const INSIGHTS_PREVIEW_CHARS: usize = 200;
/// At most this many column names are persisted with a dataset summary.
const SAVED_COLUMN_NAMES: usize = 10;

/// Result of a local (offline) text analysis.
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysisOutcome {
    pub result: ClassificationResult,
    pub emotions: EmotionScores,
    pub ai_insights: String,
    /// Local record of the analysis, shaped like a backend one.
    pub analysis: SavedAnalysisRecord,
}

/// Fetch options for a Twitter/X analysis.
#[derive(Debug, Clone, Copy)]
pub struct TwitterOptions {
    pub include_rts: bool,
    pub exclude_replies: bool,
    pub count: u32,
}

impl Default for TwitterOptions {
    fn default() -> Self {
        Self {
            include_rts: false,
            exclude_replies: false,
            count: 100,
        }
    }
}

/// Front door of the analysis engine.
pub struct AnalysisService {
    api: Arc<dyn AnalysisApi>,
    cache: AnalysisCache<AnalysisResponse>,
    classifier: SentimentClassifier,
    exporter: ExportPipeline,
    config: EngineConfig,
}

impl AnalysisService {
    /// Creates a service against the configured backend.
    pub fn new(config: EngineConfig) -> Result<Self, AppError> {
        let api = Arc::new(RemoteAnalysisClient::new(&config)?);
        Ok(Self::with_api(config, api))
    }

    /// Creates a service with an explicit backend implementation.
    pub fn with_api(config: EngineConfig, api: Arc<dyn AnalysisApi>) -> Self {
        let cache = AnalysisCache::new(config.cache_ttl, config.cache_capacity);
        Self::with_api_and_cache(config, api, cache)
    }

    /// Creates a service with an explicit backend and cache, the seam used
    /// by tests to control the clock.
    pub fn with_api_and_cache(
        config: EngineConfig,
        api: Arc<dyn AnalysisApi>,
        cache: AnalysisCache<AnalysisResponse>,
    ) -> Self {
        Self {
            api,
            cache,
            classifier: SentimentClassifier::new(),
            exporter: ExportPipeline::new(),
            config,
        }
    }

    /// Classifies pasted text locally, with no backend round-trip.
    ///
    /// Never fails: input whose cleanup leaves nothing meaningful yields a
    /// neutral result with a fixed explanation.
    pub fn analyze_text(&self, text: &str) -> TextAnalysisOutcome {
        let cleaned = cleaner::clean_comment_block(text);
        if cleaned.trim().is_empty() {
            return Self::empty_content_outcome(text);
        }

        let result = self.classifier.classify(&cleaned);
        let emotions = detect_emotions(&cleaned);
        let ai_insights = insights::text_insights(result.label);
        let analysis = local_record(
            "text",
            json!({
                "text": text,
                "sentiment_scores": result.scores,
                "ai_insights": ai_insights,
            }),
        );

        TextAnalysisOutcome {
            result,
            emotions,
            ai_insights,
            analysis,
        }
    }

    /// Uploads a CSV file for remote analysis.
    pub async fn analyze_csv(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<AnalysisResponse, AppError> {
        validate_csv_upload(filename, content)?;
        let upload = CsvUpload {
            filename: filename.to_string(),
            content: content.to_vec(),
        };
        self.api.analyze_csv(&upload).await
    }

    /// Analyzes the comments of a YouTube video, serving a fresh cached
    /// result when one exists for the derived video key.
    ///
    /// A failed fetch leaves the cache unmodified.
    pub async fn analyze_youtube(&self, video_url: &str) -> Result<AnalysisResponse, AppError> {
        let video_id = youtube::extract_video_id(video_url)?;
        let key = youtube::video_cache_key(&video_id, self.config.max_comments);

        if let Some(hit) = self.cache.get(&key) {
            info!(%video_id, "serving YouTube analysis from cache");
            return Ok(hit);
        }

        let request = YoutubeAnalysisRequest {
            video_url: video_url.to_string(),
            max_comments: self.config.max_comments,
        };
        let response = self.api.analyze_youtube(&request).await?;
        self.cache.put(&key, response.clone());
        Ok(response)
    }

    /// Analyzes the recent tweets of an account.
    pub async fn analyze_twitter(
        &self,
        handle: &str,
        options: TwitterOptions,
    ) -> Result<AnalysisResponse, AppError> {
        let username = handle.trim().trim_start_matches('@').to_string();
        if username.is_empty() {
            return Err(AppError::Validation("No username provided".to_string()));
        }

        let upper = self.config.max_tweets.clamp(10, 100);
        let request = TwitterAnalysisRequest {
            username,
            include_rts: options.include_rts,
            exclude_replies: options.exclude_replies,
            count: options.count.clamp(10, upper),
        };
        self.api.analyze_twitter(&request).await
    }

    /// Renders a report into a downloadable artifact, degrading from the
    /// formatted document to CSV when necessary.
    pub fn export_analysis(
        &self,
        report: &crate::models::AnalysisReport,
        ai_insights: Option<&str>,
        source_name: &str,
    ) -> Result<ExportOutcome, AppError> {
        self.exporter.export(&ExportRequest {
            report,
            ai_insights,
            source_name,
        })
    }

    /// Persists a local text analysis to the user's profile.
    pub async fn save_text_analysis(
        &self,
        token: &str,
        text: &str,
        outcome: &TextAnalysisOutcome,
    ) -> Result<SavedAnalysisRecord, AppError> {
        let payload = SaveTextAnalysis {
            text: text.to_string(),
            text_preview: preview(text, TEXT_PREVIEW_CHARS),
            sentiment_scores: outcome.result.scores,
            ai_insights: outcome.ai_insights.clone(),
        };
        self.api.save_text_analysis(token, &payload).await
    }

    /// Persists a CSV analysis to the user's profile, forwarding a
    /// normalized dataset digest.
    pub async fn save_csv_analysis(
        &self,
        token: &str,
        filename: &str,
        response: &AnalysisResponse,
    ) -> Result<SavedAnalysisRecord, AppError> {
        let summary = response.result.summary.clone().unwrap_or_default();
        let ai_insights = response
            .ai_insights
            .clone()
            .unwrap_or_else(|| response.result.insights.join("\n"));

        let dataset_summary = SavedAnalysisSummary {
            rows: summary.rows,
            columns: summary.columns,
            missing_values: summary.missing_values,
            duplicate_rows: summary.duplicate_rows,
            column_names: summary
                .column_names
                .iter()
                .take(SAVED_COLUMN_NAMES)
                .cloned()
                .collect(),
            insights_preview: Some(preview(&ai_insights, INSIGHTS_PREVIEW_CHARS)),
            filename: filename.to_string(),
        };

        let payload = SaveCsvAnalysis {
            filename: filename.to_string(),
            row_count: summary.rows,
            sentiment_distribution: SentimentScores {
                positive: 0.0,
                neutral: 0.0,
                negative: 0.0,
            },
            ai_insights,
            dataset_summary,
        };
        self.api.save_csv_analysis(token, &payload).await
    }

    /// Persists a Twitter analysis to the user's profile.
    pub async fn save_twitter_analysis(
        &self,
        token: &str,
        username: &str,
        response: &AnalysisResponse,
    ) -> Result<SavedAnalysisRecord, AppError> {
        let tally = response
            .result
            .sentiment_summary
            .clone()
            .unwrap_or_else(SentimentTally::default);

        let payload = SaveTwitterAnalysis {
            username: username.trim().trim_start_matches('@').to_string(),
            tweet_count: tally.total,
            sentiment_scores: SentimentScores {
                positive: tally.positive,
                neutral: tally.neutral,
                negative: tally.negative,
            },
            ai_insights: response.ai_insights.clone().unwrap_or_default(),
            tweets_data: serde_json::to_string(&response.result.tweets)?,
            metadata: None,
        };
        self.api.save_twitter_analysis(token, &payload).await
    }

    fn empty_content_outcome(original_text: &str) -> TextAnalysisOutcome {
        let ai_insights =
            "The provided text appears to contain only formatting or non-meaningful content."
                .to_string();
        let result = ClassificationResult {
            label: SentimentLabel::Neutral,
            scores: SentimentScores {
                positive: 0.33,
                neutral: 0.34,
                negative: 0.33,
            },
            matched_terms: Vec::new(),
            rationale: "No meaningful content to analyze".to_string(),
        };
        let analysis = local_record(
            "text",
            json!({
                "text": original_text,
                "sentiment_scores": result.scores,
                "ai_insights": ai_insights,
            }),
        );
        TextAnalysisOutcome {
            result,
            emotions: EmotionScores::default(),
            ai_insights,
            analysis,
        }
    }
}

fn local_record(analysis_type: &str, data: serde_json::Value) -> SavedAnalysisRecord {
    SavedAnalysisRecord {
        id: Uuid::new_v4().to_string(),
        analysis_type: analysis_type.to_string(),
        created_at: Utc::now(),
        user_id: None,
        data,
    }
}

fn validate_csv_upload(filename: &str, content: &[u8]) -> Result<(), AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.to_lowercase().ends_with(".csv") {
        return Err(AppError::Validation(
            "Please upload a valid CSV file. Only .csv files are supported.".to_string(),
        ));
    }
    if content.is_empty() {
        return Err(AppError::Validation(
            "The CSV file is empty or contains no data".to_string(),
        ));
    }
    if content.len() > MAX_CSV_BYTES {
        return Err(AppError::Validation(
            "File too large. Please upload a CSV file smaller than 10MB.".to_string(),
        ));
    }
    let text = String::from_utf8_lossy(content);
    if !text.contains(',') && !text.contains(';') {
        return Err(AppError::Validation(
            "The file does not appear to be a valid CSV. Please check the file format.".to_string(),
        ));
    }
    Ok(())
}

/// Truncates to at most `max_chars` characters, marking the cut with an
/// ellipsis. Operates on characters, not bytes.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}
