//! Wire and report types exchanged with the analysis backend.
//!
//! The backend omits optional sections freely, so every field it may skip is
//! either an `Option` or carries a serde default. Deserialization must never
//! fail just because a section is absent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::sentiment::{SentimentLabel, SentimentScores};

/// High-level shape of a dataset, as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    #[serde(default)]
    pub rows: u64,
    #[serde(default)]
    pub columns: u64,
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub missing_values: u64,
    #[serde(default)]
    pub duplicate_rows: u64,
}

/// Broad column category assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Datetime,
}

/// Per-column statistics. Numeric fields are only present for numeric
/// columns, and may be absent even then.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    #[serde(default)]
    pub dtype: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<ColumnKind>,
    #[serde(default)]
    pub missing: u64,
    #[serde(default)]
    pub unique_values: u64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
    /// Top categorical values with their counts.
    #[serde(default)]
    pub top_values: BTreeMap<String, u64>,
}

/// One pairwise correlation between numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column1: String,
    pub column2: String,
    pub correlation: f64,
}

/// Aggregated sentiment distribution for a batch of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentTally {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
    #[serde(default, alias = "total_comments", alias = "total_tweets")]
    pub total: u64,
}

/// Metadata about an analyzed YouTube video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A single analyzed comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
    #[serde(default)]
    pub sentiment_score: Option<SentimentScores>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A single analyzed tweet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
}

/// Metadata about the analyzed social account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
}

/// Engagement-derived metrics for a video or account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementMetrics {
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub engagement_sentiment: Option<SentimentScores>,
}

/// Structured analysis report produced by the backend.
///
/// Every source type (CSV, YouTube, Twitter) fills a different subset of
/// these sections; consumers must treat every section as optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub summary: Option<DatasetSummary>,
    #[serde(default)]
    pub columns: Vec<ColumnStats>,
    #[serde(default)]
    pub correlations: Vec<CorrelationPair>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub sentiment_summary: Option<SentimentTally>,
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
    #[serde(default)]
    pub comments: Vec<CommentEntry>,
    #[serde(default)]
    pub tweets: Vec<TweetEntry>,
    #[serde(default)]
    pub user_info: Option<AccountInfo>,
    #[serde(default)]
    pub engagement_metrics: Option<EngagementMetrics>,
    #[serde(default)]
    pub emotions: BTreeMap<String, f64>,
    /// Language tag to share-of-items percentage.
    #[serde(default)]
    pub languages: BTreeMap<String, f64>,
}

/// A persisted analysis record, as echoed back by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAnalysisRecord {
    pub id: String,
    pub analysis_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Envelope returned by every analyze endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub result: AnalysisReport,
    #[serde(default)]
    pub ai_insights: Option<String>,
    #[serde(default)]
    pub analysis: Option<SavedAnalysisRecord>,
}

// --- Request payloads ---

/// Request body for a remote plain-text analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TextAnalysisRequest {
    #[validate(length(min = 1))]
    pub text: String,
}

/// Request body for a YouTube comment analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct YoutubeAnalysisRequest {
    #[validate(url)]
    pub video_url: String,
    #[serde(default)]
    pub max_comments: u32,
}

/// Request body for a Twitter/X account analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TwitterAnalysisRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(default)]
    pub include_rts: bool,
    #[serde(default)]
    pub exclude_replies: bool,
    #[validate(range(min = 10, max = 100))]
    pub count: u32,
}

// --- Persistence payloads ---

/// Normalized dataset digest forwarded when saving a CSV analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedAnalysisSummary {
    pub rows: u64,
    pub columns: u64,
    #[serde(default)]
    pub missing_values: u64,
    #[serde(default)]
    pub duplicate_rows: u64,
    /// At most the first ten column names.
    #[serde(default)]
    pub column_names: Vec<String>,
    /// Truncated preview of the generated insights.
    #[serde(default)]
    pub insights_preview: Option<String>,
    pub filename: String,
}

/// Payload for saving a text analysis to the user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTextAnalysis {
    pub text: String,
    pub text_preview: String,
    pub sentiment_scores: SentimentScores,
    pub ai_insights: String,
}

/// Payload for saving a CSV analysis to the user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCsvAnalysis {
    pub filename: String,
    pub row_count: u64,
    pub sentiment_distribution: SentimentScores,
    pub ai_insights: String,
    pub dataset_summary: SavedAnalysisSummary,
}

/// Payload for saving a Twitter analysis to the user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTwitterAnalysis {
    pub username: String,
    pub tweet_count: u64,
    pub sentiment_scores: SentimentScores,
    pub ai_insights: String,
    /// Serialized tweet data, opaque to this client.
    pub tweets_data: String,
    #[serde(default)]
    pub metadata: Option<String>,
}
