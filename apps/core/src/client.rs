//! HTTP client for the remote analysis backend.
//!
//! All analysis heavy lifting (CSV profiling, comment fetching, model
//! inference) happens server-side; this client only shapes requests and
//! tolerates partial responses. The `AnalysisApi` trait is the seam tests
//! use to point the engine at a mock server.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::config::EngineConfig;
use crate::error::AppError;
use crate::models::{
    AnalysisResponse, SaveCsvAnalysis, SaveTextAnalysis, SaveTwitterAnalysis, SavedAnalysisRecord,
    TextAnalysisRequest, TwitterAnalysisRequest, YoutubeAnalysisRequest,
};

/// A CSV file staged for upload.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Operations offered by the analysis backend.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze_text(&self, request: &TextAnalysisRequest)
        -> Result<AnalysisResponse, AppError>;

    async fn analyze_csv(&self, upload: &CsvUpload) -> Result<AnalysisResponse, AppError>;

    async fn analyze_youtube(
        &self,
        request: &YoutubeAnalysisRequest,
    ) -> Result<AnalysisResponse, AppError>;

    async fn analyze_twitter(
        &self,
        request: &TwitterAnalysisRequest,
    ) -> Result<AnalysisResponse, AppError>;

    async fn save_text_analysis(
        &self,
        token: &str,
        payload: &SaveTextAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError>;

    async fn save_csv_analysis(
        &self,
        token: &str,
        payload: &SaveCsvAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError>;

    async fn save_twitter_analysis(
        &self,
        token: &str,
        payload: &SaveTwitterAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError>;
}

/// Reqwest-backed implementation of [`AnalysisApi`].
pub struct RemoteAnalysisClient {
    http: Client,
    base_url: String,
}

impl RemoteAnalysisClient {
    /// Builds a client against the configured backend.
    pub fn new(config: &EngineConfig) -> Result<Self, AppError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AnalysisApi for RemoteAnalysisClient {
    async fn analyze_text(
        &self,
        request: &TextAnalysisRequest,
    ) -> Result<AnalysisResponse, AppError> {
        request.validate()?;
        let response = self
            .http
            .post(self.endpoint("/api/analyze/text"))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn analyze_csv(&self, upload: &CsvUpload) -> Result<AnalysisResponse, AppError> {
        info!(filename = %upload.filename, bytes = upload.content.len(), "uploading CSV for analysis");
        let part = Part::bytes(upload.content.clone())
            .file_name(upload.filename.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("/api/analyze/csv"))
            .multipart(form)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn analyze_youtube(
        &self,
        request: &YoutubeAnalysisRequest,
    ) -> Result<AnalysisResponse, AppError> {
        request.validate()?;
        info!(video_url = %request.video_url, "requesting YouTube analysis");
        let response = self
            .http
            .post(self.endpoint("/api/analyze/youtube"))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn analyze_twitter(
        &self,
        request: &TwitterAnalysisRequest,
    ) -> Result<AnalysisResponse, AppError> {
        request.validate()?;
        info!(username = %request.username, count = request.count, "requesting Twitter analysis");
        let response = self
            .http
            .post(self.endpoint("/api/analyze/twitter"))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn save_text_analysis(
        &self,
        token: &str,
        payload: &SaveTextAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError> {
        let response = self
            .http
            .post(self.endpoint("/api/analyze/text/save"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let envelope: SaveEnvelope = parse_response(response).await?;
        Ok(envelope.analysis)
    }

    async fn save_csv_analysis(
        &self,
        token: &str,
        payload: &SaveCsvAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError> {
        let response = self
            .http
            .post(self.endpoint("/api/analyze/csv/save"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let envelope: SaveEnvelope = parse_response(response).await?;
        Ok(envelope.analysis)
    }

    async fn save_twitter_analysis(
        &self,
        token: &str,
        payload: &SaveTwitterAnalysis,
    ) -> Result<SavedAnalysisRecord, AppError> {
        // The backend reuses the analyze endpoint for saves carrying
        // pre-analyzed tweet data.
        let response = self
            .http
            .post(self.endpoint("/api/analyze/twitter"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let envelope: SaveEnvelope = parse_response(response).await?;
        Ok(envelope.analysis)
    }
}

#[derive(Debug, Deserialize)]
struct SaveEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
    analysis: SavedAnalysisRecord,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Maps a backend response to a typed result.
///
/// A non-2xx status becomes `AppError::Api`, carrying the backend's `error`
/// message when the body has one.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(AppError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}
