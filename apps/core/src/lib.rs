//! # SentiScope Core
//!
//! Client-side analysis engine for the SentiScope sentiment-analysis product.
//! The UI shell embeds this crate and calls into [`service::AnalysisService`].
//!
//! ## Components
//! - `sentiment`: instant keyword-based classification, no backend needed
//! - `cleaner`: social-media artifact removal before classification
//! - `cache`: TTL-expiring cache of remote analysis results
//! - `youtube`: video-id extraction and cache-key derivation
//! - `client`: HTTP client for the remote analysis backend
//! - `export`: CSV / DOCX export with a degrade-gracefully fallback chain
//! - `service`: orchestration of all of the above

pub mod cache;
pub mod cleaner;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod sentiment;
pub mod service;
pub mod telemetry;
pub mod youtube;

#[cfg(test)]
mod tests;

pub use cache::{AnalysisCache, Clock, SystemClock};
pub use client::{AnalysisApi, CsvUpload, RemoteAnalysisClient};
pub use config::EngineConfig;
pub use error::AppError;
pub use export::{ExportArtifact, ExportFormat, ExportOutcome, ExportPipeline};
pub use sentiment::{ClassificationResult, SentimentClassifier, SentimentLabel};
pub use service::{AnalysisService, TextAnalysisOutcome, TwitterOptions};
