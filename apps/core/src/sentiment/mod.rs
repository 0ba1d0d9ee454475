//! # Sentiment Module
//!
//! Fast, non-ML sentiment analysis for SentiScope.
//! Gives instant feedback on raw text without a backend round-trip.
//!
//! ## Components
//! - `lexicon`: multilingual trigger-term tables
//! - `classifier`: keyword-based polarity classification
//! - `aggregate`: batch classification with distribution
//! - `emotions`: keyword-based emotion detection
//! - `insights`: deterministic insight text from summaries

pub mod aggregate;
pub mod classifier;
pub mod emotions;
pub mod insights;
pub mod lexicon;

pub use aggregate::BatchSentiment;
pub use classifier::{ClassificationResult, SentimentClassifier, SentimentLabel, SentimentScores};
pub use emotions::{detect_emotions, EmotionScores};
pub use insights::SocialSource;
pub use lexicon::{Lexicon, LEXICONS};
