//! Batch classification with aggregated distribution.

use serde::{Deserialize, Serialize};

use super::classifier::{ClassificationResult, SentimentClassifier, SentimentLabel};

/// Aggregated sentiment over a batch of texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSentiment {
    /// Fraction of texts classified positive.
    pub positive: f64,
    /// Fraction of texts classified neutral.
    pub neutral: f64,
    /// Fraction of texts classified negative.
    pub negative: f64,
    /// Number of texts classified.
    pub total: usize,
    /// Per-text results, in input order.
    pub sentiments: Vec<ClassificationResult>,
}

impl BatchSentiment {
    fn empty() -> Self {
        Self {
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
            total: 0,
            sentiments: Vec::new(),
        }
    }
}

impl SentimentClassifier {
    /// Classifies each text and aggregates the class distribution.
    ///
    /// An empty batch yields an all-zero distribution.
    pub fn classify_batch<'a, I>(&self, texts: I) -> BatchSentiment
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sentiments: Vec<ClassificationResult> =
            texts.into_iter().map(|t| self.classify(t)).collect();

        let total = sentiments.len();
        if total == 0 {
            return BatchSentiment::empty();
        }

        let count_of = |label: SentimentLabel| {
            sentiments.iter().filter(|r| r.label == label).count() as f64 / total as f64
        };

        BatchSentiment {
            positive: count_of(SentimentLabel::Positive),
            neutral: count_of(SentimentLabel::Neutral),
            negative: count_of(SentimentLabel::Negative),
            total,
            sentiments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let classifier = SentimentClassifier::new();

        let batch = classifier.classify_batch(std::iter::empty::<&str>());
        assert_eq!(batch.total, 0);
        assert_eq!(batch.positive, 0.0);
        assert_eq!(batch.neutral, 0.0);
        assert_eq!(batch.negative, 0.0);
        assert!(batch.sentiments.is_empty());
    }

    #[test]
    fn test_distribution() {
        let classifier = SentimentClassifier::new();

        let batch = classifier.classify_batch([
            "what a wonderful day",
            "this is terrible",
            "it simply exists",
            "awesome work",
        ]);

        assert_eq!(batch.total, 4);
        assert_eq!(batch.positive, 0.5);
        assert_eq!(batch.negative, 0.25);
        assert_eq!(batch.neutral, 0.25);
        assert_eq!(batch.sentiments.len(), 4);
        assert_eq!(batch.sentiments[0].label, SentimentLabel::Positive);
        assert_eq!(batch.sentiments[1].label, SentimentLabel::Negative);
    }
}
