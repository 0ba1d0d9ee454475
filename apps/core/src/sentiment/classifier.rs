//! Heuristic sentiment classification using multilingual keyword lookup.
//!
//! Fast pattern-based polarity detection with no model and no I/O.
//! Designed to run synchronously on every input change.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::lexicon::{Lexicon, LEXICONS};

/// Maximum number of matched terms named in the rationale.
const MAX_RATIONALE_TERMS: usize = 3;

/// Sentiment class of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-class score fractions. Always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self {
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
        }
    }
}

/// Result of classifying one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning sentiment class.
    pub label: SentimentLabel,
    /// Score fractions derived from the trigger counts.
    pub scores: SentimentScores,
    /// Trigger terms of the winning class, in lexicon definition order.
    pub matched_terms: Vec<String>,
    /// Human-readable explanation naming up to the first three matched terms.
    pub rationale: String,
}

/// Keyword-based sentiment classifier.
///
/// Matching is case-insensitive substring containment against every
/// configured language. `classify` is pure and total: any input, including
/// the empty string, produces a result.
pub struct SentimentClassifier {
    lexicons: &'static [Lexicon],
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Creates a classifier over the built-in lexicons.
    pub fn new() -> Self {
        Self { lexicons: LEXICONS }
    }

    /// Classifies a text into positive, neutral, or negative.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();

        let mut positive_matches: Vec<&'static str> = Vec::new();
        let mut negative_matches: Vec<&'static str> = Vec::new();

        for lexicon in self.lexicons {
            for term in lexicon.positive {
                if lowered.contains(term) {
                    positive_matches.push(term);
                }
            }
        }
        for lexicon in self.lexicons {
            for term in lexicon.negative {
                if lowered.contains(term) {
                    negative_matches.push(term);
                }
            }
        }

        let label = match positive_matches.len().cmp(&negative_matches.len()) {
            Ordering::Greater => SentimentLabel::Positive,
            Ordering::Less => SentimentLabel::Negative,
            Ordering::Equal => SentimentLabel::Neutral,
        };

        let scores = Self::scores(positive_matches.len(), negative_matches.len());

        let matched_terms: Vec<String> = match label {
            SentimentLabel::Positive => positive_matches.iter().map(|t| t.to_string()).collect(),
            SentimentLabel::Negative => negative_matches.iter().map(|t| t.to_string()).collect(),
            // A tie has no winning class, so no terms back the verdict.
            SentimentLabel::Neutral => Vec::new(),
        };

        let rationale = Self::rationale(label, &matched_terms);

        ClassificationResult {
            label,
            scores,
            matched_terms,
            rationale,
        }
    }

    fn scores(positive_count: usize, negative_count: usize) -> SentimentScores {
        let total = positive_count + negative_count;
        if total == 0 {
            return SentimentScores::default();
        }
        let positive = positive_count as f64 / total as f64;
        let negative = negative_count as f64 / total as f64;
        SentimentScores {
            positive,
            neutral: 1.0 - positive - negative,
            negative,
        }
    }

    fn rationale(label: SentimentLabel, matched_terms: &[String]) -> String {
        if matched_terms.is_empty() {
            return match label {
                SentimentLabel::Positive => {
                    "This text has a positive tone due to words expressing satisfaction or approval."
                        .to_string()
                }
                SentimentLabel::Negative => {
                    "This text has a negative tone due to words expressing dissatisfaction or criticism."
                        .to_string()
                }
                SentimentLabel::Neutral => {
                    "This text appears to have a neutral tone or balanced positive and negative elements."
                        .to_string()
                }
            };
        }

        let shown: Vec<&str> = matched_terms
            .iter()
            .take(MAX_RATIONALE_TERMS)
            .map(|t| t.as_str())
            .collect();
        let tone = match label {
            SentimentLabel::Positive => "positive",
            _ => "negative",
        };
        format!(
            "This text has a {} tone due to words like \"{}\".",
            tone,
            shown.join("\", \"")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let classifier = SentimentClassifier::new();

        let result = classifier.classify("I love this, it's amazing!");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(
            result.rationale.contains("love") || result.rationale.contains("amazing"),
            "rationale should name a trigger: {}",
            result.rationale
        );
    }

    #[test]
    fn test_negative_text() {
        let classifier = SentimentClassifier::new();

        let result = classifier.classify("This is the worst, I hate it");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(
            result.rationale.contains("worst") || result.rationale.contains("hate"),
            "rationale should name a trigger: {}",
            result.rationale
        );
    }

    #[test]
    fn test_no_matches_is_neutral() {
        let classifier = SentimentClassifier::new();

        let result = classifier.classify("It was fine I guess");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!(result.matched_terms.is_empty());
        assert_eq!(result.scores.neutral, 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = SentimentClassifier::new();

        assert_eq!(
            classifier.classify("GREAT").label,
            classifier.classify("great").label
        );
    }

    #[test]
    fn test_total_on_degenerate_inputs() {
        let classifier = SentimentClassifier::new();

        for text in ["", "   ", "xyz123", "12345", "日本語のテキスト"] {
            let result = classifier.classify(text);
            assert_eq!(result.label, SentimentLabel::Neutral, "input: {:?}", text);
        }
    }

    #[test]
    fn test_deterministic() {
        let classifier = SentimentClassifier::new();

        let a = classifier.classify("an awesome but difficult day");
        let b = classifier.classify("an awesome but difficult day");
        assert_eq!(a.label, b.label);
        assert_eq!(a.matched_terms, b.matched_terms);
        assert_eq!(a.rationale, b.rationale);
    }

    #[test]
    fn test_tie_is_neutral() {
        let classifier = SentimentClassifier::new();

        // One positive trigger, one negative trigger.
        let result = classifier.classify("a good day with a bad ending");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.scores.positive, 0.5);
        assert_eq!(result.scores.negative, 0.5);
    }

    #[test]
    fn test_rationale_caps_at_three_terms() {
        let classifier = SentimentClassifier::new();

        let result = classifier.classify("good great excellent amazing love");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.matched_terms.len() > 3);
        // "amazing" is the fourth match in lexicon order and must not appear.
        assert!(!result.rationale.contains("amazing"));
        assert!(result.rationale.contains("good"));
    }

    #[test]
    fn test_substring_containment_matches_inside_words() {
        let classifier = SentimentClassifier::new();

        // "goodbye" contains the trigger "good". Accepted imprecision.
        let result = classifier.classify("goodbye everyone");
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_multilingual_triggers() {
        let classifier = SentimentClassifier::new();

        assert_eq!(
            classifier.classify("esto es excelente").label,
            SentimentLabel::Positive
        );
        assert_eq!(
            classifier.classify("c'était épouvantable").label,
            SentimentLabel::Negative
        );
        assert_eq!(
            classifier.classify("das war schrecklich").label,
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_scores_sum_to_one() {
        let classifier = SentimentClassifier::new();

        for text in ["great stuff", "hate this", "good and bad", "nothing here"] {
            let scores = classifier.classify(text).scores;
            let sum = scores.positive + scores.neutral + scores.negative;
            assert!((sum - 1.0).abs() < 1e-9, "scores must sum to 1 for {:?}", text);
        }
    }
}
