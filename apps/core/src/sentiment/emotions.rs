//! Keyword-based emotion detection.
//!
//! Same matching model as the sentiment classifier: lowercase substring
//! containment, no tokenization. Scores are normalized so non-zero results
//! sum to 1.0.

use serde::{Deserialize, Serialize};

const JOY_TERMS: &[&str] = &[
    "happy", "joy", "delighted", "thrilled", "excited", "glad", "pleased", "love", "wonderful",
    "amazing",
];

const SADNESS_TERMS: &[&str] = &[
    "sad", "unhappy", "depressed", "miserable", "heartbroken", "gloomy", "disappointed", "upset",
    "crying",
];

const ANGER_TERMS: &[&str] = &[
    "angry", "furious", "outraged", "annoyed", "irritated", "mad", "hate", "rage", "frustrated",
];

const FEAR_TERMS: &[&str] = &[
    "afraid", "scared", "frightened", "terrified", "anxious", "worried", "nervous", "panic",
];

const SURPRISE_TERMS: &[&str] = &[
    "surprised", "shocked", "astonished", "amazed", "stunned", "unexpected", "wow",
];

const DISGUST_TERMS: &[&str] = &["disgusted", "gross", "revolting", "nasty", "yuck", "eww", "repulsed"];

/// Normalized emotion scores for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub disgust: f64,
}

impl EmotionScores {
    /// True when no emotion keyword matched at all.
    pub fn is_empty(&self) -> bool {
        self.joy == 0.0
            && self.sadness == 0.0
            && self.anger == 0.0
            && self.fear == 0.0
            && self.surprise == 0.0
            && self.disgust == 0.0
    }
}

/// Detects emotions in a text by keyword lookup.
pub fn detect_emotions(text: &str) -> EmotionScores {
    let lowered = text.to_lowercase();

    let hits = |terms: &[&str]| terms.iter().filter(|t| lowered.contains(**t)).count() as f64;

    let joy = hits(JOY_TERMS);
    let sadness = hits(SADNESS_TERMS);
    let anger = hits(ANGER_TERMS);
    let fear = hits(FEAR_TERMS);
    let surprise = hits(SURPRISE_TERMS);
    let disgust = hits(DISGUST_TERMS);

    let total = joy + sadness + anger + fear + surprise + disgust;
    if total == 0.0 {
        return EmotionScores::default();
    }

    EmotionScores {
        joy: joy / total,
        sadness: sadness / total,
        anger: anger / total,
        fear: fear / total,
        surprise: surprise / total,
        disgust: disgust / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_emotion_keywords() {
        let scores = detect_emotions("the meeting is at noon");
        assert!(scores.is_empty());
    }

    #[test]
    fn test_single_emotion() {
        let scores = detect_emotions("I am thrilled and excited");
        assert_eq!(scores.joy, 1.0);
        assert_eq!(scores.anger, 0.0);
    }

    #[test]
    fn test_normalized_mix() {
        let scores = detect_emotions("happy but also worried");
        let sum = scores.joy + scores.sadness + scores.anger + scores.fear + scores.surprise
            + scores.disgust;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(scores.joy > 0.0);
        assert!(scores.fear > 0.0);
    }
}
