//! Deterministic insight text generation from analysis summaries.
//!
//! Produces the short narrative shown alongside an analysis when no
//! richer insight source is available. Purely template-driven.

use crate::models::DatasetSummary;

use super::classifier::SentimentLabel;

/// Which social platform a batch of items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialSource {
    Twitter,
    YouTube,
}

impl SocialSource {
    fn item_noun(&self) -> &'static str {
        match self {
            SocialSource::Twitter => "tweets",
            SocialSource::YouTube => "comments",
        }
    }
}

/// Insight text for a single-text analysis.
pub fn text_insights(label: SentimentLabel) -> String {
    match label {
        SentimentLabel::Positive => {
            "The text has a positive sentiment, indicating satisfaction or approval. \
             This suggests a favorable opinion or experience being expressed."
                .to_string()
        }
        SentimentLabel::Negative => {
            "The text has a negative sentiment, indicating dissatisfaction or criticism. \
             This suggests concerns or issues being raised that may need addressing."
                .to_string()
        }
        SentimentLabel::Neutral => {
            "The text has a neutral sentiment, indicating a balanced or objective perspective. \
             This suggests factual reporting or a mix of positive and negative elements."
                .to_string()
        }
    }
}

/// Insight text for an aggregated social-media analysis.
pub fn social_insights(
    positive: f64,
    neutral: f64,
    negative: f64,
    total: usize,
    source: SocialSource,
) -> String {
    let mut insights = format!("Analysis of {} {} shows: ", total, source.item_noun());

    if positive > 0.5 {
        insights.push_str(&format!(
            "predominantly positive sentiment ({}), indicating strong audience satisfaction. ",
            percent(positive)
        ));
    } else if negative > 0.5 {
        insights.push_str(&format!(
            "predominantly negative sentiment ({}), indicating significant audience concerns. ",
            percent(negative)
        ));
    } else if positive > negative {
        insights.push_str(&format!(
            "moderately positive sentiment ({} positive vs {} negative), \
             suggesting general audience satisfaction with some concerns. ",
            percent(positive),
            percent(negative)
        ));
    } else if negative > positive {
        insights.push_str(&format!(
            "moderately negative sentiment ({} negative vs {} positive), \
             suggesting general audience dissatisfaction with some positive aspects. ",
            percent(negative),
            percent(positive)
        ));
    } else {
        insights.push_str(&format!(
            "balanced sentiment ({} neutral), indicating mixed audience reactions or factual discussions. ",
            percent(neutral)
        ));
    }

    insights.push_str("\n\nRecommendations: ");
    if negative > 0.3 {
        insights.push_str("Address common concerns in the negative feedback. ");
    }
    if positive > 0.3 {
        insights.push_str("Leverage positive aspects highlighted in favorable feedback. ");
    }
    insights.push_str("Continue monitoring sentiment trends over time for changes.");

    insights
}

/// Insight text for a tabular dataset analysis.
pub fn csv_insights(summary: &DatasetSummary) -> String {
    let mut insights = format!(
        "Dataset analysis reveals: The dataset contains {} rows and {} columns. ",
        summary.rows, summary.columns
    );

    if summary.missing_values > 0 {
        insights.push_str(&format!(
            "There are {} missing values that may require attention. ",
            summary.missing_values
        ));
    } else {
        insights.push_str("The dataset is complete with no missing values. ");
    }

    insights.push_str("\n\nRecommendations for data analysis: ");
    insights.push_str("Explore relationships between key variables. ");
    insights.push_str("Consider data visualization to identify patterns. ");
    if summary.missing_values > 0 {
        insights.push_str("Address missing values through imputation or removal. ");
    }

    insights
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_insights_per_label() {
        assert!(text_insights(SentimentLabel::Positive).contains("positive sentiment"));
        assert!(text_insights(SentimentLabel::Negative).contains("negative sentiment"));
        assert!(text_insights(SentimentLabel::Neutral).contains("neutral sentiment"));
    }

    #[test]
    fn test_predominantly_positive() {
        let insights = social_insights(0.8, 0.1, 0.1, 50, SocialSource::YouTube);
        assert!(insights.contains("50 comments"));
        assert!(insights.contains("predominantly positive"));
        assert!(insights.contains("80.0%"));
        // 0.1 negative is under the recommendation threshold.
        assert!(!insights.contains("Address common concerns"));
    }

    #[test]
    fn test_mixed_negative_gets_both_recommendations() {
        let insights = social_insights(0.35, 0.2, 0.45, 20, SocialSource::Twitter);
        assert!(insights.contains("20 tweets"));
        assert!(insights.contains("moderately negative"));
        assert!(insights.contains("Address common concerns"));
        assert!(insights.contains("Leverage positive aspects"));
    }

    #[test]
    fn test_csv_insights_mentions_missing_values() {
        let mut summary = DatasetSummary::default();
        summary.rows = 100;
        summary.columns = 5;
        summary.missing_values = 7;

        let insights = csv_insights(&summary);
        assert!(insights.contains("100 rows and 5 columns"));
        assert!(insights.contains("7 missing values"));
        assert!(insights.contains("imputation or removal"));
    }

    #[test]
    fn test_csv_insights_complete_dataset() {
        let mut summary = DatasetSummary::default();
        summary.rows = 10;
        summary.columns = 2;

        let insights = csv_insights(&summary);
        assert!(insights.contains("complete with no missing values"));
        assert!(!insights.contains("imputation"));
    }
}
