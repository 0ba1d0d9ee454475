//! Social-media text cleanup before classification.
//!
//! Pasted comment threads carry UI artifacts ("3d 12 likeReply", view-replies
//! buttons, mention handles) that would otherwise skew keyword matching.
//! Cleaning is aggressive on purpose; a block that loses all meaningful
//! content is returned empty rather than treated as an error.

use std::sync::LazyLock;

use regex::Regex;

/// A cleaned block must keep at least this many words...
const MIN_MEANINGFUL_WORDS: usize = 3;
/// ...and at least this many characters to count as meaningful.
const MIN_MEANINGFUL_CHARS: usize = 10;

// Compiled once at first use.
static ARTIFACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Relative timestamps: "36w", "2d", "5h"
        Regex::new(r"(?i)\b\d+[wdhms]\b").expect("Invalid regex: timestamp pattern"),
        // Engagement counts: "875 likes", "3 comments", "12 shares"
        Regex::new(r"(?i)\b\d+\s*(?:likes?|comments?|shares?|views?)\b")
            .expect("Invalid regex: engagement count pattern"),
        // Timestamp glued to an engagement button: "1d1 likeReply"
        Regex::new(r"(?i)\b\d+[dhmsw]\d*\s*like(?:reply|comment|share)?\b")
            .expect("Invalid regex: glued likeReply pattern"),
        // likeReply in any spelling
        Regex::new(r"(?i)like\s*reply|like_reply|like-reply")
            .expect("Invalid regex: likeReply variants"),
        // UI buttons and badges
        Regex::new(r"(?i)\b(?:reply|like|report|share|verified|see\s+translation|translate)\b")
            .expect("Invalid regex: UI button pattern"),
        // "View 12 replies" / "Hide 3 more"
        Regex::new(r"(?i)\b(?:view|hide|show)\s+\d*\s*(?:more\s+)?(?:replies?|comments?|more)\b")
            .expect("Invalid regex: view-replies pattern"),
        // Mention handles
        Regex::new(r"@[\w.-]+").expect("Invalid regex: mention pattern"),
        // URLs
        Regex::new(r"https?://\S+|www\.\S+").expect("Invalid regex: URL pattern"),
        // Hashtags
        Regex::new(r"#\w+").expect("Invalid regex: hashtag pattern"),
        // HTML tags
        Regex::new(r"<[^>]*>").expect("Invalid regex: HTML tag pattern"),
    ]
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Cleans one block of social-media text.
///
/// Returns an empty string when what remains is too short to mean anything.
pub fn clean_social_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    for pattern in ARTIFACT_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string();

    let word_count = cleaned.split_whitespace().count();
    if word_count < MIN_MEANINGFUL_WORDS || cleaned.chars().count() < MIN_MEANINGFUL_CHARS {
        return String::new();
    }

    cleaned
}

/// Cleans a multi-line comment paste, dropping lines that carry no content.
pub fn clean_comment_block(text: &str) -> String {
    text.lines()
        .map(clean_social_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
