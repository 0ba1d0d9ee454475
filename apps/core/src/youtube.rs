//! YouTube URL handling and cache-key derivation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

// The 11-character video identifier, captured from the accepted URL shapes.
static VIDEO_URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/|youtube\.com/watch\?.*v=)([A-Za-z0-9_-]{11})",
        )
        .expect("Invalid regex: watch URL pattern"),
        Regex::new(r"youtube\.com/shorts/([A-Za-z0-9_-]{11})")
            .expect("Invalid regex: shorts URL pattern"),
    ]
});

/// Extracts the 11-character video identifier from a YouTube URL.
///
/// A URL matching none of the accepted shapes is an error; it must never
/// silently yield a key that could collide with an unrelated video.
pub fn extract_video_id(url: &str) -> Result<String, AppError> {
    for pattern in VIDEO_URL_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(url) {
            if let Some(id) = captures.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }
    Err(AppError::InvalidUrl(url.to_string()))
}

/// Cache key for an analysis of `video_id` at a given comment depth.
///
/// The fetch depth is part of the key: an analysis of 50 comments must not
/// satisfy a request for 200.
pub fn video_cache_key(video_id: &str, max_comments: u32) -> String {
    format!("{}_{}", video_id, max_comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_and_short_urls_agree() {
        let a = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").expect("watch URL");
        let b = extract_video_id("https://youtu.be/dQw4w9WgXcQ").expect("short URL");
        assert_eq!(a, "dQw4w9WgXcQ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_and_shorts_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").expect("embed URL"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ").expect("shorts URL"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ").expect("v/ URL"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_url_with_extra_parameters() {
        let id = extract_video_id("https://www.youtube.com/watch?list=PLx&v=dQw4w9WgXcQ&t=42")
            .expect("parameterized watch URL");
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_unrecognized_urls_are_rejected() {
        for url in [
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://vimeo.com/12345678901",
            "not a url at all",
            "",
        ] {
            let result = extract_video_id(url);
            assert!(
                matches!(result, Err(AppError::InvalidUrl(_))),
                "expected rejection for {:?}",
                url
            );
        }
    }

    #[test]
    fn test_cache_key_includes_depth() {
        assert_eq!(video_cache_key("dQw4w9WgXcQ", 100), "dQw4w9WgXcQ_100");
        assert_ne!(
            video_cache_key("dQw4w9WgXcQ", 50),
            video_cache_key("dQw4w9WgXcQ", 200)
        );
    }
}
