//! Video identifier extraction
//!
//! Best-effort heuristic over the raw input: the first 11-character token from
//! the identifier alphabet that follows either `v=` or `/`. Hostnames are not
//! validated and shortened links without either marker are not recognized.

use regex::Regex;
use std::sync::OnceLock;

/// Length of a YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid")
    })
}

/// Extract the video identifier from a watch URL.
///
/// The leftmost match of either alternative wins, so `/` before `v=` in the
/// input takes precedence when both are followed by a valid token.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check a candidate identifier against the identifier alphabet
pub fn is_valid_video_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
