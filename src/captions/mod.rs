//! Caption acquisition collaborator seam.
//!
//! Fetching captions from a video host is external to this crate; the
//! pipeline only defines the contract it consumes (a raw timed-subtitle
//! text blob) and ships a local-file source for captions already on disk.

mod local;

pub use local::LocalFileSource;

use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Source of raw caption documents.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch the raw caption text for a reference (file path, video id...).
    async fn fetch_captions(&self, reference: &str) -> Result<String>;
}

/// Extract a video id from a watch URL, short URL, or bare 11-char id.
///
/// Used only to label sessions; an unrecognized input is not an error for
/// the pipeline itself.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if let Ok(url) = Url::parse(input) {
        // watch?v=<id>
        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "v") {
            return Some(id.into_owned());
        }
        // youtu.be/<id> and embed/<id>
        if let Some(mut segments) = url.path_segments() {
            let last = segments.next_back()?;
            if is_video_id(last) {
                return Some(last.to_string());
            }
        }
        return None;
    }

    if is_video_id(input) {
        return Some(input.to_string());
    }

    None
}

fn is_video_id(s: &str) -> bool {
    s.len() == 11
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_rejects_non_videos() {
        assert_eq!(extract_video_id("not-a-video-id"), None);
        assert_eq!(extract_video_id("https://example.com/page"), None);
        assert_eq!(extract_video_id(""), None);
    }
}
