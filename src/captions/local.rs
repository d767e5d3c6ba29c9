//! Local-file caption source.

use super::CaptionSource;
use crate::error::{Result, TolkError};
use async_trait::async_trait;
use std::path::Path;

/// Reads a caption document from a file already on disk (e.g. a `.vtt`
/// saved by an external download tool).
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptionSource for LocalFileSource {
    async fn fetch_captions(&self, reference: &str) -> Result<String> {
        let path = Path::new(reference);
        if !path.exists() {
            return Err(TolkError::CaptionsNotFound(format!(
                "No caption file at {}",
                path.display()
            )));
        }

        tokio::fs::read_to_string(path).await.map_err(|e| {
            TolkError::CaptionSource(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_caption_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "WEBVTT\n\ncontent").unwrap();

        let source = LocalFileSource::new();
        let raw = source
            .fetch_captions(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(raw.starts_with("WEBVTT"));
    }

    #[tokio::test]
    async fn test_missing_file_is_captions_not_found() {
        let source = LocalFileSource::new();
        let err = source
            .fetch_captions("/nonexistent/captions.vtt")
            .await
            .unwrap_err();
        assert!(matches!(err, TolkError::CaptionsNotFound(_)));
    }
}
