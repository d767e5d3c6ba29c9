//! Caller-held session state for a processed video.
//!
//! The core pipeline is stateless: the chunk sequence produced by `ingest`
//! lives here, at the caller's level, and is resent with every question.
//! The CLI persists sessions as JSON files; nothing is stored server-side.

use crate::chunking::Chunk;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One answered question, kept in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnswerRecord {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

impl QueryAnswerRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        }
    }
}

/// A processed-video session: the chunk sequence plus Q&A history.
///
/// A session is either Unprocessed (no chunks yet; only ingestion is
/// meaningful) or Ready (questions may be asked any number of times, each
/// independent). There is no intermediate state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSession {
    /// Reference to the video the captions came from, if known.
    pub video_url: Option<String>,
    /// The ordered chunk sequence from ingestion.
    pub chunks: Vec<Chunk>,
    /// Questions asked so far, oldest first.
    pub history: Vec<QueryAnswerRecord>,
    pub created_at: DateTime<Utc>,
}

impl VideoSession {
    /// Create a Ready session from ingested chunks.
    pub fn new(video_url: Option<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            video_url,
            chunks,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the session has usable content to ask questions about.
    pub fn is_ready(&self) -> bool {
        !self.chunks.is_empty()
    }

    /// Record an answered question.
    pub fn record(&mut self, question: &str, answer: &str) {
        self.history.push(QueryAnswerRecord::new(question, answer));
    }

    /// Load a session from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the session to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
