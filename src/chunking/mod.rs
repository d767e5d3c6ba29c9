//! Transcript chunking: clean text into ordered, bounded chunks.
//!
//! Chunks partition the sentence sequence without gaps or overlaps and are
//! the durable artifact of ingestion: the caller holds them for the life of
//! a session and resends them with every question.

mod sentence;

pub use sentence::split_sentences;

use serde::{Deserialize, Serialize};

/// Number of sentences per chunk when the caller does not override it.
pub const DEFAULT_SENTENCES_PER_CHUNK: usize = 3;

/// An ordered, immutable unit of transcript text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content of this chunk.
    pub text: String,
    /// Position of this chunk in the transcript.
    pub order: i32,
}

impl Chunk {
    pub fn new(text: impl Into<String>, order: i32) -> Self {
        Self {
            text: text.into(),
            order,
        }
    }
}

/// Split clean text into consecutive chunks of `sentences_per_chunk`
/// sentences (the last chunk may be shorter).
///
/// Each chunk joins its sentences with a single space and is trimmed.
/// Deterministic and pure; empty input yields an empty sequence. A
/// `sentences_per_chunk` of zero is treated as one.
pub fn chunk_text(text: &str, sentences_per_chunk: usize) -> Vec<Chunk> {
    let size = sentences_per_chunk.max(1);
    let sentences = split_sentences(text);

    sentences
        .chunks(size)
        .enumerate()
        .map(|(i, window)| Chunk::new(window.join(" "), i as i32))
        .filter(|chunk| !chunk.text.is_empty())
        .collect()
}
