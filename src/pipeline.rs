//! The caption-to-context pipeline.
//!
//! Sequences Normalizer and Chunker at ingestion time, and Ranker and
//! Context Assembler per query. The pipeline itself is stateless between
//! calls: `ingest` hands the chunk sequence back to the caller, who must
//! resend it with every `answer_context` call. Both operations are pure,
//! synchronous, and safe to run concurrently for different requests.

use crate::chunking::{chunk_text, Chunk, DEFAULT_SENTENCES_PER_CHUNK};
use crate::config::{PipelineSettings, Prompts};
use crate::normalize::Normalizer;
use crate::rag::context::{assemble_context, ContextOptions, DEFAULT_SIZE_THRESHOLD};
use crate::ranking::DEFAULT_TOP_K;
use tracing::debug;

/// Explicit pipeline parameters. Behavior is fully determined by these
/// values; there are no process-wide mutable defaults.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Sentences grouped into each chunk.
    pub sentences_per_chunk: usize,
    /// Chunks kept when relevance ranking kicks in.
    pub top_k: usize,
    /// Transcript size (in characters) below which the full transcript is
    /// used as context.
    pub context_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sentences_per_chunk: DEFAULT_SENTENCES_PER_CHUNK,
            top_k: DEFAULT_TOP_K,
            context_threshold: DEFAULT_SIZE_THRESHOLD,
        }
    }
}

impl From<&PipelineSettings> for PipelineConfig {
    fn from(settings: &PipelineSettings) -> Self {
        Self {
            sentences_per_chunk: settings.sentences_per_chunk,
            top_k: settings.top_k,
            context_threshold: settings.context_threshold,
        }
    }
}

/// The caption-to-context pipeline.
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
    prompts: Prompts,
}

impl Pipeline {
    /// Create a pipeline with explicit configuration and prompts.
    pub fn new(config: PipelineConfig, prompts: Prompts) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            prompts,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Turn a raw caption document into the ordered chunk sequence.
    ///
    /// Idempotent and side-effect free. An empty result means the document
    /// carried no recoverable sentences; callers should report "no usable
    /// content" rather than proceeding to a query step.
    pub fn ingest(&self, raw: &str) -> Vec<Chunk> {
        let clean = self.normalizer.normalize(raw);
        let chunks = chunk_text(&clean, self.config.sentences_per_chunk);
        debug!(
            raw_len = raw.len(),
            clean_len = clean.len(),
            chunks = chunks.len(),
            "ingested caption document"
        );
        chunks
    }

    /// Build the prompt text for a query over caller-held chunks.
    ///
    /// Total: never fails for any query/chunk input, including an empty
    /// sequence (which yields a template-only prompt).
    pub fn answer_context(&self, query: &str, chunks: &[Chunk]) -> String {
        let options = ContextOptions {
            top_k: self.config.top_k,
            size_threshold: self.config.context_threshold,
        };
        assemble_context(query, chunks, &options, &self.prompts)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default(), Prompts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_VTT: &str = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello world.\n\n00:00:02.000 --> 00:00:04.000\nThis is a test.\n";

    #[test]
    fn test_ingest_sample_document() {
        let pipeline = Pipeline::default();
        let chunks = pipeline.ingest(SAMPLE_VTT);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Hello world. This is a test.");
    }

    #[test]
    fn test_ingest_is_idempotent_over_inputs() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.ingest(SAMPLE_VTT), pipeline.ingest(SAMPLE_VTT));
    }

    #[test]
    fn test_ingest_groups_sentences_into_chunks() {
        let raw = "00:00:00.000 --> 00:00:12.000\nOne. Two. Three. Four. Five. Six.\n";
        let pipeline = Pipeline::default();
        let chunks = pipeline.ingest(raw);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "One. Two. Three.");
        assert_eq!(chunks[1].text, "Four. Five. Six.");
    }

    #[test]
    fn test_empty_document_yields_empty_sequence() {
        let pipeline = Pipeline::default();
        assert!(pipeline.ingest("").is_empty());
        assert!(pipeline.ingest("WEBVTT\n\n").is_empty());
    }

    #[test]
    fn test_answer_context_on_empty_chunks_is_template_only() {
        let pipeline = Pipeline::default();
        let prompt = pipeline.answer_context("anything?", &[]);
        assert!(prompt.contains("Q: anything?"));
        assert!(prompt.trim_end().ends_with("A:"));
    }

    #[test]
    fn test_answer_context_includes_short_transcript_whole() {
        let pipeline = Pipeline::default();
        let chunks = pipeline.ingest(SAMPLE_VTT);
        let prompt = pipeline.answer_context("what is said?", &chunks);
        assert!(prompt.contains("Hello world. This is a test."));
    }

    #[test]
    fn test_config_threshold_controls_ranking() {
        let config = PipelineConfig {
            sentences_per_chunk: 1,
            top_k: 1,
            context_threshold: 10,
        };
        let pipeline = Pipeline::new(config, Prompts::default());
        let chunks = pipeline.ingest("00:00:00.000 --> 00:00:02.000\nCats purr loudly. Dogs bark.\n");

        assert_eq!(chunks.len(), 2);
        let prompt = pipeline.answer_context("bark", &chunks);
        assert!(prompt.contains("Dogs bark."));
        assert!(!prompt.contains("Cats purr"));
    }
}
