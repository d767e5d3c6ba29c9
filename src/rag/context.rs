//! Context assembly for answer prompts.

use crate::chunking::Chunk;
use crate::config::Prompts;
use crate::ranking::{rank, DEFAULT_TOP_K};
use std::collections::HashMap;
use tracing::debug;

/// Transcript size (in characters) below which the full transcript is used
/// as context without ranking.
pub const DEFAULT_SIZE_THRESHOLD: usize = 12_000;

/// Options controlling context assembly.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Chunks kept when ranking is needed.
    pub top_k: usize,
    /// Full-transcript size threshold, in characters.
    pub size_threshold: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            size_threshold: DEFAULT_SIZE_THRESHOLD,
        }
    }
}

/// Build the prompt text for a query over the given chunks.
///
/// If the joined transcript is shorter than `size_threshold` it is used
/// whole and the ranker is never invoked; a short transcript loses nothing
/// to top-k truncation. Otherwise the context is the ranked top-k chunks.
/// The prompt renders the fixed template order: instruction, context,
/// question marker, answer marker. Total over any input; empty chunks
/// yield a template-only prompt.
pub fn assemble_context(
    query: &str,
    chunks: &[Chunk],
    options: &ContextOptions,
    prompts: &Prompts,
) -> String {
    let full_text = chunks
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let context = if full_text.chars().count() < options.size_threshold {
        debug!(
            chars = full_text.chars().count(),
            "transcript fits the context budget, skipping ranking"
        );
        full_text
    } else {
        debug!(
            chars = full_text.chars().count(),
            top_k = options.top_k,
            "transcript exceeds the context budget, ranking chunks"
        );
        rank(query, chunks, options.top_k)
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut vars = HashMap::new();
    vars.insert("instruction".to_string(), prompts.answer.instruction.clone());
    vars.insert("context".to_string(), context);
    vars.insert("question".to_string(), query.to_string());

    prompts.render_with_custom(&prompts.answer.template, &vars)
}
