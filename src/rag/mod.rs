//! RAG (Retrieval-Augmented Generation) over a single video transcript.
//!
//! Assembles a prompt from the caller-held chunk sequence and hands it to
//! the answering model. Small transcripts go into the prompt whole; large
//! ones are filtered down to the most relevant chunks first.

pub mod context;
mod answer;

pub use answer::AnswerEngine;
pub use context::{assemble_context, ContextOptions};
