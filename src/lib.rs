//! Tolk - Ask questions about a video's captions
//!
//! A CLI tool that turns a video's caption file into an askable transcript.
//!
//! The name "Tolk" comes from the Norwegian word for "interpreter."
//!
//! # Overview
//!
//! Tolk allows you to:
//! - Clean a raw timed-subtitle document into plain transcript text
//! - Split the transcript into ordered, resendable chunks
//! - Ask questions answered by an LLM grounded in the most relevant chunks
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management and prompt templates
//! - `captions` - Caption source abstraction (local files)
//! - `normalize` - Caption stripping rules and normalization
//! - `chunking` - Sentence segmentation and chunk grouping
//! - `ranking` - Lexical relevance ranking
//! - `rag` - Context assembly and answer generation
//! - `pipeline` - Pipeline coordination
//! - `session` - Caller-held session state
//!
//! The pipeline core (`normalize`, `chunking`, `ranking`, `rag::context`,
//! `pipeline`) is pure and synchronous: it holds no session state, performs
//! no I/O, and is safe to run concurrently for independent requests.
//!
//! # Example
//!
//! ```rust
//! use tolk::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::default();
//!
//! let chunks = pipeline.ingest(
//!     "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello world.\n",
//! );
//! let prompt = pipeline.answer_context("what is said?", &chunks);
//! assert!(prompt.contains("Hello world."));
//! ```

pub mod captions;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod normalize;
pub mod pipeline;
pub mod rag;
pub mod ranking;
pub mod session;

pub use error::{Result, TolkError};
