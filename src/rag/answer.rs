//! Answer generation over a caller-held chunk sequence.

use crate::chunking::Chunk;
use crate::error::Result;
use crate::llm::Completer;
use crate::pipeline::Pipeline;
use std::sync::Arc;
use tracing::{info, instrument};

/// Answers questions about one transcript by assembling a context prompt
/// and delegating to the completion collaborator.
///
/// Holds no transcript state: the chunk sequence comes in with every call,
/// and the model's response goes back verbatim.
pub struct AnswerEngine {
    pipeline: Pipeline,
    completer: Arc<dyn Completer>,
}

impl AnswerEngine {
    /// Create an engine from a pipeline and a completion collaborator.
    pub fn new(pipeline: Pipeline, completer: Arc<dyn Completer>) -> Self {
        Self {
            pipeline,
            completer,
        }
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Ask a question against the given chunks and return the model's raw
    /// answer text.
    #[instrument(skip(self, chunks), fields(question = %question, chunks = chunks.len()))]
    pub async fn ask(&self, question: &str, chunks: &[Chunk]) -> Result<String> {
        info!("Answering question over {} chunks", chunks.len());

        let prompt = self.pipeline.answer_context(question, chunks);
        self.completer.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Completer that records the prompt and echoes a canned answer.
    struct RecordingCompleter {
        seen: Mutex<Vec<String>>,
        answer: String,
    }

    impl RecordingCompleter {
        fn new(answer: &str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                answer: answer.to_string(),
            }
        }
    }

    #[async_trait]
    impl Completer for RecordingCompleter {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.seen.lock().unwrap().push(prompt.to_string());
            Ok(self.answer.clone())
        }
    }

    #[tokio::test]
    async fn test_ask_returns_model_answer_verbatim() {
        let completer = Arc::new(RecordingCompleter::new("  raw answer, untouched \n"));
        let engine = AnswerEngine::new(Pipeline::default(), completer.clone());

        let chunks = vec![Chunk::new("The sky is blue.", 0)];
        let answer = engine.ask("what color is the sky?", &chunks).await.unwrap();

        assert_eq!(answer, "  raw answer, untouched \n");

        let prompts = completer.seen.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("The sky is blue."));
        assert!(prompts[0].contains("Q: what color is the sky?"));
    }

    #[tokio::test]
    async fn test_ask_with_no_chunks_still_completes() {
        let completer = Arc::new(RecordingCompleter::new("no context answer"));
        let engine = AnswerEngine::new(Pipeline::default(), completer.clone());

        let answer = engine.ask("anything?", &[]).await.unwrap();
        assert_eq!(answer, "no context answer");

        let prompts = completer.seen.lock().unwrap();
        assert!(prompts[0].contains("Q: anything?"));
    }
}
