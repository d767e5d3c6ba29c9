//! Ask command implementation.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::error::TolkError;
use crate::llm::OpenAICompleter;
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::rag::AnswerEngine;
use crate::session::VideoSession;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Run the ask command against an ingested session.
pub async fn run_ask(
    question: &str,
    session_path: &str,
    model: Option<String>,
    context_only: bool,
    settings: Settings,
) -> Result<()> {
    let path = Path::new(session_path);
    let mut session = VideoSession::load(path)?;

    if !session.is_ready() {
        return Err(TolkError::InvalidInput(format!(
            "Session {} has no usable content; re-run ingest on a caption file",
            path.display()
        ))
        .into());
    }

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;
    let pipeline = Pipeline::new(PipelineConfig::from(&settings.pipeline), prompts);

    if context_only {
        println!("{}", pipeline.answer_context(question, &session.chunks));
        return Ok(());
    }

    let model = model.unwrap_or_else(|| settings.llm.model.clone());
    let engine = AnswerEngine::new(pipeline, Arc::new(OpenAICompleter::new(&model)));

    let spinner = Output::spinner("Generating answer...");

    match engine.ask(question, &session.chunks).await {
        Ok(answer) => {
            spinner.finish_and_clear();
            println!("\n{}\n", answer);

            session.record(question, &answer);
            if let Err(e) = session.save(path) {
                Output::warning(&format!("Failed to update session history: {}", e));
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
