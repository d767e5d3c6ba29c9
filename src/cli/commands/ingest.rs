//! Ingest command implementation.

use crate::captions::{extract_video_id, CaptionSource, LocalFileSource};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::session::VideoSession;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the ingest command: caption file -> chunked session.
pub async fn run_ingest(
    input: &str,
    url: Option<String>,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    let source = LocalFileSource::new();
    let raw = source.fetch_captions(input).await?;

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;
    let pipeline = Pipeline::new(PipelineConfig::from(&settings.pipeline), prompts);

    let chunks = pipeline.ingest(&raw);

    if chunks.is_empty() {
        Output::warning("No captions available: the document had no recoverable sentences.");
        return Ok(());
    }

    let session_path = session_path(input, url.as_deref(), output.as_deref(), &settings);
    let session = VideoSession::new(url, chunks);
    session.save(&session_path)?;

    Output::success(&format!(
        "Ingested {} chunks into {}",
        session.chunks.len(),
        session_path.display()
    ));
    Output::info(&format!(
        "Ask a question with: tolk ask \"...\" --session {}",
        session_path.display()
    ));

    Ok(())
}

/// Resolve where the session file goes: explicit output, or a name derived
/// from the video id / input file stem under the data directory.
fn session_path(
    input: &str,
    url: Option<&str>,
    output: Option<&str>,
    settings: &Settings,
) -> PathBuf {
    if let Some(out) = output {
        return PathBuf::from(out);
    }

    let stem = url
        .and_then(extract_video_id)
        .or_else(|| {
            Path::new(input)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "session".to_string());

    settings
        .data_dir()
        .join("sessions")
        .join(format!("{}.json", stem))
}
