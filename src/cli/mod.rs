//! CLI module for Tolk.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tolk - Ask questions about a video's captions
///
/// Turns a downloaded caption file into an askable transcript session.
/// The name "Tolk" comes from the Norwegian word for "interpreter."
#[derive(Parser, Debug)]
#[command(name = "tolk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a caption file into an askable session
    Ingest {
        /// Path to a caption file (e.g. a downloaded .vtt)
        input: String,

        /// Video URL or ID the captions belong to (used to label the session)
        #[arg(short, long)]
        url: Option<String>,

        /// Session file to write (defaults to the data directory)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Ask a question against an ingested session
    Ask {
        /// The question to ask
        question: String,

        /// Session file produced by `tolk ingest`
        #[arg(short, long)]
        session: String,

        /// LLM model to use for answer generation
        #[arg(short, long)]
        model: Option<String>,

        /// Print the assembled prompt instead of calling the model
        #[arg(long)]
        context_only: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
