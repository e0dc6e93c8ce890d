use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::grouping::SNIPPET_SENTENCE_LIMIT;

#[derive(Parser, Debug)]
#[command(
    name = "citepanel",
    version,
    about = "Citation text cleanup and Sources panel tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a single citation text.
    Normalize(NormalizeArgs),
    /// Group citations by heading and render the Sources panel.
    Panel(PanelArgs),
    /// Render a numbered source list for a summarization prompt.
    Context(ContextArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Read the text from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Normalize this literal text instead of reading input.
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct PanelArgs {
    /// JSON citations file; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = SNIPPET_SENTENCE_LIMIT)]
    pub snippet_sentences: usize,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the context block here instead of stdout.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}
