//! CLI definition using clap.
//!
//! A single optional positional prompt: with it the prompt is routed once,
//! without it an interactive session starts.

use clap::Parser;
use std::path::PathBuf;

/// toolroute - send a request to the right tool, picked by an LLM
#[derive(Parser, Debug)]
#[command(name = "toolroute")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt to route; omit to start an interactive session
    pub prompt: Option<String>,

    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the model from the config file
    #[arg(short, long)]
    pub model: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prompt to route once; an empty prompt counts as none
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }

    /// Whether to run the interactive loop
    pub fn is_interactive(&self) -> bool {
        self.prompt().is_none()
    }
}
