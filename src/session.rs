//! Console sessions: one-shot and interactive
//!
//! Both functions write plain text to any `Write` so they can be driven from
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use log::info;

use crate::error::Result;
use crate::router::{RouteOutcome, RoutingAgent};

pub const SEPARATOR: &str = "----------------------------------------------------------------";

pub const BANNER: &str = "Welcome to the AI Routing Agent CLI! Type 'exit' or 'quit' to quit.";

pub const INPUT_PROMPT: &str = "Enter your prompt: ";

/// Whether `input` ends the interactive session
pub fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

fn write_selection<W: Write>(out: &mut W, outcome: &RouteOutcome) -> Result<()> {
    if let Some(call) = &outcome.call {
        writeln!(out, "Tool to be called: {}", call.name)?;
        writeln!(
            out,
            "Parameters: {}",
            serde_json::to_string_pretty(&call.parameters)?
        )?;
    }
    Ok(())
}

/// Route a single prompt and print `Result: <text>`
pub async fn run_once<W: Write>(agent: &RoutingAgent, prompt: &str, out: &mut W) -> Result<()> {
    let outcome = agent.route(prompt).await?;
    write_selection(out, &outcome)?;
    writeln!(out, "Result: {}", outcome.message)?;
    out.flush()?;
    Ok(())
}

/// Read prompts line by line until `exit`, `quit`, or end of input
pub async fn run_interactive<R: BufRead, W: Write>(
    agent: &RoutingAgent,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", BANNER)?;

    loop {
        write!(out, "{}", INPUT_PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            info!("Input closed, leaving interactive mode");
            break;
        }
        let prompt = line.trim_end_matches(['\r', '\n']);

        writeln!(out, "{}", SEPARATOR)?;
        if is_exit_command(prompt) {
            writeln!(out, "Goodbye!")?;
            break;
        }

        let outcome = agent.route(prompt).await?;
        write_selection(out, &outcome)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "Result: {}", outcome.message)?;
        writeln!(out, "{}", SEPARATOR)?;
    }

    out.flush()?;
    Ok(())
}
