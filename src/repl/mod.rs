//! REPL Module
//!
//! Reads commands line by line, dispatches them against a [`Session`], and
//! prints the results.
//!
//! # Commands
//! - `help`, `exit`
//! - `map` / `mapb` - page through location areas
//! - `explore <area>`, `catch <pokemon>`, `inspect <pokemon>`, `pokedex`
//! - `cache` - response cache statistics

pub mod commands;
pub mod input;
pub mod session;

pub use commands::{Command, CommandInfo, COMMANDS};
pub use input::{spawn_line_reader, InputLines};
pub use session::{attempt_catch, Flow, Session, CATCH_THRESHOLD};

use std::future::Future;
use std::io::Write;

use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Run REPL ==
/// Runs the read-eval-print loop until `exit`, end of input, or `shutdown`
/// resolves.
///
/// `shutdown` also cuts short a command that is still waiting on the
/// network. Command failures are printed and the loop carries on. Only
/// failing to read input or write output ends the loop with an error.
pub async fn run_repl<W, F>(
    mut input: InputLines,
    output: &mut W,
    session: &mut Session,
    client: &PokeApiClient,
    shutdown: F,
) -> Result<()>
where
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = &mut shutdown => {
                debug!("Shutdown requested while waiting for input");
                writeln!(output)?;
                break;
            }
        };

        let Some(line) = line else {
            writeln!(output)?;
            break;
        };

        let command = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        let result = tokio::select! {
            result = session.execute(command, client, output) => result,
            _ = &mut shutdown => {
                debug!("Shutdown requested during a command");
                break;
            }
        };

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                debug!(error = %err, "Command failed");
                writeln!(output, "{}", err)?;
            }
        }
    }

    Ok(())
}
