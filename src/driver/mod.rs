//! A command loop over a [`ChainedMap<i32, i32>`](ChainedMap).
//!
//! The input starts with the number of commands, followed by that many commands, all separated by
//! whitespace:
//! - `get <key>` prints the value for `key`, or `None`.
//! - `put <key> <value>` associates `value` with `key`, printing nothing.
//! - `delete <key>` removes `key`, printing its value, or `None`.
//!
//! Every printed value is followed by a line break. Anything after the last announced command is
//! ignored.

mod command;
mod error;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

pub use command::Command;
use command::Tokens;
pub use error::*;
use crate::collections::hash::ChainedMap;

/// Runs the commands in `input` against a new map, writing results to `output`.
///
/// Output is flushed before returning, including when a malformed command stops the loop. Results
/// of the commands before the malformed one are kept.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), DriverError> {
    let result = execute(&mut Tokens::new(input), &mut output);
    output.flush()?;

    if let Err(error) = &result {
        warn!(%error, "Stopped on malformed input");
    }
    result
}

fn execute<R: BufRead, W: Write>(tokens: &mut Tokens<R>, output: &mut W) -> Result<(), DriverError> {
    let requests: usize = tokens.expect_int("command count")?;
    info!(requests, "Running commands");

    let mut map = ChainedMap::new();
    for _ in 0..requests {
        let command = tokens.expect_command()?;
        debug!(%command);
        apply(&mut map, command, output)?;
    }

    info!(entries = map.len(), "Finished running commands");
    Ok(())
}

/// Applies a single command to `map`, writing its result to `output`.
pub fn apply<W: Write>(
    map: &mut ChainedMap<i32, i32>,
    command: Command,
    output: &mut W,
) -> Result<(), DriverError> {
    let printed = match command {
        Command::Get(key) => map.get(&key).copied(),
        Command::Put(key, value) => {
            map.put(key, value);
            return Ok(());
        },
        Command::Delete(key) => map.remove(&key),
    };

    match printed {
        Some(value) => writeln!(output, "{value}")?,
        None => writeln!(output, "None")?,
    }
    Ok(())
}
