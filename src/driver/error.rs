use std::io;
use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant};

/// The driver stopped before finishing the announced number of commands.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum DriverError {
    #[display("Failed to read input or write output: {_0}")]
    Io(#[error(source)] io::Error),
    #[display("{_0}")]
    Parse(#[error(source)] ParseError),
}

/// The input didn't follow the command protocol.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, IsVariant)]
pub enum ParseError {
    /// The input ran out while a token was still expected.
    #[display("Unexpected end of input, expected {expected}!")]
    UnexpectedEnd {
        expected: &'static str,
    },
    /// A command other than `get`, `put` or `delete`.
    #[display("Unknown command {command:?}, expected get, put or delete!")]
    UnknownCommand {
        command: String,
    },
    /// A token that should have been an integer.
    #[display("Invalid {expected} {token:?}: {source}")]
    InvalidInteger {
        token: String,
        expected: &'static str,
        source: ParseIntError,
    },
}
