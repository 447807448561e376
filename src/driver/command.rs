use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead};
use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::IsVariant;

use super::{DriverError, ParseError};

/// A single request to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Command {
    /// Prints the value for a key, or `None`.
    Get(i32),
    /// Associates a value with a key, printing nothing.
    Put(i32, i32),
    /// Removes a key, printing its value, or `None`.
    Delete(i32),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Command::Get(key) => write!(f, "get {key}"),
            Command::Put(key, value) => write!(f, "put {key} {value}"),
            Command::Delete(key) => write!(f, "delete {key}"),
        }
    }
}

/// Splits input into whitespace separated tokens, reading one line at a time.
pub(crate) struct Tokens<R> {
    reader: R,
    line: String,
    // Everything before offset in line has been consumed.
    offset: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            line: String::new(),
            offset: 0,
        }
    }

    /// Returns the next token, or [`None`] once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.offset..];
            let trimmed = rest.trim_start();

            if !trimmed.is_empty() {
                let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let start = self.offset + (rest.len() - trimmed.len());
                self.offset = start + len;
                return Ok(Some(self.line[start..self.offset].to_owned()));
            }

            self.line.clear();
            self.offset = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Returns the next token, failing if the input is exhausted.
    pub fn expect_token(&mut self, expected: &'static str) -> Result<String, DriverError> {
        Ok(self
            .next_token()?
            .ok_or(ParseError::UnexpectedEnd { expected })?)
    }

    /// Returns the next token parsed as an integer.
    pub fn expect_int<I>(&mut self, expected: &'static str) -> Result<I, DriverError>
    where
        I: FromStr<Err = ParseIntError>,
    {
        let token = self.expect_token(expected)?;
        match token.parse() {
            Ok(int) => Ok(int),
            Err(source) => Err(ParseError::InvalidInteger {
                token,
                expected,
                source,
            }
            .into()),
        }
    }

    /// Reads the next full command.
    pub fn expect_command(&mut self) -> Result<Command, DriverError> {
        let command = self.expect_token("command")?;
        match command.as_str() {
            "get" => Ok(Command::Get(self.expect_int("key")?)),
            "put" => Ok(Command::Put(self.expect_int("key")?, self.expect_int("value")?)),
            "delete" => Ok(Command::Delete(self.expect_int("key")?)),
            _ => Err(ParseError::UnknownCommand { command }.into()),
        }
    }
}
