//! Error types shared by the solvers, the runner and the CLI.

use chrono::{DateTime, Utc};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Main error type for the Advent of Code runner
#[derive(Error, Debug)]
pub enum Error {
    /// Day number outside of the advent calendar
    #[error("invalid day '{0}': expected a number between 1 and 25")]
    InvalidDay(String),

    /// Malformed puzzle input
    #[error("{0}")]
    Parse(String),

    /// The day is listed in the index but has no solver
    #[error("day {0} has no solution yet")]
    Unsolved(u8),

    /// No puzzle input could be located for a day
    #[error(
        "no input found for day {day} in '{}': pass --input or run `aoc2024 fetch {day}`",
        .dir.display()
    )]
    InputNotFound { day: u8, dir: PathBuf },

    /// `solve --all` found no input for any solved day
    #[error("no puzzle inputs found in '{}'", .dir.display())]
    NoInputs { dir: PathBuf },

    /// The three-bit computer of day 17 hit something it cannot execute
    #[error("program fault: {0}")]
    Vm(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport level download failures
    #[error("request to '{url}' failed: {reason}")]
    Network { url: String, reason: String },

    /// Download answered with a non-success status
    #[error("request to '{url}' returned HTTP {status}: {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },

    /// The puzzle has not been released yet
    #[error("day {day} unlocks at {unlocks_at}")]
    Locked { day: u8, unlocks_at: DateTime<Utc> },

    /// Downloads need the adventofcode.com session cookie
    #[error("no session token: pass --session, set AOC_SESSION or use the config file")]
    MissingSession,

    /// Configuration file problems
    #[error("configuration error: {0}")]
    Config(String),

    /// Report serialization errors
    #[error("could not write report: {0}")]
    Report(String),
}

impl Error {
    /// Shorthand for building a [`Error::Parse`] from anything printable.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_errors_keep_their_message() {
        let err: Error = "a".parse::<i64>().unwrap_err().into();
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[test]
    fn input_not_found_names_the_directory() {
        let err = Error::InputNotFound {
            day: 3,
            dir: PathBuf::from("inputs"),
        };
        assert_eq!(
            err.to_string(),
            "no input found for day 3 in 'inputs': pass --input or run `aoc2024 fetch 3`"
        );
    }
}
