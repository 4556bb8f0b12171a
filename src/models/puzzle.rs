use crate::error::{Error, Result};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A day of the advent calendar, always in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn new(n: u8) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&n) {
            Ok(Day(n))
        } else {
            Err(Error::InvalidDay(n.to_string()))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// File name stem used for stored inputs, e.g. `day07`.
    pub fn file_stem(self) -> String {
        format!("day{:02}", self.0)
    }

    pub fn all() -> impl Iterator<Item = Day> {
        (Self::FIRST..=Self::LAST).map(Day)
    }
}

impl FromStr for Day {
    type Err = Error;

    /// Accepts `7`, `07` and `day7`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("day").unwrap_or(trimmed);
        let n = digits
            .parse::<u8>()
            .map_err(|_| Error::InvalidDay(s.to_string()))?;
        Day::new(n).map_err(|_| Error::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The answer to one part of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Number(i64),
    Text(String),
    /// The input has no answer for this part (printed as `-1`).
    Missing,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
            Answer::Missing => write!(f, "-1"),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Number(n)
    }
}

impl From<u64> for Answer {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(Answer::Number)
            .unwrap_or_else(|_| Answer::Text(n.to_string()))
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Self {
        Answer::from(n as u64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(value: Option<T>) -> Self {
        value.map_or(Answer::Missing, Into::into)
    }
}

/// Both answers of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub part_one: Answer,
    pub part_two: Answer,
}

impl Solution {
    pub fn new(part_one: impl Into<Answer>, part_two: impl Into<Answer>) -> Self {
        Solution {
            part_one: part_one.into(),
            part_two: part_two.into(),
        }
    }
}

/// One line of the puzzle index: day number, title and relative link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleEntry {
    pub day: Day,
    pub title: &'static str,
    pub link: String,
}

impl PuzzleEntry {
    pub fn new(day: Day, title: &'static str) -> Self {
        PuzzleEntry {
            day,
            title,
            link: format!("./day{}", day.number()),
        }
    }
}
