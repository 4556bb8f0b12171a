//! Helpers for turning raw puzzle input into the shapes the solvers work on.

use crate::error::{Error, Result};
use crate::models::grid::Grid;
use std::{fmt::Display, str::FromStr};

/// Non-blank lines of `input`, trimmed.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Parses a single token, naming it in the error.
pub fn number<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let token = token.trim();
    token
        .parse::<T>()
        .map_err(|e| Error::parse(format!("invalid number '{}': {}", token, e)))
}

/// Parses every `sep`-separated token of `s`, ignoring empty tokens.
pub fn numbers<T>(s: &str, sep: char) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    s.split(sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(number)
        .collect()
}

/// Splits input into groups of lines separated by blank lines.
pub fn sections(input: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Reads a character grid, ignoring trailing blank lines.
pub fn char_grid(input: &str) -> Result<Grid<char>> {
    grid_from_lines(input.trim_end_matches(['\n', '\r']).lines())
}

pub fn grid_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Grid<char>> {
    Grid::from_rows(
        lines
            .into_iter()
            .map(|line| line.trim_end().chars().collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::Point;

    #[test]
    fn lines_skip_blanks() {
        let all: Vec<&str> = lines("  a \n\n b\r\n\n").collect();
        assert_eq!(all, vec!["a", "b"]);
    }

    #[test]
    fn numbers_skip_empty_tokens() {
        let parsed: Vec<i64> = numbers("1, 2,,-3 ", ',').unwrap();
        assert_eq!(parsed, vec![1, 2, -3]);
    }

    #[test]
    fn number_errors_name_the_token() {
        let err = number::<u8>("x1").unwrap_err();
        assert_eq!(err.to_string(), "invalid number 'x1': invalid digit found in string");
    }

    #[test]
    fn sections_split_on_blank_lines() {
        let s = sections("a\nb\n\n\nc\n  \nd\n");
        assert_eq!(s, vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn char_grid_ignores_trailing_newlines() {
        let grid = char_grid("ab\ncd\n\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Point::new(1, 1)], 'd');
    }
}
