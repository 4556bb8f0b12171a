//! Day 19: Linen Layout.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;

fn read_input(input: &str) -> Result<(Vec<&str>, Vec<&str>)> {
    let mut lines = parser::lines(input);
    let patterns: Vec<&str> = lines
        .next()
        .ok_or_else(|| Error::parse("missing towel patterns"))?
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    Ok((patterns, lines.collect()))
}

/// Number of ways `design` can be laid out from `patterns`.
fn arrangements(design: &str, patterns: &[&str]) -> u64 {
    // ways[i] counts the arrangements of design[i..].
    let mut ways = vec![0u64; design.len() + 1];
    ways[design.len()] = 1;

    for i in (0..design.len()).rev() {
        let rest = &design.as_bytes()[i..];
        ways[i] = patterns
            .iter()
            .filter(|p| rest.starts_with(p.as_bytes()))
            .map(|p| ways[i + p.len()])
            .fold(0u64, u64::saturating_add);
    }

    ways[0]
}

pub fn solve(input: &str) -> Result<Solution> {
    let (patterns, designs) = read_input(input)?;
    let counts: Vec<u64> = designs.iter().map(|d| arrangements(d, &patterns)).collect();

    let possible = counts.iter().filter(|c| **c > 0).count();
    let total: u64 = counts.iter().sum();

    Ok(Solution::new(possible, total))
}
