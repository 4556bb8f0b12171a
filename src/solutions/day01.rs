//! Day 1: Historian Hysteria.
//!
//! Two columns of location ids. Part one pairs the sorted columns and sums
//! their distances; part two weighs each left id by how often it appears on
//! the right.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use std::collections::HashMap;

fn read_lists(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for line in input.lines() {
        let mut fields = line.split_whitespace();
        let l = fields.next().ok_or_else(|| Error::parse("no left value"))?;
        let r = fields.next().ok_or_else(|| Error::parse("no right value"))?;
        left.push(l.parse::<i64>()?);
        right.push(r.parse::<i64>()?);
    }

    Ok((left, right))
}

pub fn total_distance(left: &[i64], right: &[i64]) -> i64 {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum()
}

pub fn similarity(left: &[i64], right: &[i64]) -> i64 {
    let mut occurrences: HashMap<i64, i64> = HashMap::new();
    for n in right {
        *occurrences.entry(*n).or_default() += 1;
    }

    left.iter()
        .map(|n| n * occurrences.get(n).copied().unwrap_or(0))
        .sum()
}

pub fn solve(input: &str) -> Result<Solution> {
    let (left, right) = read_lists(input)?;
    Ok(Solution::new(
        total_distance(&left, &right),
        similarity(&left, &right),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3
";
        assert_eq!(solve(input).unwrap(), Solution::new(11i64, 31i64));
    }

    #[test]
    fn blank_line_has_no_left_value() {
        let input = "3   4
4   3

1   3
";
        assert_eq!(solve(input).unwrap_err().to_string(), "no left value");
    }

    #[test]
    fn missing_right_value() {
        let input = "3   4
3
1   3
";
        assert_eq!(solve(input).unwrap_err().to_string(), "no right value");
    }

    #[test]
    fn not_a_number() {
        let input = "3   4
a   b
";
        assert_eq!(
            solve(input).unwrap_err().to_string(),
            "invalid digit found in string"
        );
    }
}
