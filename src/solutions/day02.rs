//! Day 2: Red-Nosed Reports.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;

/// A report is safe when its levels move in one direction by 1 to 3 each step.
fn is_safe(levels: &[i64]) -> bool {
    let steps_within = |lo: i64, hi: i64| {
        levels
            .windows(2)
            .all(|w| (lo..=hi).contains(&(w[1] - w[0])))
    };
    steps_within(1, 3) || steps_within(-3, -1)
}

/// The problem dampener tolerates a single bad level.
fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let mut dampened = levels.to_vec();
            dampened.remove(skip);
            is_safe(&dampened)
        })
}

pub fn solve(input: &str) -> Result<Solution> {
    let mut safe = 0usize;
    let mut safe_dampened = 0usize;

    for (n, line) in input.lines().enumerate() {
        let levels: Vec<i64> = parser::numbers(line, ' ')?;
        if levels.is_empty() {
            return Err(Error::parse(format!("report {} is empty", n + 1)));
        }

        if is_safe(&levels) {
            safe += 1;
        }
        if is_safe_dampened(&levels) {
            safe_dampened += 1;
        }
    }

    Ok(Solution::new(safe, safe_dampened))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";
        assert_eq!(solve(input).unwrap(), Solution::new(2usize, 4usize));
    }

    #[test]
    fn unsafe_even_when_dampened() {
        let input = "1 2 7 8 9
9 7 6 2 1
";
        assert_eq!(solve(input).unwrap(), Solution::new(0usize, 0usize));
    }

    #[test]
    fn dampener_removes_first_or_last_level() {
        for report in ["5 0 1 2 3", "1 2 3 4 0", "1 0 1 2 3", "0 1 2 3 2"] {
            assert_eq!(
                solve(report).unwrap(),
                Solution::new(0usize, 1usize),
                "{report}"
            );
        }
    }

    #[test]
    fn empty_report_is_an_error() {
        assert!(matches!(solve("1 2 3\n\n4 5 6\n"), Err(Error::Parse(_))));
    }
}
