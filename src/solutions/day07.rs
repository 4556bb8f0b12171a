//! Day 7: Bridge Repair.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;

struct Equation {
    target: u64,
    numbers: Vec<u64>,
}

fn read_equations(input: &str) -> Result<Vec<Equation>> {
    input
        .lines()
        .map(|line| -> Result<Equation> {
            let (target, numbers) = line
                .split_once(':')
                .ok_or_else(|| Error::parse(format!("missing ':' in '{}'", line)))?;
            Ok(Equation {
                target: parser::number(target)?,
                numbers: parser::numbers(numbers, ' ')?,
            })
        })
        .collect()
}

/// Joins the digits of `r` onto `l`, e.g. `12 || 345 = 12345`.
fn concat(l: u64, r: u64) -> Option<u64> {
    let digits = r.checked_ilog10().unwrap_or(0) + 1;
    l.checked_mul(10u64.checked_pow(digits)?)?.checked_add(r)
}

/// Operators are evaluated left to right, without precedence.
fn reachable(target: u64, acc: u64, rest: &[u64], with_concat: bool) -> bool {
    let Some((&n, tail)) = rest.split_first() else {
        return acc == target;
    };

    // None of the operators shrink the total unless a zero is involved.
    if acc > target && !rest.contains(&0) {
        return false;
    }

    let try_next =
        |next: Option<u64>| next.is_some_and(|v| reachable(target, v, tail, with_concat));

    try_next(acc.checked_add(n))
        || try_next(acc.checked_mul(n))
        || (with_concat && try_next(concat(acc, n)))
}

impl Equation {
    fn is_possible(&self, with_concat: bool) -> bool {
        match self.numbers.split_first() {
            Some((&first, rest)) => reachable(self.target, first, rest, with_concat),
            None => false,
        }
    }
}

pub fn solve(input: &str) -> Result<Solution> {
    let equations = read_equations(input)?;

    let mut total = 0u64;
    let mut total_with_concat = 0u64;
    for eq in &equations {
        if eq.is_possible(false) {
            total += eq.target;
            total_with_concat += eq.target;
        } else if eq.is_possible(true) {
            total_with_concat += eq.target;
        }
    }

    Ok(Solution::new(total, total_with_concat))
}
