//! Day 11: Plutonian Pebbles.
//!
//! Stone order never affects how a stone evolves, so stones are tracked as a
//! count per engraved number.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::HashMap;

type Stones = HashMap<u64, u64>;

fn read_stones(input: &str) -> Result<Stones> {
    let mut stones = Stones::new();
    for n in input.split_whitespace() {
        *stones.entry(parser::number(n)?).or_default() += 1;
    }
    Ok(stones)
}

fn blink(stones: &Stones) -> Result<Stones> {
    let mut next = Stones::with_capacity(stones.len());
    let mut add = |stone: u64, n: u64| *next.entry(stone).or_default() += n;

    for (&stone, &n) in stones {
        if stone == 0 {
            add(1, n);
            continue;
        }

        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            add(stone / half, n);
            add(stone % half, n);
        } else {
            let grown = stone.checked_mul(2024).ok_or_else(|| {
                Error::parse(format!("stone {} grows past the largest engraving", stone))
            })?;
            add(grown, n);
        }
    }

    Ok(next)
}

fn count(stones: &Stones) -> u64 {
    stones.values().sum()
}

pub fn solve(input: &str) -> Result<Solution> {
    let mut stones = read_stones(input)?;

    for _ in 0..25 {
        stones = blink(&stones)?;
    }
    let after_25 = count(&stones);

    for _ in 25..75 {
        stones = blink(&stones)?;
    }

    Ok(Solution::new(after_25, count(&stones)))
}
