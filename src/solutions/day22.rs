//! Day 22: Monkey Market.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;

const MODULUS: u64 = 16_777_216;
const ROUNDS: usize = 2000;

/// Price changes lie in -9..=9, so a window of four fits in 19^4 slots.
const CHANGES: usize = 19;
const WINDOWS: usize = CHANGES * CHANGES * CHANGES * CHANGES;

fn mix(secret: u64, value: u64) -> u64 {
    secret ^ value
}

fn prune(secret: u64) -> u64 {
    secret % MODULUS
}

fn evolve(secret: u64) -> u64 {
    let secret = prune(mix(secret, secret * 64));
    let secret = prune(mix(secret, secret / 32));
    prune(mix(secret, secret * 2048))
}

/// Next secret and the change in price (its last digit) it brings.
fn price_change(secret: u64) -> (u64, i64) {
    let next = evolve(secret);
    (next, (next % 10) as i64 - (secret % 10) as i64)
}

/// Adds this buyer's first sale price for every window of four changes.
fn tally(secret: u64, bananas: &mut [u64], seen: &mut [usize], buyer: usize) {
    let mut secret = secret;
    let mut window = 0;
    for round in 0..ROUNDS {
        let (next, change) = price_change(secret);
        secret = next;
        window = (window * CHANGES + (change + 9) as usize) % WINDOWS;
        if round >= 3 && seen[window] != buyer {
            seen[window] = buyer;
            bananas[window] += secret % 10;
        }
    }
}

/// Secrets always stay below the modulus, so a larger seed is malformed.
fn read_secret(line: &str) -> Result<u64> {
    let secret: u64 = parser::number(line)?;
    if secret >= MODULUS {
        return Err(Error::parse(format!("secret {} is not below {}", secret, MODULUS)));
    }
    Ok(secret)
}

pub fn solve(input: &str) -> Result<Solution> {
    let secrets: Vec<u64> = parser::lines(input)
        .map(read_secret)
        .collect::<Result<_>>()?;

    let total: u64 = secrets
        .iter()
        .map(|s| (0..ROUNDS).fold(*s, |s, _| evolve(s)))
        .sum();

    let mut bananas = vec![0u64; WINDOWS];
    // Buyers are numbered from 1 so a zeroed slot means unseen.
    let mut seen = vec![0usize; WINDOWS];
    for (i, secret) in secrets.iter().enumerate() {
        tally(*secret, &mut bananas, &mut seen, i + 1);
    }
    let best = bananas.into_iter().max().unwrap_or(0);

    Ok(Solution::new(total, best))
}
