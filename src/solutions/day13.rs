//! Day 13: Claw Contraption.
//!
//! Each machine is a pair of linear equations
//!
//! ```text
//! a_x * a + b_x * b = x
//! a_y * a + b_y * b = y
//! ```
//!
//! solved with Cramer's rule. A prize is winnable only when both press
//! counts are non-negative integers.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex pattern"));

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn read_machines(input: &str) -> Result<Vec<Machine>> {
    parser::sections(input)
        .into_iter()
        .map(|section| -> Result<Machine> {
            let text = section.join("\n");
            let n: Vec<i64> = NUMBER
                .find_iter(&text)
                .map(|m| parser::number(m.as_str()))
                .collect::<Result<_>>()?;
            match n.as_slice() {
                &[ax, ay, bx, by, px, py] => Ok(Machine {
                    a: (ax, ay),
                    b: (bx, by),
                    prize: (px, py),
                }),
                _ => Err(Error::parse(format!("unexpected machine description:\n{}", text))),
            }
        })
        .collect()
}

impl Machine {
    /// Tokens needed to win with the prize moved by `offset`, if it can be won.
    fn tokens(&self, offset: i64) -> Option<i64> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (x, y) = (self.prize.0 + offset, self.prize.1 + offset);

        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }

        let a_num = x * by - y * bx;
        let b_num = ax * y - ay * x;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }

        let (a, b) = (a_num / det, b_num / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

pub fn solve(input: &str) -> Result<Solution> {
    let machines = read_machines(input)?;

    let tokens: i64 = machines.iter().filter_map(|m| m.tokens(0)).sum();
    let tokens_far: i64 = machines.iter().filter_map(|m| m.tokens(PRIZE_OFFSET)).sum();

    Ok(Solution::new(tokens, tokens_far))
}
