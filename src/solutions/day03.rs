//! Day 3: Mull It Over.
//!
//! Corrupted memory holds `mul(X,Y)` instructions with one to three digit
//! operands among noise. Part two also honours `do()` and `don't()`.

use crate::error::Result;
use crate::models::puzzle::Solution;
use regex::Regex;
use std::sync::LazyLock;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("Invalid regex pattern")
});

#[derive(Debug, PartialEq, Eq)]
enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

fn scan(memory: &str) -> Result<Vec<Instruction>> {
    INSTRUCTION
        .captures_iter(memory)
        .map(|caps| -> Result<Instruction> {
            match (caps.get(1), caps.get(2)) {
                (Some(l), Some(r)) => {
                    Ok(Instruction::Mul(l.as_str().parse()?, r.as_str().parse()?))
                }
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            }
        })
        .collect()
}

pub fn solve(input: &str) -> Result<Solution> {
    let instructions = scan(input)?;

    let total: i64 = instructions
        .iter()
        .map(|i| match i {
            Instruction::Mul(l, r) => l * r,
            _ => 0,
        })
        .sum();

    let mut enabled = true;
    let mut total_enabled = 0i64;
    for instruction in &instructions {
        match instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(l, r) if enabled => total_enabled += l * r,
            Instruction::Mul(..) => {}
        }
    }

    Ok(Solution::new(total, total_enabled))
}
