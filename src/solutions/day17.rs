//! Day 17: Chronospatial Computer.
//!
//! A 3-bit machine with three registers. Part two looks for the smallest
//! value of register A that makes the program print itself. Every program
//! of interest shifts A right by three bits per output, so the search builds
//! A three bits at a time, matching the program from its last value back.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;

/// Instructions executed before a run is declared stuck.
const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registers {
    a: u64,
    b: u64,
    c: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Computer {
    registers: Registers,
    program: Vec<u8>,
}

impl Computer {
    fn combo(&self, regs: &Registers, operand: u8) -> Result<u64> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(regs.a),
            5 => Ok(regs.b),
            6 => Ok(regs.c),
            _ => Err(Error::Vm(format!("invalid combo operand {}", operand))),
        }
    }

    /// Runs the program with register A set to `a` and returns its output.
    fn run(&self, a: u64) -> Result<Vec<u8>> {
        let mut regs = Registers { a, ..self.registers };
        let mut output = Vec::new();
        let mut ip = 0;

        for _ in 0..STEP_LIMIT {
            let Some(&opcode) = self.program.get(ip) else {
                return Ok(output);
            };
            let &operand = self
                .program
                .get(ip + 1)
                .ok_or_else(|| Error::Vm(format!("opcode {} at {} has no operand", opcode, ip)))?;

            let shifted = |regs: &Registers| -> Result<u64> {
                let shift = self.combo(regs, operand)?;
                Ok(u32::try_from(shift)
                    .ok()
                    .and_then(|s| regs.a.checked_shr(s))
                    .unwrap_or(0))
            };

            ip += 2;
            match opcode {
                0 => regs.a = shifted(&regs)?,
                1 => regs.b ^= u64::from(operand),
                2 => regs.b = self.combo(&regs, operand)? % 8,
                3 => {
                    if regs.a != 0 {
                        ip = usize::from(operand);
                    }
                }
                4 => regs.b ^= regs.c,
                5 => output.push((self.combo(&regs, operand)? % 8) as u8),
                6 => regs.b = shifted(&regs)?,
                7 => regs.c = shifted(&regs)?,
                _ => return Err(Error::Vm(format!("invalid opcode {}", opcode))),
            }
        }

        Err(Error::Vm(format!(
            "program did not halt within {} steps",
            STEP_LIMIT
        )))
    }

    /// Smallest A whose output is the program itself.
    ///
    /// A candidate that faults or never halts is not a match.
    fn quine(&self) -> Option<u64> {
        self.extend_quine(0, 0)
    }

    fn extend_quine(&self, prefix: u64, matched: usize) -> Option<u64> {
        if matched == self.program.len() {
            return Some(prefix);
        }

        let suffix = &self.program[self.program.len() - matched - 1..];
        for bits in 0..8 {
            let a = prefix.checked_mul(8)? + bits;
            // A = 0 halts before printing anything useful.
            if a == 0 {
                continue;
            }
            if !matches!(self.run(a), Ok(out) if out == suffix) {
                continue;
            }
            if let Some(found) = self.extend_quine(a, matched + 1) {
                return Some(found);
            }
        }

        None
    }
}

fn register(line: Option<&str>, name: &str) -> Result<u64> {
    let label = format!("Register {}:", name);
    line.and_then(|l| l.trim().strip_prefix(label.as_str()))
        .ok_or_else(|| Error::parse(format!("missing register {}", name)))
        .and_then(parser::number)
}

fn read_computer(input: &str) -> Result<Computer> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());

    let registers = Registers {
        a: register(lines.next(), "A")?,
        b: register(lines.next(), "B")?,
        c: register(lines.next(), "C")?,
    };

    let program = lines
        .next()
        .and_then(|l| l.trim().strip_prefix("Program:"))
        .ok_or_else(|| Error::parse("missing program"))?;
    let program: Vec<u8> = parser::numbers(program, ',')?;
    if let Some(bad) = program.iter().find(|n| **n > 7) {
        return Err(Error::parse(format!("{} is not a 3-bit value", bad)));
    }

    Ok(Computer { registers, program })
}

pub fn solve(input: &str) -> Result<Solution> {
    let computer = read_computer(input)?;

    let output = computer
        .run(computer.registers.a)?
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Solution::new(output, computer.quine()))
}
