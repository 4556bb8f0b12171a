//! Day 21: Keypad Conundrum.
//!
//! A press on one keypad costs the presses needed on the directional keypad
//! above it, recursively. Each robot's arm rests on `A` after every press, so
//! the cost of moving between two keys at a given depth is independent of
//! everything else and can be memoised.

use crate::error::{Error, Result};
use crate::models::grid::Point;
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::HashMap;

const ROBOTS: usize = 2;
const MANY_ROBOTS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Keypad {
    Numeric,
    Directional,
}

impl Keypad {
    fn position(self, key: char) -> Option<Point> {
        let (x, y) = match (self, key) {
            (Keypad::Numeric, '7') => (0, 0),
            (Keypad::Numeric, '8') => (1, 0),
            (Keypad::Numeric, '9') => (2, 0),
            (Keypad::Numeric, '4') => (0, 1),
            (Keypad::Numeric, '5') => (1, 1),
            (Keypad::Numeric, '6') => (2, 1),
            (Keypad::Numeric, '1') => (0, 2),
            (Keypad::Numeric, '2') => (1, 2),
            (Keypad::Numeric, '3') => (2, 2),
            (Keypad::Numeric, '0') => (1, 3),
            (Keypad::Numeric, 'A') => (2, 3),
            (Keypad::Directional, '^') => (1, 0),
            (Keypad::Directional, 'A') => (2, 0),
            (Keypad::Directional, '<') => (0, 1),
            (Keypad::Directional, 'v') => (1, 1),
            (Keypad::Directional, '>') => (2, 1),
            _ => return None,
        };
        Some(Point::new(x, y))
    }

    fn gap(self) -> Point {
        match self {
            Keypad::Numeric => Point::new(0, 3),
            Keypad::Directional => Point::new(0, 0),
        }
    }

    /// Every shortest press sequence moving from `from` to `to` and pressing
    /// it, never hovering over the gap.
    fn paths(self, from: char, to: char) -> Result<Vec<String>> {
        let key = |c: char| {
            self.position(c)
                .ok_or_else(|| Error::parse(format!("no key '{}' on the keypad", c)))
        };
        let (a, b) = (key(from)?, key(to)?);

        let mut paths = Vec::new();
        self.walk(a, b, &mut String::new(), &mut paths);
        Ok(paths)
    }

    fn walk(self, at: Point, to: Point, pressed: &mut String, paths: &mut Vec<String>) {
        if at == self.gap() {
            return;
        }
        if at == to {
            paths.push(format!("{}A", pressed));
            return;
        }

        let steps = [
            (at.x < to.x, '>', 1, 0),
            (at.x > to.x, '<', -1, 0),
            (at.y < to.y, 'v', 0, 1),
            (at.y > to.y, '^', 0, -1),
        ];
        for (needed, arrow, dx, dy) in steps {
            let Some(next) = at.offset(dx, dy).filter(|_| needed) else {
                continue;
            };
            pressed.push(arrow);
            self.walk(next, to, pressed, paths);
            pressed.pop();
        }
    }
}

struct Robots {
    memo: HashMap<(Keypad, char, char, usize), u64>,
}

impl Robots {
    fn new() -> Self {
        Robots {
            memo: HashMap::new(),
        }
    }

    /// Presses needed to type `keys` through `layers` keypads, the first of
    /// which is `pad` and the rest directional.
    fn cost(&mut self, pad: Keypad, keys: &str, layers: usize) -> Result<u64> {
        if layers == 0 {
            return Ok(keys.len() as u64);
        }

        let mut total = 0;
        let mut from = 'A';
        for to in keys.chars() {
            total += self.step_cost(pad, from, to, layers)?;
            from = to;
        }
        Ok(total)
    }

    fn step_cost(&mut self, pad: Keypad, from: char, to: char, layers: usize) -> Result<u64> {
        let memo_key = (pad, from, to, layers);
        if let Some(&cost) = self.memo.get(&memo_key) {
            return Ok(cost);
        }

        let mut best = u64::MAX;
        for path in pad.paths(from, to)? {
            best = best.min(self.cost(Keypad::Directional, &path, layers - 1)?);
        }

        self.memo.insert(memo_key, best);
        Ok(best)
    }

    /// Length of the shortest sequence typed on the outermost keypad.
    fn code_cost(&mut self, code: &str, layers: usize) -> Result<u64> {
        self.cost(Keypad::Numeric, code, layers)
    }
}

fn complexity(robots: &mut Robots, code: &str, layers: usize) -> Result<u64> {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    let value: u64 = parser::number(&digits)?;
    Ok(robots.code_cost(code, layers)? * value)
}

pub fn solve(input: &str) -> Result<Solution> {
    let codes: Vec<&str> = parser::lines(input).collect();
    let mut robots = Robots::new();

    // One layer for the numeric keypad plus one per directional keypad.
    let mut few = 0;
    let mut many = 0;
    for code in &codes {
        few += complexity(&mut robots, code, ROBOTS + 1)?;
        many += complexity(&mut robots, code, MANY_ROBOTS + 1)?;
    }

    Ok(Solution::new(few, many))
}
