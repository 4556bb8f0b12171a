//! Day 14: Restroom Redoubt.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static ROBOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("Invalid regex pattern")
});

pub const WIDTH: i64 = 101;
pub const HEIGHT: i64 = 103;
pub const SECONDS: i64 = 100;

/// Seconds searched for the easter egg before giving up.
const EASTER_EGG_LIMIT: i64 = 10_000;

/// Robots with a neighbour on their right needed to call it a picture.
const EASTER_EGG_NEIGHBOURS: usize = 200;

#[derive(Debug, Clone, Copy)]
struct Robot {
    p: (i64, i64),
    v: (i64, i64),
}

impl Robot {
    /// Position after `t` seconds on a `w` x `h` floor that wraps around.
    fn position(&self, t: i64, w: i64, h: i64) -> (i64, i64) {
        (
            (self.p.0 + self.v.0 * t).rem_euclid(w),
            (self.p.1 + self.v.1 * t).rem_euclid(h),
        )
    }
}

fn read_robots(input: &str) -> Result<Vec<Robot>> {
    input
        .lines()
        .map(|line| -> Result<Robot> {
            let caps = ROBOT
                .captures(line.trim())
                .ok_or_else(|| Error::parse(format!("invalid robot '{}'", line)))?;
            Ok(Robot {
                p: (parser::number(&caps[1])?, parser::number(&caps[2])?),
                v: (parser::number(&caps[3])?, parser::number(&caps[4])?),
            })
        })
        .collect()
}

/// Product of robot counts per quadrant; robots on a middle line do not count.
fn safety_factor(positions: &[(i64, i64)], w: i64, h: i64) -> i64 {
    let (mid_x, mid_y) = (w / 2, h / 2);
    // On odd sizes the middle row or column belongs to no quadrant.
    let (right_x, bottom_y) = (mid_x + w % 2, mid_y + h % 2);

    let mut quadrants = [0i64; 4];
    for &(x, y) in positions {
        let column = if x < mid_x {
            0
        } else if x >= right_x {
            1
        } else {
            continue;
        };
        let row = if y < mid_y {
            0
        } else if y >= bottom_y {
            2
        } else {
            continue;
        };
        quadrants[column + row] += 1;
    }

    quadrants.iter().product()
}

/// First second at which the robots bunch up into a picture.
fn easter_egg(robots: &[Robot], w: i64, h: i64) -> Option<i64> {
    (0..EASTER_EGG_LIMIT).find(|t| {
        let positions: Vec<_> = robots.iter().map(|r| r.position(*t, w, h)).collect();
        let occupied: HashSet<_> = positions.iter().copied().collect();
        positions
            .iter()
            .filter(|(x, y)| occupied.contains(&(x + 1, *y)))
            .count()
            > EASTER_EGG_NEIGHBOURS
    })
}

pub fn solve_with(input: &str, w: i64, h: i64, t: i64) -> Result<Solution> {
    let robots = read_robots(input)?;
    let positions: Vec<_> = robots.iter().map(|r| r.position(t, w, h)).collect();

    Ok(Solution::new(
        safety_factor(&positions, w, h),
        easter_egg(&robots, w, h),
    ))
}

pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, WIDTH, HEIGHT, SECONDS)
}
