//! Day 20: Race Condition.
//!
//! The track is a single path, so every cheat is a jump between two track
//! cells within the cheat's radius. It saves the difference in distance from
//! the start minus the length of the jump.

use crate::error::{Error, Result};
use crate::models::grid::Grid;
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::VecDeque;

const SHORT_CHEAT: usize = 2;
const LONG_CHEAT: usize = 20;
const MIN_SAVED: usize = 100;

/// Distance from the start for every reachable track cell.
fn distances(map: &Grid<char>) -> Result<Grid<Option<usize>>> {
    let start = map
        .find(&'S')
        .ok_or_else(|| Error::parse("race track has no start"))?;

    let mut dist = Grid::filled(map.width(), map.height(), None);
    dist[start] = Some(0);
    let mut queue = VecDeque::from([(start, 0)]);

    while let Some((p, d)) = queue.pop_front() {
        for q in map.neighbours(p) {
            if map[q] != '#' && dist[q].is_none() {
                dist[q] = Some(d + 1);
                queue.push_back((q, d + 1));
            }
        }
    }

    Ok(dist)
}

/// Cheats of at most `radius` picoseconds saving at least `min_saved`.
fn count_cheats(dist: &Grid<Option<usize>>, radius: usize, min_saved: usize) -> usize {
    let r = radius as isize;
    let mut count = 0;

    for (from, d1) in dist.iter() {
        let Some(d1) = *d1 else { continue };
        for dy in -r..=r {
            let span = r - dy.abs();
            for dx in -span..=span {
                let Some(to) = dist.offset(from, dx, dy) else {
                    continue;
                };
                let Some(d2) = dist[to] else { continue };
                let jump = from.manhattan(to);
                if d2 >= d1 + jump + min_saved {
                    count += 1;
                }
            }
        }
    }

    count
}

pub fn solve_with(
    input: &str,
    short: usize,
    short_min: usize,
    long: usize,
    long_min: usize,
) -> Result<Solution> {
    let map = parser::char_grid(input)?;
    let dist = distances(&map)?;

    Ok(Solution::new(
        count_cheats(&dist, short, short_min),
        count_cheats(&dist, long, long_min),
    ))
}

pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, SHORT_CHEAT, MIN_SAVED, LONG_CHEAT, MIN_SAVED)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn example() {
        assert_eq!(
            solve_with(EXAMPLE, 2, 1, 20, 50).unwrap(),
            Solution::new(44usize, 285usize)
        );
    }

    #[test]
    fn thresholds() {
        let dist = distances(&parser::char_grid(EXAMPLE).unwrap()).unwrap();
        assert_eq!(count_cheats(&dist, 2, 64), 1);
        assert_eq!(count_cheats(&dist, 2, 40), 2);
        assert_eq!(count_cheats(&dist, 20, 76), 3);
        assert_eq!(count_cheats(&dist, 20, 74), 7);
    }

    #[test]
    fn missing_start() {
        assert!(matches!(solve("#.E#\n"), Err(Error::Parse(_))));
    }
}
