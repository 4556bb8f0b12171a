//! Day 6: Guard Gallivant.
//!
//! The guard walks forward and turns right in front of obstructions until
//! leaving the lab. Part two counts the single extra obstructions that trap
//! the guard in a loop.

use crate::error::{Error, Result};
use crate::models::grid::{Direction, Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;

enum Patrol {
    /// The guard left the map; the grid marks every visited position.
    Exits(Grid<bool>),
    Loops,
}

fn patrol(map: &Grid<char>, start: Point, heading: Direction, extra: Option<Point>) -> Patrol {
    // Headings already seen at each position, one bit per direction.
    let mut seen = Grid::filled(map.width(), map.height(), 0u8);
    let mut pos = start;
    let mut dir = heading;

    loop {
        if seen[pos] & dir.bit() != 0 {
            return Patrol::Loops;
        }
        seen[pos] |= dir.bit();

        let Some(next) = map.step(pos, dir) else {
            return Patrol::Exits(seen.map(|bits| *bits != 0));
        };

        if map[next] == '#' || Some(next) == extra {
            dir = dir.clockwise();
        } else {
            pos = next;
        }
    }
}

pub fn solve(input: &str) -> Result<Solution> {
    let map = parser::char_grid(input)?;
    let (start, heading) = map
        .iter()
        .find_map(|(p, c)| Direction::from_arrow(*c).map(|d| (p, d)))
        .ok_or_else(|| Error::parse("no guard on the map"))?;

    let visited = match patrol(&map, start, heading, None) {
        Patrol::Exits(visited) => visited,
        Patrol::Loops => return Err(Error::parse("the guard never leaves the map")),
    };

    // Only cells on the unobstructed route can change it.
    let candidates: Vec<Point> = visited
        .iter()
        .filter(|(p, v)| **v && *p != start)
        .map(|(p, _)| p)
        .collect();

    let loops = candidates
        .iter()
        .filter(|p| matches!(patrol(&map, start, heading, Some(**p)), Patrol::Loops))
        .count();

    Ok(Solution::new(visited.iter().filter(|(_, v)| **v).count(), loops))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";
        assert_eq!(solve(input).unwrap(), Solution::new(41usize, 6usize));
    }

    #[test]
    fn map_without_guard() {
        assert!(matches!(solve("...\n.#.\n"), Err(Error::Parse(_))));
    }

    #[test]
    fn boxed_in_guard_loops() {
        let input = ".#.
#^#
.#.
";
        assert!(matches!(solve(input), Err(Error::Parse(_))));
    }
}
