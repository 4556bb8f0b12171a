//! Day 10: Hoof It.

use crate::error::Result;
use crate::models::grid::{Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::HashSet;

/// Returns the trailhead's score (distinct summits reached) and rating
/// (distinct hiking trails).
fn explore(map: &Grid<Option<u32>>, trailhead: Point) -> (usize, usize) {
    let mut summits = HashSet::new();
    let mut trails = 0;

    let mut stack = vec![(trailhead, 0)];
    while let Some((p, height)) = stack.pop() {
        if height == 9 {
            summits.insert(p);
            trails += 1;
            continue;
        }

        stack.extend(
            map.neighbours(p)
                .filter(|q| map[*q] == Some(height + 1))
                .map(|q| (q, height + 1)),
        );
    }

    (summits.len(), trails)
}

pub fn solve(input: &str) -> Result<Solution> {
    // Anything that is not a digit is impassable.
    let map = parser::char_grid(input)?.map(|c| c.to_digit(10));

    let (score, rating) = map
        .iter()
        .filter(|(_, h)| **h == Some(0))
        .map(|(p, _)| explore(&map, p))
        .fold((0, 0), |(s, r), (ds, dr)| (s + ds, r + dr));

    Ok(Solution::new(score, rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";
        assert_eq!(solve(input).unwrap(), Solution::new(36usize, 81usize));
    }

    #[test]
    fn impassable_tiles_block_trails() {
        let input = "...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        assert_eq!(solve(input).unwrap().part_one, 2usize.into());
    }
}
