//! Day 4: Ceres Search.

use crate::error::Result;
use crate::models::grid::{Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;

const XMAS: [char; 4] = ['X', 'M', 'A', 'S'];

/// Every direction a word can be written in, diagonals and backwards included.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

fn count_xmas(grid: &Grid<char>) -> usize {
    grid.points()
        .map(|p| {
            DIRECTIONS
                .iter()
                .filter(|(dx, dy)| {
                    XMAS.iter().zip(0isize..).all(|(c, k)| {
                        grid.offset(p, dx * k, dy * k).map(|q| grid[q]) == Some(*c)
                    })
                })
                .count()
        })
        .sum()
}

/// Both diagonals through `p` must read `MAS` one way or the other.
fn is_x_mas(grid: &Grid<char>, p: Point) -> bool {
    if grid[p] != 'A' {
        return false;
    }

    let at = |dx, dy| grid.offset(p, dx, dy).map(|q| grid[q]);
    let is_mas = |a: Option<char>, b: Option<char>| {
        matches!((a, b), (Some('M'), Some('S')) | (Some('S'), Some('M')))
    };

    is_mas(at(-1, -1), at(1, 1)) && is_mas(at(1, -1), at(-1, 1))
}

pub fn solve(input: &str) -> Result<Solution> {
    let grid = parser::char_grid(input)?;
    let x_mas = grid.points().filter(|p| is_x_mas(&grid, *p)).count();
    Ok(Solution::new(count_xmas(&grid), x_mas))
}
