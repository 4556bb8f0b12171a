//! Day 18: RAM Run.

use crate::error::{Error, Result};
use crate::models::grid::{Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::VecDeque;

pub const SIZE: usize = 71;
pub const FALLEN: usize = 1024;

fn read_bytes(input: &str, w: usize, h: usize) -> Result<Vec<Point>> {
    parser::lines(input)
        .map(|line| -> Result<Point> {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| Error::parse(format!("invalid byte position '{}'", line)))?;
            let p = Point::new(parser::number(x)?, parser::number(y)?);
            if p.x >= w || p.y >= h {
                return Err(Error::parse(format!(
                    "byte {},{} falls outside the {}x{} memory space",
                    p.x, p.y, w, h
                )));
            }
            Ok(p)
        })
        .collect()
}

/// Steps from the top left to the bottom right corner, avoiding corrupted cells.
fn shortest_path(corrupted: &Grid<bool>) -> Option<usize> {
    let start = Point::new(0, 0);
    let exit = Point::new(corrupted.width() - 1, corrupted.height() - 1);
    if corrupted[start] || corrupted[exit] {
        return None;
    }

    let mut dist = Grid::filled(corrupted.width(), corrupted.height(), None);
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(p) = queue.pop_front() {
        let steps = dist[p]?;
        if p == exit {
            return Some(steps);
        }
        for q in corrupted.neighbours(p) {
            if !corrupted[q] && dist[q].is_none() {
                dist[q] = Some(steps + 1);
                queue.push_back(q);
            }
        }
    }

    None
}

fn corrupt(bytes: &[Point], w: usize, h: usize) -> Grid<bool> {
    let mut grid = Grid::filled(w, h, false);
    for p in bytes {
        grid[*p] = true;
    }
    grid
}

/// First byte after which the exit can no longer be reached.
fn first_blocking(bytes: &[Point], w: usize, h: usize) -> Option<Point> {
    // Invariant: the path is open after `lo` bytes and closed after `hi`.
    let (mut lo, mut hi) = (0, bytes.len());
    if shortest_path(&corrupt(bytes, w, h)).is_some() {
        return None;
    }
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if shortest_path(&corrupt(&bytes[..mid], w, h)).is_some() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(bytes[hi - 1])
}

pub fn solve_with(input: &str, w: usize, h: usize, fallen: usize) -> Result<Solution> {
    if w == 0 || h == 0 {
        return Err(Error::parse("memory space must not be empty"));
    }
    let bytes = read_bytes(input, w, h)?;

    let steps = shortest_path(&corrupt(&bytes[..fallen.min(bytes.len())], w, h));
    let blocking = first_blocking(&bytes, w, h).map(|p| format!("{},{}", p.x, p.y));

    Ok(Solution::new(steps, blocking))
}

pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, SIZE, SIZE, FALLEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::puzzle::Answer;

    const EXAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn example() {
        let solution = solve_with(EXAMPLE, 7, 7, 12).unwrap();
        assert_eq!(solution, Solution::new(22usize, "6,1"));
    }

    #[test]
    fn nothing_blocks() {
        let solution = solve_with("1,1\n", 3, 3, 1).unwrap();
        assert_eq!(solution.part_one, Answer::Number(4));
        assert_eq!(solution.part_two, Answer::Missing);
    }

    #[test]
    fn byte_on_the_start_blocks_at_once() {
        let solution = solve_with("0,0\n", 3, 3, 1).unwrap();
        assert_eq!(solution.part_one, Answer::Missing);
        assert_eq!(solution.part_two, Answer::Text("0,0".to_string()));
    }

    #[test]
    fn byte_out_of_range() {
        assert!(matches!(solve_with("7,0\n", 7, 7, 1), Err(Error::Parse(_))));
    }
}
