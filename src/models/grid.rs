//! Rectangular grids addressed by [`Point`], the shape most puzzle inputs take.

use crate::error::{Error, Result};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Moves by a signed offset; `None` when either coordinate would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    pub fn manhattan(self, other: Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Compass direction with `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Parses the `^ > v <` arrows puzzles use for headings and moves.
    pub fn from_arrow(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    /// Bit used when a set of directions is packed into a `u8`.
    pub fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::parse(format!(
                    "row {} has {} cells, expected {}",
                    y + 1,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            self.cells.get(p.y * self.width + p.x)
        } else {
            None
        }
    }

    /// Offsets `p`, returning the result only when it stays on the grid.
    pub fn offset(&self, p: Point, dx: isize, dy: isize) -> Option<Point> {
        p.offset(dx, dy).filter(|q| self.contains(*q))
    }

    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let (dx, dy) = dir.delta();
        self.offset(p, dx, dy)
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(p, dir))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (Point::new(i % self.width, i / self.width), v))
    }

    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    pub fn find(&self, value: &T) -> Option<Point> {
        self.position(|v| v == value)
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        assert!(self.contains(p), "{:?} is outside the grid", p);
        &self.cells[p.y * self.width + p.x]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        assert!(self.contains(p), "{:?} is outside the grid", p);
        &mut self.cells[p.y * self.width + p.x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<char> {
        Grid::from_rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]).unwrap()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.to_string(), "row 2 has 1 cells, expected 2");
    }

    #[test]
    fn offsets_stay_on_the_grid() {
        let grid = sample();
        assert_eq!(grid.offset(Point::new(0, 0), -1, 0), None);
        assert_eq!(grid.offset(Point::new(2, 1), 1, 0), None);
        assert_eq!(grid.offset(Point::new(1, 0), 1, 1), Some(Point::new(2, 1)));
    }

    #[test]
    fn corner_has_two_neighbours() {
        let grid = sample();
        let mut n: Vec<_> = grid.neighbours(Point::new(0, 0)).collect();
        n.sort();
        assert_eq!(n, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn find_scans_row_major() {
        let grid = sample();
        assert_eq!(grid.find(&'e'), Some(Point::new(1, 1)));
        assert_eq!(grid.find(&'z'), None);
        assert_eq!(grid.points().count(), 6);
    }

    #[test]
    fn turning_four_times_is_identity() {
        for dir in Direction::ALL {
            let turned = dir.clockwise().clockwise().clockwise().clockwise();
            assert_eq!(turned, dir);
            assert_eq!(dir.clockwise().counter_clockwise(), dir);
        }
    }
}
