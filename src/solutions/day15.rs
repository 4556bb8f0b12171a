//! Day 15: Warehouse Woes.
//!
//! The robot pushes every box in its way unless something in the pushed
//! group is up against a wall. In the widened warehouse boxes are two cells
//! wide (`[]`), so a vertical push can fan out sideways.

use crate::error::{Error, Result};
use crate::models::grid::{Direction, Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::{HashSet, VecDeque};

struct Warehouse {
    map: Grid<char>,
    robot: Point,
}

impl Warehouse {
    fn new(map: Grid<char>) -> Result<Self> {
        let robot = map
            .find(&'@')
            .ok_or_else(|| Error::parse("no robot in the warehouse"))?;
        Ok(Warehouse { map, robot })
    }

    /// Same layout with everything but the robot twice as wide.
    fn widened(&self) -> Result<Self> {
        let rows: Vec<Vec<char>> = (0..self.map.height())
            .map(|y| {
                (0..self.map.width())
                    .flat_map(|x| match self.map[Point::new(x, y)] {
                        '#' => ['#', '#'],
                        'O' => ['[', ']'],
                        '@' => ['@', '.'],
                        _ => ['.', '.'],
                    })
                    .collect()
            })
            .collect();
        Warehouse::new(Grid::from_rows(rows)?)
    }

    /// Moves the robot one step if the whole pushed group can move.
    fn advance(&mut self, dir: Direction) {
        let mut moving: Vec<(Point, Point)> = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([self.robot]);

        while let Some(p) = queue.pop_front() {
            if !seen.insert(p) {
                continue;
            }
            let Some(next) = self.map.step(p, dir) else {
                return;
            };
            moving.push((p, next));

            match self.map[next] {
                '#' => return,
                'O' => queue.push_back(next),
                '[' | ']' => {
                    queue.push_back(next);
                    if dir.is_vertical() {
                        let partner = if self.map[next] == '[' {
                            Direction::East
                        } else {
                            Direction::West
                        };
                        if let Some(other_half) = self.map.step(next, partner) {
                            queue.push_back(other_half);
                        }
                    }
                }
                _ => {}
            }
        }

        let contents: Vec<char> = moving.iter().map(|(from, _)| self.map[*from]).collect();
        for (from, _) in &moving {
            self.map[*from] = '.';
        }
        for ((_, to), c) in moving.iter().zip(contents) {
            self.map[*to] = c;
        }

        if let Some((_, to)) = moving.first() {
            self.robot = *to;
        }
    }

    fn gps_sum(&self) -> usize {
        self.map
            .iter()
            .filter(|(_, c)| matches!(c, 'O' | '['))
            .map(|(p, _)| 100 * p.y + p.x)
            .sum()
    }
}

fn read_input(input: &str) -> Result<(Warehouse, Vec<Direction>)> {
    let sections = parser::sections(input);
    let (map, moves) = sections
        .split_first()
        .ok_or_else(|| Error::parse("empty input"))?;

    let warehouse = Warehouse::new(parser::grid_from_lines(map.iter().copied())?)?;
    let moves = moves
        .iter()
        .flatten()
        .flat_map(|line| line.chars())
        .filter_map(Direction::from_arrow)
        .collect();

    Ok((warehouse, moves))
}

pub fn solve(input: &str) -> Result<Solution> {
    let (mut warehouse, moves) = read_input(input)?;
    let mut wide = warehouse.widened()?;

    for dir in &moves {
        warehouse.advance(*dir);
        wide.advance(*dir);
    }

    Ok(Solution::new(warehouse.gps_sum(), wide.gps_sum()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_example() {
        let input = "########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<";
        assert_eq!(solve(input).unwrap(), Solution::new(2028usize, 1751usize));
    }

    #[test]
    fn larger_example() {
        let input = "##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";
        assert_eq!(solve(input).unwrap(), Solution::new(10092usize, 9021usize));
    }

    #[test]
    fn wide_boxes_push_each_other() {
        let input = "#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^";
        let (warehouse, moves) = read_input(input).unwrap();
        let mut wide = warehouse.widened().unwrap();
        for dir in moves {
            wide.advance(dir);
        }
        let layout: Vec<String> = (0..wide.map.height())
            .map(|y| (0..wide.map.width()).map(|x| wide.map[Point::new(x, y)]).collect())
            .collect();
        assert_eq!(
            layout,
            vec![
                "##############",
                "##...[].##..##",
                "##...@.[]...##",
                "##....[]....##",
                "##..........##",
                "##..........##",
                "##############",
            ]
        );
    }
}
