//! Puzzle solvers, one module per day, and the index that ties them together.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;
pub mod day23;

use crate::error::{Error, Result};
use crate::models::puzzle::{Day, PuzzleEntry, Solution};

/// Puzzle titles of the 2024 event, indexed by day - 1.
const TITLES: [&str; 25] = [
    "Historian Hysteria",
    "Red-Nosed Reports",
    "Mull It Over",
    "Ceres Search",
    "Print Queue",
    "Guard Gallivant",
    "Bridge Repair",
    "Resonant Collinearity",
    "Disk Fragmenter",
    "Hoof It",
    "Plutonian Pebbles",
    "Garden Groups",
    "Claw Contraption",
    "Restroom Redoubt",
    "Warehouse Woes",
    "Reindeer Maze",
    "Chronospatial Computer",
    "RAM Run",
    "Linen Layout",
    "Race Condition",
    "Keypad Conundrum",
    "Monkey Market",
    "LAN Party",
    "Crossed Wires",
    "Code Chronicle",
];

type Solver = fn(&str) -> Result<Solution>;

const SOLVERS: [Solver; 23] = [
    day01::solve,
    day02::solve,
    day03::solve,
    day04::solve,
    day05::solve,
    day06::solve,
    day07::solve,
    day08::solve,
    day09::solve,
    day10::solve,
    day11::solve,
    day12::solve,
    day13::solve,
    day14::solve,
    day15::solve,
    day16::solve,
    day17::solve,
    day18::solve,
    day19::solve,
    day20::solve,
    day21::solve,
    day22::solve,
    day23::solve,
];

pub fn title(day: Day) -> &'static str {
    TITLES[usize::from(day.number() - 1)]
}

/// The full calendar, solved or not.
pub fn index() -> Vec<PuzzleEntry> {
    Day::all().map(|day| PuzzleEntry::new(day, title(day))).collect()
}

fn solver(day: Day) -> Option<Solver> {
    SOLVERS.get(usize::from(day.number() - 1)).copied()
}

pub fn is_solved(day: Day) -> bool {
    solver(day).is_some()
}

pub fn solved_days() -> impl Iterator<Item = Day> {
    Day::all().filter(|day| is_solved(*day))
}

/// Runs the solver for `day` on `input`.
pub fn solve(day: Day, input: &str) -> Result<Solution> {
    let solve = solver(day).ok_or(Error::Unsolved(day.number()))?;
    solve(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_covers_the_whole_calendar() {
        let index = index();
        assert_eq!(index.len(), 25);
        assert_eq!(index[0].title, "Historian Hysteria");
        assert_eq!(index[0].link, "./day1");
        assert_eq!(index[24].day.number(), 25);
    }

    #[test]
    fn last_two_days_are_unsolved() {
        assert_eq!(solved_days().count(), 23);
        let day24 = Day::new(24).unwrap();
        assert!(!is_solved(day24));
        assert!(matches!(solve(day24, ""), Err(Error::Unsolved(24))));
    }

    #[test]
    fn dispatches_to_the_right_day() {
        let day1 = Day::new(1).unwrap();
        let solution = solve(day1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n").unwrap();
        assert_eq!(solution, Solution::new(11i64, 31i64));
    }
}
