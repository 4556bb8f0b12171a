//! Day 16: Reindeer Maze.
//!
//! Dijkstra over (tile, heading) states. Stepping forward costs 1 point and
//! turning in place costs 1000. The tiles on any best path are found by
//! walking the cost table backwards from the end.

use crate::error::{Error, Result};
use crate::models::grid::{Direction, Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

const STEP_COST: usize = 1;
const TURN_COST: usize = 1000;

type State = (Point, Direction);

struct Maze {
    map: Grid<char>,
    start: Point,
    end: Point,
}

impl Maze {
    fn new(map: Grid<char>) -> Result<Self> {
        let start = map.find(&'S').ok_or_else(|| Error::parse("maze has no start"))?;
        let end = map.find(&'E').ok_or_else(|| Error::parse("maze has no end"))?;
        Ok(Maze { map, start, end })
    }

    fn open(&self, p: Point) -> bool {
        self.map.get(p).is_some_and(|c| *c != '#')
    }

    fn moves(&self, (p, dir): State) -> Vec<(State, usize)> {
        let mut moves = vec![
            ((p, dir.clockwise()), TURN_COST),
            ((p, dir.counter_clockwise()), TURN_COST),
        ];
        if let Some(next) = self.map.step(p, dir).filter(|q| self.open(*q)) {
            moves.push(((next, dir), STEP_COST));
        }
        moves
    }

    /// States that reach `(p, dir)` with a single move.
    fn predecessors(&self, (p, dir): State) -> Vec<(State, usize)> {
        let mut prev = vec![
            ((p, dir.counter_clockwise()), TURN_COST),
            ((p, dir.clockwise()), TURN_COST),
        ];
        let (dx, dy) = dir.delta();
        if let Some(back) = self.map.offset(p, -dx, -dy).filter(|q| self.open(*q)) {
            prev.push(((back, dir), STEP_COST));
        }
        prev
    }

    fn costs(&self) -> HashMap<State, usize> {
        let mut best: HashMap<State, usize> = HashMap::new();
        let mut queue = BinaryHeap::new();

        let start = (self.start, Direction::East);
        best.insert(start, 0);
        queue.push(Reverse((0, start)));

        while let Some(Reverse((cost, state))) = queue.pop() {
            if best.get(&state).is_some_and(|b| *b < cost) {
                continue;
            }
            for (next, step) in self.moves(state) {
                let next_cost = cost + step;
                if best.get(&next).is_none_or(|b| next_cost < *b) {
                    best.insert(next, next_cost);
                    queue.push(Reverse((next_cost, next)));
                }
            }
        }

        best
    }
}

pub fn solve(input: &str) -> Result<Solution> {
    let maze = Maze::new(parser::char_grid(input)?)?;
    let costs = maze.costs();

    let Some(lowest) = Direction::ALL
        .into_iter()
        .filter_map(|dir| costs.get(&(maze.end, dir)).copied())
        .min()
    else {
        return Ok(Solution::new(None::<usize>, None::<usize>));
    };

    let mut stack: Vec<State> = Direction::ALL
        .into_iter()
        .map(|dir| (maze.end, dir))
        .filter(|state| costs.get(state) == Some(&lowest))
        .collect();
    let mut on_best_path: HashSet<State> = stack.iter().copied().collect();

    while let Some(state) = stack.pop() {
        let cost = costs[&state];
        for (prev, step) in maze.predecessors(state) {
            let on_path = cost
                .checked_sub(step)
                .is_some_and(|expected| costs.get(&prev) == Some(&expected));
            if on_path && on_best_path.insert(prev) {
                stack.push(prev);
            }
        }
    }

    let tiles: HashSet<Point> = on_best_path.into_iter().map(|(p, _)| p).collect();
    Ok(Solution::new(lowest, tiles.len()))
}
