//! Day 12: Garden Groups.
//!
//! A region's number of sides equals its number of corners, which can be
//! counted cell by cell.

use crate::error::Result;
use crate::models::grid::{Direction, Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;

struct Region {
    area: usize,
    perimeter: usize,
    sides: usize,
}

fn same_plant(map: &Grid<char>, p: Point, dx: isize, dy: isize) -> bool {
    map.offset(p, dx, dy).is_some_and(|q| map[q] == map[p])
}

fn corners(map: &Grid<char>, p: Point) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|dir| {
            let (ax, ay) = dir.delta();
            let (bx, by) = dir.clockwise().delta();
            let a = same_plant(map, p, ax, ay);
            let b = same_plant(map, p, bx, by);
            let diagonal = same_plant(map, p, ax + bx, ay + by);

            // Outer corner, or inner corner.
            (!a && !b) || (a && b && !diagonal)
        })
        .count()
}

fn find_regions(map: &Grid<char>) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut visited = Grid::filled(map.width(), map.height(), false);

    for start in map.points() {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        let mut region = Region {
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            region.area += 1;
            region.sides += corners(map, p);

            let same: Vec<Point> = map
                .neighbours(p)
                .filter(|q| map[*q] == map[p])
                .collect();
            region.perimeter += 4 - same.len();

            for q in same {
                if !visited[q] {
                    visited[q] = true;
                    stack.push(q);
                }
            }
        }

        regions.push(region);
    }

    regions
}

pub fn solve(input: &str) -> Result<Solution> {
    let map = parser::char_grid(input)?;
    let regions = find_regions(&map);

    let by_perimeter: usize = regions.iter().map(|r| r.area * r.perimeter).sum();
    let by_sides: usize = regions.iter().map(|r| r.area * r.sides).sum();

    Ok(Solution::new(by_perimeter, by_sides))
}
