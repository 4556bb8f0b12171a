//! Day 8: Resonant Collinearity.

use crate::error::Result;
use crate::models::grid::{Grid, Point};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::{HashMap, HashSet};

fn antennas(map: &Grid<char>) -> HashMap<char, Vec<Point>> {
    let mut antennas: HashMap<char, Vec<Point>> = HashMap::new();
    for (p, c) in map.iter() {
        if c.is_alphanumeric() {
            antennas.entry(*c).or_default().push(p);
        }
    }
    antennas
}

/// Points reached from `from` by repeating the `from - towards` offset,
/// starting `first` steps out and stopping at the edge of the map.
fn ray(
    map: &Grid<char>,
    from: Point,
    towards: Point,
    first: isize,
) -> impl Iterator<Item = Point> + '_ {
    let dx = from.x as isize - towards.x as isize;
    let dy = from.y as isize - towards.y as isize;
    (first..).map_while(move |m| map.offset(from, dx * m, dy * m))
}

pub fn solve(input: &str) -> Result<Solution> {
    let map = parser::char_grid(input)?;

    let mut antinodes = HashSet::new();
    let mut harmonics = HashSet::new();
    for positions in antennas(&map).values() {
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                antinodes.extend(ray(&map, *a, *b, 1).take(1));
                antinodes.extend(ray(&map, *b, *a, 1).take(1));

                harmonics.extend(ray(&map, *a, *b, 0));
                harmonics.extend(ray(&map, *b, *a, 0));
            }
        }
    }

    Ok(Solution::new(antinodes.len(), harmonics.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";
        assert_eq!(solve(input).unwrap(), Solution::new(14usize, 34usize));
    }

    #[test]
    fn resonant_harmonics_include_the_antennas() {
        let input = "T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        assert_eq!(solve(input).unwrap().part_two, 9usize.into());
    }
}
