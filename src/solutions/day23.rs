//! Day 23: LAN Party.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;
use std::collections::{BTreeSet, HashMap, HashSet};

type Network<'a> = HashMap<&'a str, HashSet<&'a str>>;

fn read_network(input: &str) -> Result<Network<'_>> {
    let mut network: Network = HashMap::new();
    for line in parser::lines(input) {
        let (a, b) = line
            .split_once('-')
            .ok_or_else(|| Error::parse(format!("invalid connection '{}'", line)))?;
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    Ok(network)
}

/// Sets of three interconnected computers, each listed once.
fn triangles<'a>(network: &Network<'a>) -> BTreeSet<[&'a str; 3]> {
    let mut found = BTreeSet::new();
    for (a, linked) in network {
        for b in linked.iter().filter(|b| *b > a) {
            for c in linked.iter().filter(|c| *c > b) {
                if network[b].contains(c) {
                    found.insert([*a, *b, *c]);
                }
            }
        }
    }
    found
}

/// Bron–Kerbosch with pivoting, keeping the largest clique seen.
fn largest_clique<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: HashSet<&'a str>,
    mut excluded: HashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if clique.len() > best.len() {
            *best = clique.clone();
        }
        return;
    }

    let Some(pivot) = candidates
        .union(&excluded)
        .max_by_key(|v| network[*v].len())
        .copied()
    else {
        return;
    };

    let pending: Vec<&str> = candidates
        .iter()
        .filter(|v| !network[pivot].contains(*v))
        .copied()
        .collect();
    for v in pending {
        let linked = &network[v];
        clique.push(v);
        largest_clique(
            network,
            clique,
            candidates.intersection(linked).copied().collect(),
            excluded.intersection(linked).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

pub fn solve(input: &str) -> Result<Solution> {
    let network = read_network(input)?;

    let chief_triangles = triangles(&network)
        .iter()
        .filter(|t| t.iter().any(|name| name.starts_with('t')))
        .count();

    let mut best = Vec::new();
    largest_clique(
        &network,
        &mut Vec::new(),
        network.keys().copied().collect(),
        HashSet::new(),
        &mut best,
    );
    best.sort_unstable();

    Ok(Solution::new(chief_triangles, best.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).unwrap(), Solution::new(7usize, "co,de,ka,ta"));
    }

    #[test]
    fn all_triangles() {
        let network = read_network(EXAMPLE).unwrap();
        let found = triangles(&network);
        assert_eq!(found.len(), 12);
        assert!(found.contains(&["co", "de", "ta"]));
    }

    #[test]
    fn missing_separator() {
        assert!(matches!(solve("kh tc\n"), Err(Error::Parse(_))));
    }
}
