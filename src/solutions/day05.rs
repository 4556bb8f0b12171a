//! Day 5: Print Queue.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;
use crate::parser;
use std::{cmp::Ordering, collections::HashSet};

/// `(x, y)` in the set means page `x` must be printed before page `y`.
type Rules = HashSet<(u32, u32)>;

fn read_rules_and_updates(input: &str) -> Result<(Rules, Vec<Vec<u32>>)> {
    let mut rules = Rules::new();
    let mut updates = Vec::new();

    let mut reading_rules = true;
    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            reading_rules = false;
            continue;
        }

        if reading_rules {
            let (x, y) = line
                .split_once('|')
                .ok_or_else(|| Error::parse(format!("invalid ordering rule '{}'", line)))?;
            rules.insert((parser::number(x)?, parser::number(y)?));
        } else {
            updates.push(parser::numbers(line, ',')?);
        }
    }

    Ok((rules, updates))
}

fn is_ordered(rules: &Rules, update: &[u32]) -> bool {
    update
        .iter()
        .enumerate()
        .all(|(i, later)| update[..i].iter().all(|earlier| !rules.contains(&(*later, *earlier))))
}

fn reorder(rules: &Rules, update: &[u32]) -> Vec<u32> {
    let mut corrected = update.to_vec();
    corrected.sort_by(|a, b| {
        if rules.contains(&(*a, *b)) {
            Ordering::Less
        } else if rules.contains(&(*b, *a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    corrected
}

fn middle(update: &[u32]) -> u64 {
    update.get(update.len() / 2).copied().map_or(0, u64::from)
}

pub fn solve(input: &str) -> Result<Solution> {
    let (rules, updates) = read_rules_and_updates(input)?;

    let (ordered, unordered): (Vec<_>, Vec<_>) =
        updates.iter().partition(|u| is_ordered(&rules, u));

    let ordered_sum: u64 = ordered.iter().map(|u| middle(u)).sum();
    let corrected_sum: u64 = unordered
        .iter()
        .map(|u| middle(&reorder(&rules, u)))
        .sum();

    Ok(Solution::new(ordered_sum, corrected_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).unwrap(), Solution::new(143u64, 123u64));
    }

    #[test]
    fn reorders_following_the_rules() {
        let (rules, _) = read_rules_and_updates(EXAMPLE).unwrap();
        assert_eq!(reorder(&rules, &[97, 13, 75, 29, 47]), vec![97, 75, 47, 29, 13]);
        assert!(!is_ordered(&rules, &[61, 13, 29]));
        assert!(is_ordered(&rules, &[75, 29, 13]));
    }

    #[test]
    fn bad_rule_is_reported() {
        let err = solve("47-53\n\n1,2,3\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid ordering rule '47-53'");
    }
}
