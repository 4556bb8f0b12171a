//! Day 9: Disk Fragmenter.
//!
//! The dense disk map alternates file and free-space lengths. Part one moves
//! single blocks into the leftmost free space; part two moves whole files,
//! highest id first, only when a large enough span exists to their left.

use crate::error::{Error, Result};
use crate::models::puzzle::Solution;

fn read_disk_map(input: &str) -> Result<Vec<usize>> {
    input
        .trim_end()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or_else(|| Error::parse(format!("invalid disk map digit '{}'", c)))
        })
        .collect()
}

fn to_blocks(disk_map: &[usize]) -> Vec<Option<usize>> {
    let mut blocks = Vec::new();
    for (i, len) in disk_map.iter().enumerate() {
        let content = if i % 2 == 0 { Some(i / 2) } else { None };
        blocks.extend(std::iter::repeat_n(content, *len));
    }
    blocks
}

fn compact(blocks: &mut [Option<usize>]) {
    if blocks.is_empty() {
        return;
    }

    let mut i = 0;
    let mut j = blocks.len() - 1;
    while i < j {
        if blocks[i].is_some() {
            i += 1;
        } else if blocks[j].is_none() {
            j -= 1;
        } else {
            blocks.swap(i, j);
        }
    }
}

struct Span {
    start: usize,
    len: usize,
}

fn defrag(disk_map: &[usize]) -> Vec<Option<usize>> {
    let mut files = Vec::new();
    let mut free = Vec::new();
    let mut pos = 0;
    for (i, len) in disk_map.iter().enumerate() {
        let span = Span { start: pos, len: *len };
        if i % 2 == 0 {
            files.push(span);
        } else {
            free.push(span);
        }
        pos += len;
    }

    for file in files.iter_mut().rev() {
        if let Some(space) = free
            .iter_mut()
            .take_while(|s| s.start < file.start)
            .find(|s| s.len >= file.len)
        {
            file.start = space.start;
            space.start += file.len;
            space.len -= file.len;
        }
    }

    let mut blocks = vec![None; pos];
    for (id, file) in files.iter().enumerate() {
        blocks[file.start..file.start + file.len].fill(Some(id));
    }
    blocks
}

fn checksum(blocks: &[Option<usize>]) -> usize {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, id)| id.map(|id| i * id))
        .sum()
}

pub fn solve(input: &str) -> Result<Solution> {
    let disk_map = read_disk_map(input)?;

    let mut blocks = to_blocks(&disk_map);
    compact(&mut blocks);

    Ok(Solution::new(checksum(&blocks), checksum(&defrag(&disk_map))))
}
