//! Solving several days at once.
//!
//! Each job becomes a task on the `smol` executor. A semaphore caps how many
//! days are being solved at the same time, and the solvers themselves run on
//! the blocking thread pool since they are pure CPU work.

use crate::error::{Error, Result};
use crate::models::puzzle::Day;
use crate::models::report::SolveRecord;
use crate::solutions;
use async_lock::{Mutex, Semaphore};
use futures_lite::{AsyncRead, AsyncReadExt};
use std::{io, path::PathBuf, sync::Arc, time::Instant};
use tracing::{debug, warn};

/// Where a day's puzzle input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub day: Day,
    pub source: InputSource,
}

impl Job {
    pub fn new(day: Day, source: InputSource) -> Self {
        Job { day, source }
    }
}

/// Solves every job, at most `threads` at a time, and returns one record per
/// job ordered by day. A failing day is reported in its record and does not
/// stop the others.
pub fn run_jobs(jobs: Vec<Job>, threads: usize) -> Vec<SolveRecord> {
    smol::block_on(solve_all(jobs, threads))
}

async fn solve_all(jobs: Vec<Job>, threads: usize) -> Vec<SolveRecord> {
    let records = Arc::new(Mutex::new(Vec::with_capacity(jobs.len())));
    let semaphore = Arc::new(Semaphore::new(threads.max(1)));

    let mut tasks = Vec::new();
    for job in jobs {
        let records_clone = Arc::clone(&records);
        let semaphore_clone = Arc::clone(&semaphore);

        let task = smol::spawn(async move {
            let _permit = semaphore_clone.acquire().await;
            let record = solve_job(job).await;
            records_clone.lock().await.push(record);
        });

        tasks.push(task);
    }

    for task in tasks {
        task.await;
    }

    let mut records = std::mem::take(&mut *records.lock().await);
    records.sort_by_key(|r| r.day);
    records
}

async fn solve_job(job: Job) -> SolveRecord {
    let Job { day, source } = job;
    debug!("solving day {} from {:?}", day, source);

    let outcome = match read_input(&source).await {
        Ok(input) => {
            smol::unblock(move || {
                let started = Instant::now();
                let solution = solutions::solve(day, &input);
                (solution, started.elapsed())
            })
            .await
        }
        Err(e) => (Err(e), Default::default()),
    };

    let (solution, elapsed) = outcome;
    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let mut record = SolveRecord {
        day,
        title: solutions::title(day),
        part_one: None,
        part_two: None,
        elapsed_ms,
        error: None,
    };

    match solution {
        Ok(solution) => {
            debug!("day {} solved in {} ms", day, elapsed_ms);
            record.part_one = Some(solution.part_one);
            record.part_two = Some(solution.part_two);
        }
        Err(e) => {
            warn!("day {} failed: {}", day, e);
            record.error = Some(e.to_string());
        }
    }

    record
}

async fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => smol::fs::read_to_string(path).await.map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("cannot read '{}': {}", path.display(), e),
            ))
        }),
        InputSource::Stdin => read_all(smol::Unblock::new(io::stdin())).await,
    }
}

async fn read_all(mut reader: impl AsyncRead + Unpin) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input).await?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::puzzle::Answer;
    use std::fs;

    const DAY_ONE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";
    const DAY_TWO: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn records_come_back_in_day_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), DAY_ONE).unwrap();
        fs::write(dir.path().join("day02.txt"), DAY_TWO).unwrap();

        let jobs = vec![
            Job::new(day(2), InputSource::File(dir.path().join("day02.txt"))),
            Job::new(day(1), InputSource::File(dir.path().join("day01.txt"))),
        ];
        let records = run_jobs(jobs, 4);

        let days: Vec<u8> = records.iter().map(|r| r.day.number()).collect();
        assert_eq!(days, vec![1, 2]);
        assert_eq!(records[0].part_one, Some(Answer::Number(11)));
        assert_eq!(records[0].part_two, Some(Answer::Number(31)));
        assert_eq!(records[1].part_one, Some(Answer::Number(2)));
        assert_eq!(records[1].part_two, Some(Answer::Number(4)));
        assert!(records.iter().all(SolveRecord::is_ok));
    }

    #[test]
    fn failures_do_not_stop_other_days() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), DAY_ONE).unwrap();
        fs::write(dir.path().join("day24.txt"), "x00: 1\n").unwrap();

        let jobs = vec![
            Job::new(day(24), InputSource::File(dir.path().join("day24.txt"))),
            Job::new(day(3), InputSource::File(dir.path().join("missing.txt"))),
            Job::new(day(1), InputSource::File(dir.path().join("day01.txt"))),
        ];
        let records = run_jobs(jobs, 1);

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert_eq!(records[0].title, "Historian Hysteria");

        assert_eq!(records[1].day, day(3));
        assert!(records[1].part_one.is_none());
        assert!(records[1].error.as_deref().is_some_and(|e| e.contains("missing.txt")));

        assert_eq!(records[2].day, day(24));
        assert_eq!(records[2].error.as_deref(), Some("day 24 has no solution yet"));
    }

    #[test]
    fn piped_input_is_read_whole() {
        let reader = futures_lite::io::Cursor::new(DAY_ONE.as_bytes().to_vec());
        assert_eq!(smol::block_on(read_all(reader)).unwrap(), DAY_ONE);

        let invalid = futures_lite::io::Cursor::new(vec![0xff, 0xfe]);
        assert!(matches!(smol::block_on(read_all(invalid)), Err(Error::Io(_))));
    }

    #[test]
    fn zero_threads_still_runs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), DAY_ONE).unwrap();
        let jobs = vec![Job::new(day(1), InputSource::File(dir.path().join("day01.txt")))];
        assert!(run_jobs(jobs, 0)[0].is_ok());
    }
}
