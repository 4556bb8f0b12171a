//! Command-line interface module.
//!
//! This module handles all CLI argument parsing and the resolution of puzzle
//! inputs and settings that depends on it.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::puzzle::Day;
use crate::runner::{InputSource, Job};
use crate::solutions;
use crate::ui::output::ReportFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::{
    io,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// CLI arguments for the Advent of Code 2024 solutions runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    /// Defaults to `aoc2024/config.toml` in the user's configuration directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one day, or every solved day, and print both answers
    Solve(SolveArgs),
    /// Download a day's puzzle input from adventofcode.com
    Fetch(FetchArgs),
    /// Print the puzzle index
    Index(IndexArgs),
}

#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["day", "all"])))]
pub struct SolveArgs {
    /// Day to solve (1-25)
    pub day: Option<Day>,

    /// Solve every day that has a solution and an input file
    #[arg(short = 'a', long = "all", conflicts_with = "input")]
    pub all: bool,

    /// Path to the puzzle input, or `-` to read it from stdin.
    /// If not provided, looks for dayNN.txt or dayN.txt in the inputs directory.
    #[arg(short = 'f', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding the puzzle inputs
    #[arg(short = 'd', long = "inputs-dir", value_name = "DIR")]
    pub inputs_dir: Option<PathBuf>,

    /// Number of days to solve concurrently [default: 4]
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// Day to download (1-25)
    pub day: Day,

    /// Value of the adventofcode.com `session` cookie
    #[arg(short = 's', long = "session", env = "AOC_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// Directory to store the input in
    #[arg(short = 'd', long = "inputs-dir", value_name = "DIR")]
    pub inputs_dir: Option<PathBuf>,

    /// Overwrite an input that was already downloaded
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    /// Print the Markdown list used by the README
    #[arg(long)]
    pub markdown: bool,
}

impl SolveArgs {
    pub fn inputs_dir<'a>(&'a self, config: &'a Config) -> &'a Path {
        self.inputs_dir.as_deref().unwrap_or(&config.inputs_dir)
    }

    pub fn threads(&self, config: &Config) -> usize {
        self.threads.unwrap_or(config.threads)
    }
}

impl FetchArgs {
    pub fn inputs_dir<'a>(&'a self, config: &'a Config) -> &'a Path {
        self.inputs_dir.as_deref().unwrap_or(&config.inputs_dir)
    }

    /// Session from the command line or `AOC_SESSION`, then the config file.
    pub fn session<'a>(&'a self, config: &'a Config) -> Result<&'a str> {
        self.session
            .as_deref()
            .or(config.session.as_deref())
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingSession)
    }
}

/// Searches `dir` for the input of `day`.
///
/// # Supported file names
/// - dayNN.txt (zero padded, as written by `fetch`)
/// - dayN.txt
fn find_input_file(dir: &Path, day: Day) -> Option<PathBuf> {
    let names = [
        format!("{}.txt", day.file_stem()),
        format!("day{}.txt", day.number()),
    ];

    names
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Resolves where the input of `day` comes from.
///
/// This determines the input based on:
/// 1. The path provided via `--input` (`-` meaning stdin)
/// 2. Auto-discovery in the inputs directory
///
/// # Errors
/// - [`Error::Io`] if the given path doesn't exist
/// - [`Error::InputNotFound`] if auto-discovery finds nothing
pub fn resolve_input_source(day: Day, args: &SolveArgs, config: &Config) -> Result<InputSource> {
    if let Some(ref path) = args.input {
        if path.as_os_str() == "-" {
            info!("reading the input of day {} from stdin", day);
            return Ok(InputSource::Stdin);
        }
        if !path.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("the specified input file '{}' does not exist", path.display()),
            )));
        }
        info!("using input file: {}", path.display());
        return Ok(InputSource::File(path.clone()));
    }

    let dir = args.inputs_dir(config);
    match find_input_file(dir, day) {
        Some(path) => {
            info!("found input file: {}", path.display());
            Ok(InputSource::File(path))
        }
        None => Err(Error::InputNotFound {
            day: day.number(),
            dir: dir.to_path_buf(),
        }),
    }
}

/// Builds the jobs a `solve` invocation asks for.
///
/// With `--all`, solved days without an input file are skipped with a
/// warning; finding no input at all is an error.
pub fn solve_jobs(args: &SolveArgs, config: &Config) -> Result<Vec<Job>> {
    match (args.day, args.all) {
        (Some(day), false) => {
            let source = resolve_input_source(day, args, config)?;
            Ok(vec![Job::new(day, source)])
        }
        // clap requires a day or `--all`; a bare `solve` runs everything.
        _ => all_jobs(args, config),
    }
}

fn all_jobs(args: &SolveArgs, config: &Config) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for day in solutions::solved_days() {
        match resolve_input_source(day, args, config) {
            Ok(source) => jobs.push(Job::new(day, source)),
            Err(e) => warn!("skipping day {}: {}", day, e),
        }
    }

    if jobs.is_empty() {
        return Err(Error::NoInputs {
            dir: args.inputs_dir(config).to_path_buf(),
        });
    }
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn solve_args(argv: &[&str]) -> SolveArgs {
        match parse(argv).command {
            Command::Solve(args) => args,
            other => panic!("expected solve, got {other:?}"),
        }
    }

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn solve_defaults() {
        let args = solve_args(&["aoc2024", "solve", "7"]);
        assert_eq!(args.day, Some(day(7)));
        assert!(!args.all);
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.threads(&Config::default()), 4);
    }

    #[test]
    fn solve_needs_a_day_or_all() {
        assert!(Args::try_parse_from(["aoc2024", "solve"]).is_err());
        assert!(Args::try_parse_from(["aoc2024", "solve", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc2024", "solve", "--all", "-f", "x.txt"]).is_err());
        assert!(solve_args(&["aoc2024", "solve", "-a", "--format", "csv"]).all);
    }

    #[test]
    fn command_line_beats_config() {
        let config = Config {
            session: Some("from-config".to_string()),
            inputs_dir: PathBuf::from("cfg-inputs"),
            threads: 2,
        };
        let args = solve_args(&["aoc2024", "solve", "1", "-t", "8", "-d", "cli-inputs"]);
        assert_eq!(args.threads(&config), 8);
        assert_eq!(args.inputs_dir(&config), Path::new("cli-inputs"));

        let args = solve_args(&["aoc2024", "--config", "c.toml", "solve", "1"]);
        assert_eq!(args.threads(&config), 2);
        assert_eq!(args.inputs_dir(&config), Path::new("cfg-inputs"));
    }

    #[test]
    fn session_falls_back_to_config() {
        let config = Config {
            session: Some("from-config".to_string()),
            ..Config::default()
        };
        let args = FetchArgs {
            day: day(1),
            session: None,
            inputs_dir: None,
            force: false,
        };
        assert_eq!(args.session(&config).unwrap(), "from-config");
        assert!(matches!(
            args.session(&Config::default()),
            Err(Error::MissingSession)
        ));

        let args = FetchArgs {
            session: Some("from-cli".to_string()),
            ..args
        };
        assert_eq!(args.session(&config).unwrap(), "from-cli");
    }

    #[test]
    fn discovers_padded_then_plain_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            inputs_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        fs::write(dir.path().join("day3.txt"), "mul(2,4)").unwrap();

        let args = solve_args(&["aoc2024", "solve", "3"]);
        assert_eq!(
            resolve_input_source(day(3), &args, &config).unwrap(),
            InputSource::File(dir.path().join("day3.txt"))
        );

        fs::write(dir.path().join("day03.txt"), "mul(2,4)").unwrap();
        assert_eq!(
            resolve_input_source(day(3), &args, &config).unwrap(),
            InputSource::File(dir.path().join("day03.txt"))
        );

        assert!(matches!(
            resolve_input_source(day(4), &args, &config),
            Err(Error::InputNotFound { day: 4, .. })
        ));
    }

    #[test]
    fn explicit_input_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let args = solve_args(&["aoc2024", "solve", "1", "-f", missing.to_str().unwrap()]);
        assert!(matches!(
            resolve_input_source(day(1), &args, &Config::default()),
            Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::NotFound
        ));

        let args = solve_args(&["aoc2024", "solve", "1", "-f", "-"]);
        assert_eq!(
            resolve_input_source(day(1), &args, &Config::default()).unwrap(),
            InputSource::Stdin
        );
    }

    #[test]
    fn all_skips_days_without_input() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), "1 2\n").unwrap();
        fs::write(dir.path().join("day24.txt"), "x00: 1\n").unwrap();
        let inputs = dir.path().to_str().unwrap();
        let args = solve_args(&["aoc2024", "solve", "--all", "-d", inputs]);

        let jobs = solve_jobs(&args, &Config::default()).unwrap();
        assert_eq!(
            jobs,
            vec![Job::new(day(1), InputSource::File(dir.path().join("day01.txt")))]
        );

        let empty = tempfile::tempdir().unwrap();
        let inputs = empty.path().to_str().unwrap();
        let args = solve_args(&["aoc2024", "solve", "--all", "-d", inputs]);
        assert!(matches!(
            solve_jobs(&args, &Config::default()),
            Err(Error::NoInputs { .. })
        ));
    }

    #[test]
    fn one_day_or_everything() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), "1 2\n").unwrap();
        let config = Config {
            inputs_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        let args = solve_args(&["aoc2024", "solve", "1"]);
        let jobs = solve_jobs(&args, &config).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].day, day(1));

        let args = solve_args(&["aoc2024", "solve", "2"]);
        assert!(matches!(
            solve_jobs(&args, &config),
            Err(Error::InputNotFound { day: 2, .. })
        ));

        // Built by hand: clap never yields neither a day nor `--all`.
        let bare = SolveArgs {
            all: false,
            ..solve_args(&["aoc2024", "solve", "--all"])
        };
        assert_eq!(solve_jobs(&bare, &config).unwrap().len(), 1);
    }

    #[test]
    fn index_and_fetch_parse() {
        match parse(&["aoc2024", "index", "--markdown"]).command {
            Command::Index(args) => assert!(args.markdown),
            other => panic!("expected index, got {other:?}"),
        }
        match parse(&["aoc2024", "fetch", "day05", "-s", "abc", "--force"]).command {
            Command::Fetch(args) => {
                assert_eq!(args.day, day(5));
                assert_eq!(args.session.as_deref(), Some("abc"));
                assert!(args.force);
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }
}
