mod calendar;
mod config;
mod error;
mod logging;
mod models;
mod network;
mod parser;
mod runner;
mod solutions;
mod ui;

use clap::Parser;
use config::Config;
use error::Result;
use std::process::ExitCode;
use tracing::debug;
use ui::cli::{Args, Command, FetchArgs, SolveArgs};
use ui::output::{exit_code, print_fetch_summary, print_index, print_report};

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref())?;
    debug!(
        inputs_dir = %config.inputs_dir.display(),
        threads = config.threads,
        "configuration ready"
    );

    match args.command {
        Command::Solve(solve_args) => solve(&solve_args, &config),
        Command::Fetch(fetch_args) => fetch(&fetch_args, &config),
        Command::Index(index_args) => {
            print_index(&solutions::index(), index_args.markdown)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn solve(args: &SolveArgs, config: &Config) -> Result<ExitCode> {
    let jobs = ui::cli::solve_jobs(args, config)?;
    let records = runner::run_jobs(jobs, args.threads(config));
    print_report(&records, args.format)?;
    Ok(exit_code(&records))
}

fn fetch(args: &FetchArgs, config: &Config) -> Result<ExitCode> {
    calendar::ensure_unlocked(args.day, chrono::Utc::now())?;
    let session = args.session(config)?;

    let body = network::fetch_input(args.day, session)?;
    let path = network::save_input(args.inputs_dir(config), args.day, &body, args.force)?;

    print_fetch_summary(args.day.number(), &path, body.len());
    Ok(ExitCode::SUCCESS)
}
