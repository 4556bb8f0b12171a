//! User interface module.
//!
//! - CLI argument parsing and input resolution (cli module)
//! - Reports and console output (output module)

pub mod cli;
pub mod output;
