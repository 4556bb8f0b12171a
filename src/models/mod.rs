//! Data models and serialization helpers.
//!
//! This module contains the data structures shared by the solvers and the
//! runner: calendar days, answers, grids, and the records written to reports.
pub mod grid;
pub mod puzzle;
pub mod report;
pub mod serde_helpers;
