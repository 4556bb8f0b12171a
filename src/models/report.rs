use super::puzzle::{Answer, Day};
use super::serde_helpers::{serialize_answer, serialize_error};
use serde::Serialize;

/// Outcome of solving one day, as written to JSON and CSV reports.
#[derive(Debug, Clone, Serialize)]
pub struct SolveRecord {
    pub day: Day,
    pub title: &'static str,
    #[serde(serialize_with = "serialize_answer")]
    pub part_one: Option<Answer>,
    #[serde(serialize_with = "serialize_answer")]
    pub part_two: Option<Answer>,
    pub elapsed_ms: u64,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<String>,
}

impl SolveRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
