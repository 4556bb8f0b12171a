//! Custom serde serializers for report records.
//!
//! Answers keep their natural JSON type (numbers stay numbers) while CSV
//! output, which has no nulls, gets empty cells for absent values.

use super::puzzle::Answer;
use serde::Serializer;

/// Serializes an optional answer.
///
/// # Format
/// - `Number` is written as an integer
/// - `Text` is written as a string
/// - `Missing` is written as `-1`, the same as the text output
/// - an absent answer (the day failed) is written as `null` / an empty cell
pub fn serialize_answer<S>(answer: &Option<Answer>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match answer {
        Some(Answer::Number(n)) => serializer.serialize_i64(*n),
        Some(Answer::Text(s)) => serializer.serialize_str(s),
        Some(Answer::Missing) => serializer.serialize_i64(-1),
        None => serializer.serialize_none(),
    }
}

/// Serializes an optional error message, writing `null` / an empty cell when absent.
pub fn serialize_error<S>(error: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(msg) => serializer.serialize_str(msg),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::puzzle::{Answer, Day};
    use crate::models::report::SolveRecord;

    fn record(part_one: Option<Answer>, error: Option<String>) -> SolveRecord {
        SolveRecord {
            day: Day::new(17).unwrap(),
            title: "Chronospatial Computer",
            part_one,
            part_two: Some(Answer::Missing),
            elapsed_ms: 3,
            error,
        }
    }

    #[test]
    fn answers_keep_their_json_type() {
        let json = serde_json::to_value(record(Some(Answer::from("4,6,3")), None)).unwrap();
        assert_eq!(json["day"], 17);
        assert_eq!(json["part_one"], "4,6,3");
        assert_eq!(json["part_two"], -1);
        assert!(json["error"].is_null());
    }

    #[test]
    fn failed_day_has_null_answer() {
        let json = serde_json::to_value(record(None, Some("boom".to_string()))).unwrap();
        assert!(json["part_one"].is_null());
        assert_eq!(json["error"], "boom");
    }
}
