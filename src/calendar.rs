//! Release schedule of the 2024 puzzles.

use crate::error::{Error, Result};
use crate::models::puzzle::Day;
use chrono::{DateTime, TimeZone, Utc};

const YEAR: i32 = 2024;

/// Midnight US-Eastern, which is when every puzzle goes live.
const UNLOCK_HOUR_UTC: u32 = 5;

/// When the puzzle of `day` is released.
pub fn unlock_time(day: Day) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(YEAR, 12, u32::from(day.number()), UNLOCK_HOUR_UTC, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn is_unlocked(day: Day, now: DateTime<Utc>) -> bool {
    now >= unlock_time(day)
}

/// Fails with [`Error::Locked`] if `day` is not out yet at `now`.
pub fn ensure_unlocked(day: Day, now: DateTime<Utc>) -> Result<()> {
    if is_unlocked(day, now) {
        Ok(())
    } else {
        Err(Error::Locked {
            day: day.number(),
            unlocks_at: unlock_time(day),
        })
    }
}
