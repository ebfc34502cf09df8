//! Daily wall-clock schedule.

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveTime, TimeZone};
use chronicle_error::{ChronicleResult, ConfigError};
use std::time::Duration;

/// Fires once per calendar day at a fixed local time.
///
/// Single-shot semantics: a fire time that passes while the process is down
/// is simply skipped, never replayed. The next fire is always recomputed
/// from the current local clock rather than by adding fixed 24h intervals,
/// so DST transitions cannot drift the posting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    time: NaiveTime,
}

impl DailySchedule {
    /// Parse an `HH:MM` posting time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_agent::DailySchedule;
    ///
    /// let schedule = DailySchedule::new("10:00").unwrap();
    /// assert!(DailySchedule::new("25:99").is_err());
    /// ```
    pub fn new(posting_time: &str) -> ChronicleResult<Self> {
        let time = NaiveTime::parse_from_str(posting_time, "%H:%M").map_err(|e| {
            ConfigError::new(format!(
                "invalid posting time '{posting_time}' (expected HH:MM): {e}"
            ))
        })?;

        Ok(Self { time })
    }

    /// The next occurrence of the posting time at or after `now`: today if
    /// the time is still ahead, otherwise tomorrow.
    pub fn next_fire(&self, now: DateTime<Local>) -> DateTime<Local> {
        let today = now.date_naive().and_time(self.time);
        let candidate = Local
            .from_local_datetime(&today)
            .earliest()
            .unwrap_or(now);

        if candidate > now {
            candidate
        } else {
            let tomorrow = (now.date_naive() + ChronoDuration::days(1)).and_time(self.time);
            Local.from_local_datetime(&tomorrow).earliest().unwrap_or(now)
        }
    }

    /// Time remaining until the next fire.
    pub fn duration_until_next(&self, now: DateTime<Local>) -> Duration {
        let next = self.next_fire(now);
        (next - now).to_std().unwrap_or(Duration::ZERO)
    }
}
