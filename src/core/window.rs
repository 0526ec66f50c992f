use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_of_day, parse_time_strict};
use chrono::{NaiveTime, TimeDelta};

/// 06:00
pub const DEFAULT_START_MINUTE: i64 = 360;
/// 07:15
pub const DEFAULT_END_MINUTE: i64 = 435;

/// Check-in eligibility window, inclusive on both ends, compared at minute
/// resolution (07:15:59 is still inside a window ending at 07:15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl Default for AttendanceWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + TimeDelta::minutes(DEFAULT_START_MINUTE),
            end: NaiveTime::MIN + TimeDelta::minutes(DEFAULT_END_MINUTE),
        }
    }
}

impl AttendanceWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if minutes_of_day(end) < minutes_of_day(start) {
            return Err(AppError::Config(format!(
                "attendance window ends ({}) before it starts ({})",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse "HH:MM" bounds as found in the config file.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Self::new(parse_time_strict(start)?, parse_time_strict(end)?)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        let m = minutes_of_day(t);
        m >= minutes_of_day(self.start) && m <= minutes_of_day(self.end)
    }

    pub fn outside_error(&self) -> AppError {
        AppError::OutsideWindow {
            start: self.start,
            end: self.end,
        }
    }
}
