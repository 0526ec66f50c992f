//! Wall clock seam plus the fixed zone offset every "now" goes through.
//!
//! The zone is a constant offset from UTC (UTC+7 by default), never the host
//! timezone, so results only depend on the injected clock.

use crate::errors::{AppError, AppResult};
use crate::utils::time::whole_seconds;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used by `--now` and by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn parse_rfc3339(s: &str) -> AppResult<Self> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| FixedClock(dt.with_timezone(&Utc)))
            .map_err(|e| AppError::InvalidDate(format!("{s}: {e}")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone)]
pub struct ZoneClock {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl ZoneClock {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self { clock, offset }
    }

    /// Offset given in whole hours east of UTC (e.g. 7 for UTC+7).
    pub fn with_offset_hours(clock: Arc<dyn Clock>, hours: i32) -> AppResult<Self> {
        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| AppError::Config(format!("invalid UTC offset: {hours} hours")))?;
        Ok(Self::new(clock, offset))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn utc_now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Zone-local wall time, truncated to whole seconds.
    pub fn now(&self) -> NaiveDateTime {
        let local = self.clock.now().with_timezone(&self.offset).naive_local();
        local.date().and_time(whole_seconds(local.time()))
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

impl std::fmt::Debug for ZoneClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneClock")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
