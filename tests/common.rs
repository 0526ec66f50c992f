#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rabsen::core::qr::QrEncoder;
use rabsen::core::{AttendanceService, AttendanceWindow, Clock, FixedClock, ZoneClock};
use rabsen::errors::{AppError, AppResult};
use rabsen::store::RecordStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

pub const ZONE_OFFSET_HOURS: i32 = 7;

pub fn rab() -> Command {
    let mut cmd = cargo_bin_cmd!("rabsen");
    cmd.env_remove("PORT").env_remove("RUST_LOG");
    cmd
}

/// Fresh data directory with the default 33-student roster.
pub fn temp_store() -> (TempDir, Arc<RecordStore>) {
    let dir = TempDir::new().expect("create temp dir");
    let store = RecordStore::new(dir.path().join("data"));
    store.init().expect("init store");
    (dir, Arc::new(store))
}

/// Fresh data directory with a custom roster.
pub fn temp_store_with(names: &[&str]) -> (TempDir, Arc<RecordStore>) {
    let dir = TempDir::new().expect("create temp dir");
    let store = RecordStore::with_roster(dir.path().join("data"), names);
    store.init().expect("init store");
    (dir, Arc::new(store))
}

/// UTC instant whose UTC+7 wall time is the given date and time.
pub fn utc_of_zone(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> DateTime<Utc> {
    let local = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .expect("valid date")
        .and_hms_opt(h, m, s)
        .expect("valid time");
    (local - TimeDelta::hours(ZONE_OFFSET_HOURS as i64)).and_utc()
}

/// Fixed clock whose UTC+7 wall time is the given date and time.
pub fn clock_at_zone(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> Arc<dyn Clock> {
    Arc::new(FixedClock(utc_of_zone(date, h, m, s)))
}

/// Hands out the given instants one per call, then repeats the last one.
pub struct SteppingClock {
    instants: Vec<DateTime<Utc>>,
    next: AtomicUsize,
}

impl SteppingClock {
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "at least one instant");
        Self {
            instants,
            next: AtomicUsize::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.instants[i.min(self.instants.len() - 1)]
    }
}

pub fn zone_at(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> ZoneClock {
    ZoneClock::with_offset_hours(clock_at_zone(date, h, m, s), ZONE_OFFSET_HOURS)
        .expect("valid offset")
}

pub fn service_at(store: &Arc<RecordStore>, zone: ZoneClock) -> AttendanceService {
    AttendanceService::new(Arc::clone(store), zone, AttendanceWindow::default())
}

/// Deterministic stand-in for the image encoder.
pub struct EchoEncoder;

impl QrEncoder for EchoEncoder {
    fn encode(&self, payload: &str) -> AppResult<String> {
        Ok(format!("qr:{payload}"))
    }
}

/// Fails for one student id, echoes for everybody else.
pub struct FailingEncoder {
    pub student_id: u32,
}

impl QrEncoder for FailingEncoder {
    fn encode(&self, payload: &str) -> AppResult<String> {
        if payload.starts_with(&format!("{}-", self.student_id)) {
            return Err(AppError::Encode("simulated failure".into()));
        }
        Ok(format!("qr:{payload}"))
    }
}

/// Echoes and counts calls.
#[derive(Default)]
pub struct CountingEncoder {
    pub calls: AtomicUsize,
}

impl QrEncoder for CountingEncoder {
    fn encode(&self, payload: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("qr:{payload}"))
    }
}
