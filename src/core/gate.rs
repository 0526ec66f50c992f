use crate::core::clock::ZoneClock;
use crate::core::window::AttendanceWindow;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, TimeStatus};
use crate::store::RecordStore;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Decides whether a check-in is accepted and appends the resulting record.
///
/// Checks run in a fixed order: time window, student lookup, duplicate for
/// today. The attendance log is read, checked and rewritten as a whole, so
/// the whole sequence runs under `append_lock`; two concurrent check-ins for
/// the same student and day cannot both pass the duplicate check.
#[derive(Debug)]
pub struct AttendanceGate {
    store: Arc<RecordStore>,
    zone: ZoneClock,
    window: AttendanceWindow,
    append_lock: Mutex<()>,
}

impl AttendanceGate {
    pub fn new(store: Arc<RecordStore>, zone: ZoneClock, window: AttendanceWindow) -> Self {
        Self {
            store,
            zone,
            window,
            append_lock: Mutex::new(()),
        }
    }

    pub fn check_in(&self, student_id: u32) -> AppResult<AttendanceRecord> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // ------------------------------------------------
        // 1️⃣ Time window
        // ------------------------------------------------
        let now = self.zone.now();
        if !self.window.contains(now.time()) {
            debug!(student_id, time = %now.time(), "check-in outside window");
            return Err(self.window.outside_error());
        }

        // ------------------------------------------------
        // 2️⃣ Student lookup
        // ------------------------------------------------
        let students = self.store.load_students()?;
        let student = students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or(AppError::StudentNotFound(student_id))?;

        // ------------------------------------------------
        // 3️⃣ One check-in per student per day
        // ------------------------------------------------
        let date = now.date();
        let mut attendance = self.store.load_attendance()?;
        if attendance.iter().any(|a| a.is_for(student_id, date)) {
            return Err(AppError::AlreadyCheckedIn { student_id, date });
        }

        // ------------------------------------------------
        // 4️⃣ Append and persist
        // ------------------------------------------------
        let record = AttendanceRecord::present(
            attendance.len() as u32 + 1,
            student,
            date,
            now.time(),
        );
        attendance.push(record.clone());
        self.store.save_attendance(&attendance)?;

        info!(
            student_id,
            record_id = record.id,
            date = %record.date_str(),
            time = %record.time_str(),
            "attendance recorded"
        );

        Ok(record)
    }

    pub fn time_status(&self) -> TimeStatus {
        let now = self.zone.time_of_day();
        TimeStatus {
            within_time: self.window.contains(now),
            current_time: now.format("%H.%M.%S").to_string(),
        }
    }
}
