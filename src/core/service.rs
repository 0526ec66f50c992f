use crate::core::clock::ZoneClock;
use crate::core::gate::AttendanceGate;
use crate::core::recap::RecapProjector;
use crate::core::window::AttendanceWindow;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, RecapEntry, Student, TimeStatus};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::sync::Arc;

/// The four operations exposed by the CLI and the HTTP adapter.
#[derive(Debug)]
pub struct AttendanceService {
    store: Arc<RecordStore>,
    gate: AttendanceGate,
    recap: RecapProjector,
}

impl AttendanceService {
    pub fn new(store: Arc<RecordStore>, zone: ZoneClock, window: AttendanceWindow) -> Self {
        Self {
            gate: AttendanceGate::new(Arc::clone(&store), zone.clone(), window),
            recap: RecapProjector::new(Arc::clone(&store), zone),
            store,
        }
    }

    pub fn students(&self) -> AppResult<Vec<Student>> {
        self.store.load_students()
    }

    pub fn check_in(&self, student_id: u32) -> AppResult<AttendanceRecord> {
        self.gate.check_in(student_id)
    }

    pub fn recap(&self) -> AppResult<Vec<RecapEntry>> {
        self.recap.build_recap()
    }

    pub fn dated_recap(&self) -> AppResult<(NaiveDate, Vec<RecapEntry>)> {
        self.recap.build_dated_recap()
    }

    pub fn time_status(&self) -> TimeStatus {
        self.gate.time_status()
    }
}
