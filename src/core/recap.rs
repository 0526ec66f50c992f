use crate::core::clock::ZoneClock;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, RecapEntry, RecapStatus, Student};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::sync::Arc;

/// Read-only present/absent view of the current zone-local day.
#[derive(Debug, Clone)]
pub struct RecapProjector {
    store: Arc<RecordStore>,
    zone: ZoneClock,
}

impl RecapProjector {
    pub fn new(store: Arc<RecordStore>, zone: ZoneClock) -> Self {
        Self { store, zone }
    }

    pub fn build_recap(&self) -> AppResult<Vec<RecapEntry>> {
        Ok(self.build_dated_recap()?.1)
    }

    /// Recap together with the zone-local date it was projected for.
    pub fn build_dated_recap(&self) -> AppResult<(NaiveDate, Vec<RecapEntry>)> {
        let date = self.zone.today();
        let students = self.store.load_students()?;
        let attendance = self.store.load_attendance()?;
        Ok((date, project(&students, &attendance, date)))
    }
}

/// One entry per student, in roster order. Records of other days and records
/// pointing at unknown students are ignored.
pub fn project(
    students: &[Student],
    attendance: &[AttendanceRecord],
    date: NaiveDate,
) -> Vec<RecapEntry> {
    let today: Vec<&AttendanceRecord> = attendance.iter().filter(|a| a.date == date).collect();

    students
        .iter()
        .map(|s| {
            let hit = today.iter().find(|a| a.student_id == s.id);
            RecapEntry {
                id: s.id,
                name: s.name.clone(),
                status: if hit.is_some() {
                    RecapStatus::Present
                } else {
                    RecapStatus::Absent
                },
                time: hit.map(|a| a.time),
            }
        })
        .collect()
}
