use crate::models::student::Student;
use crate::utils::time::hms;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Hadir")]
    Present,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Hadir",
        }
    }
}

/// One line of the append-only attendance log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: u32,              // ⇔ attendance[].id (len + 1 at insert time)
    pub student_id: u32,      // ⇔ attendance[].studentId
    pub student_name: String, // ⇔ attendance[].studentName (snapshot)
    pub date: NaiveDate,      // ⇔ attendance[].date ("YYYY-MM-DD")
    #[serde(with = "hms")]
    pub time: NaiveTime,      // ⇔ attendance[].time ("HH:MM:SS")
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn present(id: u32, student: &Student, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id,
            student_id: student.id,
            student_name: student.name.clone(),
            date,
            time,
            status: AttendanceStatus::Present,
        }
    }

    pub fn is_for(&self, student_id: u32, date: NaiveDate) -> bool {
        self.student_id == student_id && self.date == date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
