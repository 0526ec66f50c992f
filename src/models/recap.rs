use crate::utils::time::hms_or_dash;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecapStatus {
    #[serde(rename = "Hadir")]
    Present,
    #[serde(rename = "Absen")]
    Absent,
}

impl RecapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecapStatus::Present => "Hadir",
            RecapStatus::Absent => "Absen",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, RecapStatus::Present)
    }
}

/// One row of the daily recap. `time` is `None` for absent students and
/// serializes as `"-"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapEntry {
    pub id: u32,
    pub name: String,
    pub status: RecapStatus,
    #[serde(with = "hms_or_dash")]
    pub time: Option<NaiveTime>,
}

impl RecapEntry {
    pub fn time_str(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| hms_or_dash::SENTINEL.to_string())
    }
}
