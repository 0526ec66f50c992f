use crate::models::RecapEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat recap row written to export files.
#[derive(Debug, Clone, Serialize)]
pub struct RecapExport {
    pub date: String,
    pub id: u32,
    pub name: String,
    pub status: String,
    pub time: String,
}

impl RecapExport {
    pub fn from_entry(date: NaiveDate, entry: &RecapEntry) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            id: entry.id,
            name: entry.name.clone(),
            status: entry.status.as_str().to_string(),
            time: entry.time_str(),
        }
    }
}
