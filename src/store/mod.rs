//! Flat JSON record store.
//!
//! Two independent collections live in one data directory:
//!
//! - `students.json`: the roster, `[{id, name, qrCode}]`
//! - `attendance.json`: the append-only log, `[{id, studentId, studentName, date, time, status}]`
//!
//! Loads never fail because of bad content: a missing, blank, unreadable or
//! malformed collection is rewritten with its reset value (seed roster or
//! empty log) and that value is returned. Saves overwrite the whole
//! collection and report failures as `AppError::StoreWrite`.
//!
//! Every write goes through a temp file in the same directory that is then
//! renamed over the target, so a concurrent reader sees either the old or the
//! new collection.

pub mod seed;

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Student};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub use seed::{SEED_ROSTER, seed_students};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Students,
    Attendance,
}

impl Collection {
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Students => "students.json",
            Collection::Attendance => "attendance.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Attendance => "attendance",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a collection had to be reset on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairReason {
    Missing,
    Empty,
    Unreadable,
    Malformed,
}

impl fmt::Display for RepairReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RepairReason::Missing => "missing",
            RepairReason::Empty => "empty",
            RepairReason::Unreadable => "unreadable",
            RepairReason::Malformed => "malformed",
        })
    }
}

/// Result of a load: the items plus whether the collection was rebuilt.
#[derive(Debug)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub repaired: Option<RepairReason>,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
    roster: Vec<String>,
}

impl RecordStore {
    /// Store seeded with the built-in 33-student roster.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_roster(dir, &SEED_ROSTER)
    }

    pub fn with_roster<S: AsRef<str>>(dir: impl Into<PathBuf>, roster: &[S]) -> Self {
        Self {
            dir: dir.into(),
            roster: roster.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    /// Create the data directory and repair both collections. Idempotent.
    pub fn init(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        self.load_students()?;
        self.load_attendance()?;
        Ok(())
    }

    // ------------------------------------------------
    // Students
    // ------------------------------------------------

    pub fn load_students(&self) -> AppResult<Vec<Student>> {
        Ok(self.load_students_tracked()?.items)
    }

    pub fn load_students_tracked(&self) -> AppResult<Loaded<Student>> {
        self.load_or_reset(Collection::Students, || seed_students(&self.roster))
    }

    pub fn save_students(&self, students: &[Student]) -> AppResult<()> {
        self.write_collection(Collection::Students, students)
    }

    // ------------------------------------------------
    // Attendance
    // ------------------------------------------------

    pub fn load_attendance(&self) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self.load_attendance_tracked()?.items)
    }

    pub fn load_attendance_tracked(&self) -> AppResult<Loaded<AttendanceRecord>> {
        self.load_or_reset(Collection::Attendance, Vec::new)
    }

    pub fn save_attendance(&self, records: &[AttendanceRecord]) -> AppResult<()> {
        self.write_collection(Collection::Attendance, records)
    }

    // ------------------------------------------------
    // Internals
    // ------------------------------------------------

    fn load_or_reset<T, F>(&self, collection: Collection, reset: F) -> AppResult<Loaded<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let path = self.path_of(collection);

        let reason = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => RepairReason::Empty,
            Ok(content) => match serde_json::from_str::<Vec<T>>(&content) {
                Ok(items) => {
                    debug!(%collection, count = items.len(), "loaded collection");
                    return Ok(Loaded {
                        items,
                        repaired: None,
                    });
                }
                Err(e) => {
                    debug!(%collection, error = %e, "collection failed to parse");
                    RepairReason::Malformed
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => RepairReason::Missing,
            Err(e) => {
                debug!(%collection, error = %e, "collection could not be read");
                RepairReason::Unreadable
            }
        };

        warn!(%collection, %reason, path = %path.display(), "recreating collection");
        let items = reset();
        self.write_collection(collection, &items)?;

        Ok(Loaded {
            items,
            repaired: Some(reason),
        })
    }

    fn write_collection<T: Serialize>(&self, collection: Collection, items: &[T]) -> AppResult<()> {
        self.write_atomic(&self.path_of(collection), items)
            .map_err(|source| AppError::StoreWrite { collection, source })
    }

    fn write_atomic<T: Serialize>(&self, path: &Path, items: &[T]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(items)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
