use super::encoder::QrEncoder;
use crate::core::clock::ZoneClock;
use crate::errors::AppResult;
use crate::models::Student;
use crate::store::RecordStore;
use rand::RngCore;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

/// Outcome of one refresh cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Students written back with a new code.
    pub refreshed: usize,
    /// Students whose encode failed and got an empty placeholder.
    pub failed: usize,
    /// The student store had to be rebuilt; nothing was encoded.
    pub store_repaired: bool,
}

/// Runs refresh cycles. Each payload carries a random salt from `rng`.
pub struct QrRefresher {
    store: Arc<RecordStore>,
    encoder: Arc<dyn QrEncoder>,
    zone: ZoneClock,
    rng: Mutex<StdRng>,
}

impl QrRefresher {
    pub fn new(
        store: Arc<RecordStore>,
        encoder: Arc<dyn QrEncoder>,
        zone: ZoneClock,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            encoder,
            zone,
            rng: Mutex::new(rng),
        }
    }

    /// `"{id}-{unix millis}-{random}"`
    pub fn payload_for(&self, student_id: u32) -> String {
        let millis = self.zone.utc_now().timestamp_millis();
        let salt = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64();
        format!("{student_id}-{millis}-{salt:016x}")
    }

    /// One full cycle: load, encode every student in turn, save once.
    pub fn run_cycle(&self) -> AppResult<CycleReport> {
        let loaded = self.store.load_students_tracked()?;

        if let Some(reason) = loaded.repaired {
            warn!(%reason, "student store rebuilt, skipping QR refresh this cycle");
            return Ok(CycleReport {
                store_repaired: true,
                ..CycleReport::default()
            });
        }

        let mut report = CycleReport::default();
        let mut updated: Vec<Student> = Vec::with_capacity(loaded.items.len());

        // One image in memory at a time.
        for student in loaded.items {
            let payload = self.payload_for(student.id);
            let qr_code = match self.encoder.encode(&payload) {
                Ok(image) => {
                    report.refreshed += 1;
                    image
                }
                Err(e) => {
                    error!(student_id = student.id, error = %e, "QR encoding failed");
                    report.failed += 1;
                    String::new()
                }
            };
            updated.push(Student { qr_code, ..student });
        }

        self.store.save_students(&updated)?;
        info!(
            refreshed = report.refreshed,
            failed = report.failed,
            "QR codes updated"
        );

        Ok(report)
    }
}

impl std::fmt::Debug for QrRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrRefresher")
            .field("store", &self.store)
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}
