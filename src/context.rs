//! Everything a command handler needs: the effective configuration and the
//! clock (real, or fixed through `--now`).

use crate::config::Config;
use crate::core::qr::{QrRefresher, SvgQrEncoder};
use crate::core::{AttendanceService, Clock};
use crate::errors::AppResult;
use crate::store::RecordStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

pub struct AppContext {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Store for the configured data directory, initialized.
    pub fn store(&self) -> AppResult<Arc<RecordStore>> {
        let store = RecordStore::new(self.config.data_path());
        store.init()?;
        Ok(Arc::new(store))
    }

    pub fn service(&self) -> AppResult<AttendanceService> {
        self.service_with(self.store()?)
    }

    pub fn service_with(&self, store: Arc<RecordStore>) -> AppResult<AttendanceService> {
        let zone = self.config.zone(Arc::clone(&self.clock))?;
        Ok(AttendanceService::new(store, zone, self.config.window()?))
    }

    pub fn refresher_with(&self, store: Arc<RecordStore>) -> AppResult<QrRefresher> {
        let zone = self.config.zone(Arc::clone(&self.clock))?;
        Ok(QrRefresher::new(
            store,
            Arc::new(SvgQrEncoder::default()),
            zone,
            StdRng::from_entropy(),
        ))
    }
}
