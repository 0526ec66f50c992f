use crate::core::{AttendanceWindow, Clock, ZoneClock};
use crate::core::qr::RefreshSchedule;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: String,
    pub port: u16,
    pub utc_offset_hours: i32,
    pub window_start: String,
    pub window_end: String,
    pub qr_refresh_secs: u64,
    pub qr_initial_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            port: 3000,
            utc_offset_hours: 7,
            window_start: "06:00".to_string(),
            window_end: "07:15".to_string(),
            qr_refresh_secs: 60,
            qr_initial_delay_secs: 1,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rabsen`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rabsen")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rabsen.conf")
    }

    /// Return the default directory holding the JSON collections
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file (defaults if not found), then apply the
    /// `PORT` environment override.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {e}", path.display()))
            })?
        } else {
            Config::default()
        };

        if let Some(port) = port_from_env()? {
            cfg.port = port;
        }

        Ok(cfg)
    }

    /// Write the configuration file (unless `is_test`) and return the config
    /// that `init` should use.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            info!(path = %Self::config_file().display(), "configuration written");
        }

        Ok(config)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn window(&self) -> AppResult<AttendanceWindow> {
        AttendanceWindow::parse(&self.window_start, &self.window_end)
    }

    pub fn zone(&self, clock: Arc<dyn Clock>) -> AppResult<ZoneClock> {
        ZoneClock::with_offset_hours(clock, self.utc_offset_hours)
    }

    pub fn refresh_schedule(&self) -> AppResult<RefreshSchedule> {
        if self.qr_refresh_secs == 0 {
            return Err(AppError::Config("qr_refresh_secs must be at least 1".into()));
        }
        Ok(RefreshSchedule {
            initial_delay: Duration::from_secs(self.qr_initial_delay_secs),
            period: Duration::from_secs(self.qr_refresh_secs),
        })
    }
}

fn port_from_env() -> AppResult<Option<u16>> {
    match env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("invalid PORT value '{raw}': {e}"))),
        Err(_) => {
            if env::var_os("PORT").is_some() {
                warn!("PORT is not valid unicode, using configured port");
            }
            Ok(None)
        }
    }
}
