//! QR code lifecycle: every student gets a fresh, time-salted code on a fixed
//! cadence, independent of request traffic.

mod encoder;
mod refresher;
mod schedule;

pub use encoder::{QrEncoder, SvgQrEncoder};
pub use refresher::{CycleReport, QrRefresher};
pub use schedule::{RefreshSchedule, run_refresh_loop};
