pub mod clock;
pub mod gate;
pub mod qr;
pub mod recap;
pub mod service;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock, ZoneClock};
pub use gate::AttendanceGate;
pub use recap::RecapProjector;
pub use service::AttendanceService;
pub use window::AttendanceWindow;
