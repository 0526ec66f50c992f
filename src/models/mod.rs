pub mod attendance;
pub mod recap;
pub mod student;
pub mod time_status;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use recap::{RecapEntry, RecapStatus};
pub use student::Student;
pub use time_status::TimeStatus;
