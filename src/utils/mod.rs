pub mod colors;
pub mod path;
pub mod table;
pub mod time;

pub use time::minutes_of_day;
