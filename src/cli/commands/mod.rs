pub mod checkin;
pub mod config;
pub mod export;
pub mod init;
pub mod qr;
pub mod recap;
pub mod serve;
pub mod status;
pub mod students;
