use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rabsen
/// Classroom attendance tracker with rotating QR codes
#[derive(Parser)]
#[command(
    name = "rabsen",
    version = env!("CARGO_PKG_VERSION"),
    about = "A classroom attendance tracker: morning check-in window, rotating QR codes and a daily recap",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current instant is this RFC 3339 timestamp
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the record store
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// List the student roster
    Students {
        #[arg(long, help = "Print the raw student collection as JSON")]
        json: bool,
    },

    /// Record today's attendance for a student
    Checkin {
        /// Student id (1-based)
        student_id: u32,

        #[arg(long, help = "Print the response as JSON")]
        json: bool,
    },

    /// Show today's present/absent recap
    Recap {
        #[arg(long, help = "Print the recap as JSON")]
        json: bool,
    },

    /// Show whether check-in is currently open
    Status {
        #[arg(long, help = "Print the status as JSON")]
        json: bool,
    },

    /// Manage student QR codes
    Qr {
        #[arg(long = "refresh", help = "Regenerate every student's QR code once")]
        refresh: bool,

        #[arg(long = "show", value_name = "ID", help = "Print the current QR data URL of a student")]
        show: Option<u32>,
    },

    /// Export today's recap to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run the JSON API and the periodic QR refresh
    Serve {
        #[arg(long, help = "Override the configured port")]
        port: Option<u16>,
    },
}
