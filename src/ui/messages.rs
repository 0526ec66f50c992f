//! Coloured one-line status messages for the CLI.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

/// `<icon> <msg>` with the icon in the tone's colour.
pub fn styled<T: fmt::Display>(tone: Tone, msg: T) -> String {
    format!("{}{BOLD}{}{RESET} {msg}", tone.color(), tone.icon())
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Warning, msg));
}

/// Goes to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(Tone::Error, msg));
}

/// Title line above a table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{BOLD}=== {msg} ==={RESET}\n", Tone::Info.color());
}
