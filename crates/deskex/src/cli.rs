use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Clone, Debug, Parser)]
#[command(name="deskex",version=env!("CARGO_PKG_VERSION"),about="Export helpdesk customer records to CSV",long_about=None)]
pub struct App {
    /// Output CSV file, created or truncated at run start.
    #[arg(long, default_value = "clients.csv")]
    pub output: PathBuf,

    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
