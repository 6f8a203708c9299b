use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::reporter::ReportOptions;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Recorded run log to replay. Supported: YAML, JSON, TOML
    #[structopt(parse(from_os_str))]
    pub file: PathBuf,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Threshold in seconds for marking a test as slow
    #[structopt(long, short = "s", default_value = "0.5")]
    pub slow: f64,

    /// Show docstrings and fixture names on every line
    #[structopt(long)]
    pub expand_all: bool,

    /// Hide fixture names in expanded output
    #[structopt(long)]
    pub no_fixtures: bool,

    /// Path to which an HTML report will be written
    #[structopt(long)]
    pub html: Option<PathBuf>,
}

impl Opt {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            slow_threshold: self.slow,
            expand_all: self.expand_all,
            no_fixtures: self.no_fixtures,
        }
    }
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
