use std::path::PathBuf;

use build_info::{toolchain::DEFAULT_COMPILER, vcs::DEFAULT_GIT};
use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};

/// Workaround for parsing the different log level
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Generates the C source file embedding the firmware build info.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// The log level
    #[arg(short, value_enum, long, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// The name of the build configuration, e.g. Debug or Release
    #[arg(
        long = "config",
        visible_alias = "configuration",
        default_value = "Unknown",
        overrides_with = "configuration"
    )]
    pub configuration: String,

    /// The cross-compiler to ask for its version
    #[arg(long, default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// The git executable
    #[arg(long, default_value = DEFAULT_GIT)]
    pub git: String,

    /// The repository to describe. Defaults to the current directory
    #[arg(long)]
    pub repository: Option<PathBuf>,

    /// Additionally writes the build info as JSON to this file
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// The C source file to generate
    pub output: PathBuf,
}

impl Options {
    /// Dumps the options to the log.
    pub fn dump_to_log(&self) {
        debug!("log_level: {:?}", self.log_level);
        debug!("configuration: {:?}", self.configuration);
        debug!("compiler: {:?}", self.compiler);
        debug!("git: {:?}", self.git);
        debug!("repository: {:?}", self.repository);
        debug!("manifest: {:?}", self.manifest);
        debug!("output: {:?}", self.output);
    }
}
