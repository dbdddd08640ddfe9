use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Executable not found: {0}")]
    ToolNotFound(String, #[source] Arc<std::io::Error>),

    #[error("Failed to run {0}")]
    ToolSpawn(String, #[source] Arc<std::io::Error>),

    #[error("{program} exited with {}: {stderr}", exit_status(.exit_code))]
    ToolFailed {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Output of {0} is not valid UTF-8")]
    ToolOutputNotUtf8(String, #[source] std::string::FromUtf8Error),

    #[error("{0} produced no output")]
    EmptyToolOutput(String),

    #[error("Release tag {0:?} must have the form YEAR.MONTH.DAY")]
    MalformedReleaseTag(String),

    #[error("Invalid component {1:?} in release tag {0:?}")]
    InvalidReleaseComponent(String, String),

    #[error("Failed to determine the user or host name")]
    MachineLookup(#[source] Arc<std::io::Error>),

    #[error("Failed to open file: {1}")]
    FailedOpenFile(#[source] Arc<std::io::Error>, String),

    #[error("Failed to write file: {1}")]
    OutputWrite(#[source] Arc<std::io::Error>, String),

    #[error("Failed to serialize build info")]
    Serialize(#[source] Arc<serde_json::Error>),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_owned(),
    }
}

/// The result type used in this crate.
pub type Result<T> = std::result::Result<T, Error>;
