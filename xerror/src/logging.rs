use err_derive::Error;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LoggingError {
    #[error(display = "Unknown logging level {:?}.", _0)]
    UnknownLevel(String),
    #[error(display = "Could not open log file {}: {}", path, reason)]
    LogFile { path: String, reason: String },
}
