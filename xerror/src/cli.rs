use err_derive::Error;
use serde::Serialize;

use crate::lnurl::{LnurlError, QrError};
use crate::logging::LoggingError;

#[derive(Debug, Error, Serialize)]
pub enum CliError {
    #[error(display = "{}", _0)]
    Lnurl(LnurlError),
    #[error(display = "{}", _0)]
    Qr(QrError),
    #[error(display = "{}", _0)]
    Logging(LoggingError),
    #[error(display = "Could not write {}: {}", path, reason)]
    Write { path: String, reason: String },
    #[error(display = "Could not serialize output: {}", _0)]
    Serialize(String),
}

impl From<LnurlError> for CliError {
    fn from(err: LnurlError) -> Self {
        CliError::Lnurl(err)
    }
}

impl From<QrError> for CliError {
    fn from(err: QrError) -> Self {
        CliError::Qr(err)
    }
}

impl From<LoggingError> for CliError {
    fn from(err: LoggingError) -> Self {
        CliError::Logging(err)
    }
}
