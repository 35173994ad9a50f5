use serde::{Deserialize, Serialize};
use slog::{o, Drain, Logger};
use xerror::logging::LoggingError;

pub use slog;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoggingSettings {
    pub stdout: bool,
    pub level: String,
    pub log_path: Option<String>,
    pub name: String,
}

impl LoggingSettings {
    pub fn terminal(name: &str, level: &str) -> Self {
        Self {
            stdout: true,
            level: level.to_string(),
            log_path: None,
            name: name.to_string(),
        }
    }
}

pub fn parse_level(level: &str) -> Result<slog::Level, LoggingError> {
    match level {
        "trace" => Ok(slog::Level::Trace),
        "debug" => Ok(slog::Level::Debug),
        "info" => Ok(slog::Level::Info),
        "warn" | "warning" => Ok(slog::Level::Warning),
        "error" => Ok(slog::Level::Error),
        "critical" => Ok(slog::Level::Critical),
        st => Err(LoggingError::UnknownLevel(st.to_string())),
    }
}

pub fn init_log(config: &LoggingSettings) -> Result<Logger, LoggingError> {
    let LoggingSettings {
        stdout,
        level,
        log_path,
        name,
    } = config;

    let level = parse_level(level)?;
    let values = o!("name" => name.to_string());

    let drain_stdout_async = if *stdout {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        Some(slog_async::Async::new(drain).build().fuse())
    } else {
        None
    };

    let file_drain = match log_path {
        Some(path) => Some(build_file_drain(path).map_err(|err| LoggingError::LogFile {
            path: path.clone(),
            reason: err.to_string(),
        })?),
        None => None,
    };

    let logger = match (drain_stdout_async, file_drain) {
        (Some(drain_stdout), Some(file_drain)) => {
            let drain = slog::Duplicate::new(drain_stdout, file_drain).fuse();
            let filter_drain = slog::LevelFilter::new(drain, level).fuse();
            Logger::root(filter_drain, values)
        }
        (Some(drain_stdout), None) => {
            let filter_drain = slog::LevelFilter::new(drain_stdout, level).fuse();
            Logger::root(filter_drain, values)
        }
        (None, Some(file_drain)) => {
            let filter_drain = slog::LevelFilter::new(file_drain, level).fuse();
            Logger::root(filter_drain, values)
        }
        (None, None) => Logger::root(slog::Discard, values),
    };
    Ok(logger)
}

fn build_file_drain(log_path: &str) -> Result<slog::Fuse<slog_async::Async>, std::io::Error> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;
    let decorator = slog_term::PlainSyncDecorator::new(file);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Ok(drain)
}
