use std::{fs::File, path::PathBuf, sync::Arc};

use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
    util::TryInitError,
};

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    Init(TryInitError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Logger file error: {}", e),
            Self::Init(e) => write!(f, "Logger already initialized: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

impl From<TryInitError> for LoggerError {
    fn from(e: TryInitError) -> LoggerError {
        LoggerError::Init(e)
    }
}

/// Installs the global subscriber for an embedding shell: pretty stdout
/// output, an optional log file, and the HTTP stack's own chatter kept
/// out of the way.
pub fn setup(log_level: LevelFilter, log_file: Option<PathBuf>) -> Result<(), LoggerError> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    let file_log = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(BoxMakeWriter::new(Arc::new(file)))
                    .with_file(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Add a filter to *both* layers that rejects spans and
                // events whose targets start with specific prefixes.
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("hyper")
                        && !metadata.target().starts_with("reqwest")
                        && !metadata.target().starts_with("rustls")
                })),
        )
        .try_init()?;

    Ok(())
}
