use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating game settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid size {width}x{height} is outside the supported range {min}..={max}")]
    InvalidGrid {
        width: u16,
        height: u16,
        min: u16,
        max: u16,
    },

    #[error("tick interval {0} ms is outside the supported range {1}..={2} ms")]
    InvalidTickInterval(u64, u64, u64),
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
