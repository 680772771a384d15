mod config;
mod key;
mod registry;
mod seed;

pub use key::{MainClass, Race};
pub use registry::{ReferenceTables, CLASSES_FILE, RACES_FILE};
pub use seed::{ClassSeed, RaceSeed};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading reference table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error parsing a race or class key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unknown race: {0}")]
    UnknownRace(String),
    #[error("Unknown main class: {0}")]
    UnknownClass(String),
}
