//! Error types for the People Core binary

use thiserror::Error;

/// Errors that can occur while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    TooLarge { path: String, size: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
