//! TuneFinder Error Types
//!
//! Every failure here is recoverable: component boundaries log these and
//! degrade to an empty or safe result.

use thiserror::Error;

/// Central error type for TuneFinder
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Transcode error: {0}")]
    Transcode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for TuneFinder operations
pub type MusicResult<T> = Result<T, MusicError>;
