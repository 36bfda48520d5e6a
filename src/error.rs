//! Error handling for the capture crate
//!
//! Only the API surfaces that genuinely report failure return `Result`:
//! config parsing and the demo binary's WAV loading. The codelet itself
//! degrades to a no-op on open failure (see `writer`), so its lifecycle
//! methods carry no error channel.

use thiserror::Error;

/// Result type alias for capture operations
pub type Result<T> = std::result::Result<T, CaptureError>;

/// Main error type for capture operations
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to read audio file '{path}': {source}")]
    AudioReadError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Invalid audio: {reason}")]
    InvalidAudio { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
