//! Capture configuration
//!
//! The host injects parameters as a JSON blob before `start`; the only
//! recognized option is the output path. An empty path disables capture
//! for the whole run.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default capture target: 32-bit float, 16 kHz by filename convention only
/// (the raw PCM format embeds neither).
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/audio-out-f32-16k.pcm";

/// Configuration surface for [`SampleWriter`](crate::SampleWriter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Where interleaved PCM is appended. Empty string disables writing.
    pub output_path: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl CaptureConfig {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Config that never opens a file.
    pub fn disabled() -> Self {
        Self {
            output_path: String::new(),
        }
    }

    /// Parse a host-injected JSON parameter blob.
    ///
    /// Unspecified fields fall back to their defaults, matching the host's
    /// partial-parameter convention.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this config asks for any output at all.
    pub fn is_enabled(&self) -> bool {
        !self.output_path.is_empty()
    }
}
