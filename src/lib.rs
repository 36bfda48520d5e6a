//! Audio Capture - planar-to-interleaved PCM capture codelet
//!
//! A single host-driven component, [`SampleWriter`], that receives
//! multi-channel planar f32 audio deliveries, interleaves them, and appends
//! the result to a raw PCM file.
//!
//! # Architecture
//!
//! The component has no lifecycle of its own: an external scheduler calls
//! [`Codelet::start`], delivers messages via [`Codelet::tick`], and calls
//! [`Codelet::stop`], strictly sequentially. Message transport, scheduling,
//! and parameter binding all live in that host; this crate's contract with
//! it is "deliver a channel count and per-channel byte buffers, provide an
//! output path".

pub mod codelet;
pub mod config;
pub mod delivery;
pub mod error;
pub mod interleave;
pub mod writer;

pub mod cli;

pub use codelet::Codelet;
pub use config::{CaptureConfig, DEFAULT_OUTPUT_PATH};
pub use delivery::AudioDelivery;
pub use error::{CaptureError, Result};
pub use writer::SampleWriter;
