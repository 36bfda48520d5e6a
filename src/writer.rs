//! Capture audio deliveries and append them to a raw PCM file
//!
//! The writer's whole state machine is "file open or not". It enters the
//! open state at most once, at `start`, and leaves it at most once, at
//! `stop`; there is no reopen within a run. Open failure and an empty
//! configured path both leave it permanently closed, and every subsequent
//! delivery is dropped.

use std::fs::File;
use std::io::{BufWriter, Write};

use log::{debug, warn};

use crate::codelet::Codelet;
use crate::config::CaptureConfig;
use crate::delivery::AudioDelivery;
use crate::interleave::interleave;

/// Writes interleaved f32 PCM blocks to a single output file.
///
/// Output is headerless: platform-native-endian 32-bit floats, interleaved
/// channel order, one block appended per delivery. Sample rate and channel
/// count are external convention (the default filename says f32 @ 16 kHz).
///
/// The file handle is exclusively owned: nothing else reads or writes it
/// between `start` and `stop`.
#[derive(Debug)]
pub struct SampleWriter {
    config: CaptureConfig,
    file: Option<BufWriter<File>>,
}

impl SampleWriter {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config, file: None }
    }

    /// Writer targeting the given path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self::new(CaptureConfig::new(path))
    }

    /// Writer that never opens a file; every delivery is a no-op.
    pub fn disabled() -> Self {
        Self::new(CaptureConfig::disabled())
    }

    /// Whether an output file is currently open.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }
}

impl Codelet for SampleWriter {
    /// Open the output file, truncate-or-create.
    ///
    /// An empty configured path, or a path that fails to open, leaves the
    /// writer closed for the rest of the run: no retry, no error surfaced
    /// to the host. The failure is logged so the degradation is visible.
    fn start(&mut self) {
        if !self.config.is_enabled() {
            debug!("no output path configured, capture disabled");
            return;
        }

        match File::create(&self.config.output_path) {
            Ok(file) => {
                debug!("capturing to {}", self.config.output_path);
                self.file = Some(BufWriter::new(file));
            }
            Err(e) => {
                warn!(
                    "failed to open '{}' ({}), dropping all deliveries this run",
                    self.config.output_path, e
                );
            }
        }
    }

    /// Interleave one delivery and append it to the file.
    ///
    /// No-op when no file is open.
    ///
    /// # Panics
    /// Panics if the delivery's declared channel count disagrees with the
    /// number of buffers it carries. That means the upstream producer broke
    /// its own framing contract, and continuing would interleave with the
    /// wrong channel geometry and corrupt the file irrecoverably.
    fn tick(&mut self, delivery: &AudioDelivery<'_>) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let declared = delivery.declared_channels() as usize;
        let buffers = delivery.buffers();
        if declared != buffers.len() {
            panic!(
                "Channel count does not match {} != {}",
                declared,
                buffers.len()
            );
        }

        let block = interleave(buffers);
        if let Err(e) = file.write_all(bytemuck::cast_slice(&block)) {
            warn!(
                "write to '{}' failed ({}), delivery dropped",
                self.config.output_path, e
            );
        }
    }

    /// Flush and close the output file. Idempotent.
    fn stop(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                warn!("flush of '{}' failed: {}", self.config.output_path, e);
            }
            debug!("closed {}", self.config.output_path);
        }
    }
}
