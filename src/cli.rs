//! capture-cli - drive a SampleWriter from a WAV file
//!
//! Stands in for the host scheduler: loads a WAV, de-interleaves it into
//! planar channel buffers, and feeds them through a [`SampleWriter`] in
//! fixed-size chunks, one delivery per chunk.

use std::path::{Path, PathBuf};

use clap::Parser;
use hound::{SampleFormat, WavReader};
use log::info;

use crate::codelet::Codelet;
use crate::config::DEFAULT_OUTPUT_PATH;
use crate::delivery::AudioDelivery;
use crate::error::{CaptureError, Result};
use crate::interleave::deinterleave;
use crate::writer::SampleWriter;

/// Replay a WAV file through the capture codelet
#[derive(Parser, Debug)]
#[command(name = "capture-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input WAV file
    pub input: PathBuf,

    /// Output PCM path (empty string disables writing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Samples per channel in each delivery
    #[arg(long, default_value_t = 1024)]
    pub chunk_size: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load a WAV file as interleaved f32 samples plus its channel count.
///
/// Integer samples are normalized to [-1.0, 1.0).
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u8)> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| CaptureError::AudioReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(CaptureError::InvalidAudio {
            reason: "WAV file declares zero channels".to_string(),
        });
    }
    if spec.channels > u8::MAX as u16 {
        return Err(CaptureError::InvalidAudio {
            reason: format!(
                "{} channels exceed the delivery limit of {}",
                spec.channels,
                u8::MAX
            ),
        });
    }

    let read_err = |e: hound::Error| CaptureError::AudioReadError {
        path: path.display().to_string(),
        source: e,
    };

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map_err(read_err))
            .collect::<Result<Vec<f32>>>()?,
        SampleFormat::Int => {
            let max_val = (1u32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val).map_err(read_err))
                .collect::<Result<Vec<f32>>>()?
        }
    };

    Ok((samples, spec.channels as u8))
}

/// Run one full start/tick/stop capture of the given WAV file.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.chunk_size == 0 {
        return Err(CaptureError::InvalidAudio {
            reason: "chunk size must be at least one sample".to_string(),
        });
    }

    let (samples, channels) = load_wav(&cli.input)?;
    let planar = deinterleave(&samples, channels as usize);
    let frames = planar.first().map(Vec::len).unwrap_or(0);
    info!(
        "loaded {}: {} channels, {} frames",
        cli.input.display(),
        channels,
        frames
    );

    let mut writer = SampleWriter::with_path(cli.output.clone());
    writer.start();

    let mut delivered = 0usize;
    let mut start = 0usize;
    while start < frames {
        let end = (start + cli.chunk_size).min(frames);
        let byte_views: Vec<&[u8]> = planar
            .iter()
            .map(|ch| bytemuck::cast_slice(&ch[start..end]))
            .collect();
        writer.tick(&AudioDelivery::new(channels, &byte_views));
        delivered += 1;
        start = end;
    }

    writer.stop();
    info!("delivered {} chunks to '{}'", delivered, cli.output);
    Ok(())
}
