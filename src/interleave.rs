//! Planar to interleaved sample conversion
//!
//! Capture hardware hands us one buffer per channel (planar layout); raw PCM
//! files conventionally store samples interleaved (frame 0 of every channel,
//! then frame 1, ...). This module does the reorder, byte-for-byte: no
//! resampling, no clipping, no format conversion.

use crate::delivery::SAMPLE_BYTES;

/// Interleave planar channel byte buffers into a single f32 block.
///
/// The sample count is taken from the first buffer; every channel is assumed
/// to hold at least that many samples. Output index `s * channels + c` holds
/// channel `c`, sample `s`.
///
/// # Panics
/// Panics if a channel buffer is shorter than the first one (the equal-length
/// assumption is not separately validated).
pub fn interleave(buffers: &[&[u8]]) -> Vec<f32> {
    let channels = buffers.len();
    if channels == 0 {
        return Vec::new();
    }
    let samples_per_channel = buffers[0].len() / SAMPLE_BYTES;

    let mut block = vec![0.0_f32; samples_per_channel * channels];
    for (c, bytes) in buffers.iter().enumerate() {
        for s in 0..samples_per_channel {
            let sample = bytemuck::pod_read_unaligned::<f32>(
                &bytes[s * SAMPLE_BYTES..(s + 1) * SAMPLE_BYTES],
            );
            block[s * channels + c] = sample;
        }
    }
    block
}

/// Split an interleaved f32 block back into planar per-channel vectors.
///
/// Inverse of [`interleave`]. Used by the demo binary to turn WAV frames
/// into planar deliveries, and by tests to verify the reorder is lossless.
/// Trailing samples that do not fill a whole frame are dropped.
pub fn deinterleave(interleaved: &[f32], channels: usize) -> Vec<Vec<f32>> {
    if channels == 0 {
        return Vec::new();
    }
    let frames = interleaved.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (c, &sample) in frame.iter().enumerate() {
            planar[c].push(sample);
        }
    }
    planar
}
