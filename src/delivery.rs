//! One message's worth of captured audio
//!
//! The message-delivery subsystem owns the channel buffers; a delivery only
//! borrows them for the duration of one `tick` callback and must not retain
//! them past it, which the lifetime parameter enforces.

/// Bytes per 32-bit float sample.
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// A bundle of planar audio channels delivered in one tick.
///
/// Each buffer is the raw bytes of one channel's f32 samples. The producer
/// declares how many channels it framed; `buffers.len()` must agree, and the
/// consumer treats a mismatch as a contract violation (see
/// [`SampleWriter`](crate::SampleWriter)).
#[derive(Debug, Clone, Copy)]
pub struct AudioDelivery<'a> {
    declared_channels: u8,
    buffers: &'a [&'a [u8]],
}

impl<'a> AudioDelivery<'a> {
    pub fn new(declared_channels: u8, buffers: &'a [&'a [u8]]) -> Self {
        Self {
            declared_channels,
            buffers,
        }
    }

    /// Channel count claimed by the producer's message framing.
    #[inline]
    pub fn declared_channels(&self) -> u8 {
        self.declared_channels
    }

    /// The per-channel byte buffers, in channel order.
    #[inline]
    pub fn buffers(&self) -> &'a [&'a [u8]] {
        self.buffers
    }

    /// Samples per channel, derived from the first buffer's byte length.
    ///
    /// All channels are assumed to be the same length; only the first is
    /// consulted.
    #[inline]
    pub fn samples_per_channel(&self) -> usize {
        self.buffers
            .first()
            .map(|b| b.len() / SAMPLE_BYTES)
            .unwrap_or(0)
    }
}
