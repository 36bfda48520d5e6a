//! Host-driven component lifecycle
//!
//! Components in this crate have no lifecycle of their own: an external
//! scheduler instantiates them, calls `start` once, delivers messages via
//! `tick`, and calls `stop` once at shutdown. The host guarantees the three
//! methods are invoked sequentially, never concurrently, for a given
//! instance, so implementations need no internal locking.

use crate::delivery::AudioDelivery;

/// Lifecycle contract between a component and its host scheduler.
///
/// The host owns the concrete instance behind this trait and drives it:
///
/// ```
/// use audio_capture::{Codelet, SampleWriter, AudioDelivery};
///
/// let mut writer = SampleWriter::disabled();
/// writer.start();
/// let samples = [0.0_f32; 4];
/// let channel: &[u8] = bytemuck::cast_slice(&samples);
/// let buffers = [channel];
/// writer.tick(&AudioDelivery::new(1, &buffers));
/// writer.stop();
/// ```
pub trait Codelet {
    /// Called once before any deliveries. Acquires resources.
    fn start(&mut self);

    /// Called once per delivered message.
    fn tick(&mut self, delivery: &AudioDelivery<'_>);

    /// Called once at shutdown. Releases resources. Must be idempotent.
    fn stop(&mut self);
}
