//! Integration Tests
//!
//! End-to-end lifecycle tests for the capture codelet: a simulated host
//! drives start/tick/stop and the written PCM file is checked byte-for-byte.

use audio_capture::interleave::deinterleave;
use audio_capture::{AudioDelivery, CaptureConfig, Codelet, SampleWriter};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn read_pcm(path: &std::path::Path) -> Vec<f32> {
    let bytes = std::fs::read(path).unwrap();
    bytemuck::cast_slice(&bytes).to_vec()
}

/// Drive one delivery per planar chunk, like the host scheduler would.
fn deliver(writer: &mut SampleWriter, channels: &[Vec<f32>]) {
    let byte_views: Vec<&[u8]> = channels
        .iter()
        .map(|ch| bytemuck::cast_slice(ch.as_slice()))
        .collect();
    writer.tick(&AudioDelivery::new(channels.len() as u8, &byte_views));
}

#[test]
fn test_documented_stereo_scenario() {
    // 2 channels, 4 samples each: ch0=[1,2,3,4], ch1=[5,6,7,8]
    let dir = tempdir().unwrap();
    let path = dir.path().join("stereo.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());

    writer.start();
    deliver(
        &mut writer,
        &[vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]],
    );
    writer.stop();

    assert_eq!(read_pcm(&path), vec![1.0, 5.0, 2.0, 6.0, 3.0, 7.0, 4.0, 8.0]);
}

#[test]
fn test_multiple_deliveries_append() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("appended.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());

    writer.start();
    deliver(&mut writer, &[vec![1.0, 2.0], vec![10.0, 20.0]]);
    deliver(&mut writer, &[vec![3.0, 4.0], vec![30.0, 40.0]]);
    deliver(&mut writer, &[vec![5.0], vec![50.0]]);
    writer.stop();

    assert_eq!(
        read_pcm(&path),
        vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0, 5.0, 50.0]
    );
}

#[test]
fn test_file_round_trip_recovers_planar_channels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());

    let ch0: Vec<f32> = (0..64).map(|i| (i as f32 * 0.01).sin()).collect();
    let ch1: Vec<f32> = (0..64).map(|i| (i as f32 * 0.02).cos()).collect();
    let ch2: Vec<f32> = (0..64).map(|i| i as f32 / 64.0).collect();

    writer.start();
    deliver(&mut writer, &[ch0.clone(), ch1.clone(), ch2.clone()]);
    writer.stop();

    let planar = deinterleave(&read_pcm(&path), 3);
    assert_eq!(planar, vec![ch0, ch1, ch2]);
}

#[test]
fn test_empty_path_writes_nothing() {
    let mut writer = SampleWriter::new(CaptureConfig::disabled());

    writer.start();
    assert!(!writer.is_open());
    for _ in 0..5 {
        deliver(&mut writer, &[vec![1.0, 2.0]]);
    }
    writer.stop();
    assert!(!writer.is_open());
}

#[test]
fn test_unopenable_path_drops_deliveries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());

    writer.start();
    for _ in 0..3 {
        deliver(&mut writer, &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    }
    writer.stop();

    assert!(!path.exists());
}

#[test]
#[should_panic(expected = "Channel count does not match")]
fn test_framing_violation_aborts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("framing.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());
    writer.start();

    let ch0 = [1.0_f32, 2.0];
    let ch1 = [3.0_f32, 4.0];
    let byte_views: [&[u8]; 2] = [bytemuck::cast_slice(&ch0), bytemuck::cast_slice(&ch1)];
    // Producer claims 4 channels but framed 2.
    writer.tick(&AudioDelivery::new(4, &byte_views));
}

#[test]
fn test_framing_violation_writes_no_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("framing.pcm");
    let path_str = path.to_str().unwrap().to_string();

    let result = std::panic::catch_unwind(move || {
        let mut writer = SampleWriter::with_path(path_str);
        writer.start();
        let ch0 = [1.0_f32, 2.0];
        let byte_views: [&[u8]; 1] = [bytemuck::cast_slice(&ch0)];
        writer.tick(&AudioDelivery::new(2, &byte_views));
    });
    assert!(result.is_err());

    // Open succeeded (truncate-or-create), but the bad delivery left nothing.
    assert_eq!(std::fs::read(&path).unwrap().len(), 0);
}

#[test]
fn test_stop_twice_then_deliveries_are_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stopped.pcm");
    let mut writer = SampleWriter::with_path(path.to_str().unwrap());

    writer.start();
    deliver(&mut writer, &[vec![1.0]]);
    writer.stop();
    writer.stop();

    // No reopen within a run: post-stop deliveries are no-ops.
    deliver(&mut writer, &[vec![2.0]]);
    assert_eq!(read_pcm(&path), vec![1.0]);
}

#[test]
fn test_restart_truncates_previous_capture() {
    // A fresh run over the same path starts the file over.
    let dir = tempdir().unwrap();
    let path = dir.path().join("reused.pcm");

    let mut first = SampleWriter::with_path(path.to_str().unwrap());
    first.start();
    deliver(&mut first, &[vec![1.0, 2.0, 3.0]]);
    first.stop();

    let mut second = SampleWriter::with_path(path.to_str().unwrap());
    second.start();
    deliver(&mut second, &[vec![9.0]]);
    second.stop();

    assert_eq!(read_pcm(&path), vec![9.0]);
}
