//! Curve construction and per-frame update benchmarks.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flypath::camera::{CameraRig, FrameInput};
use flypath::options::{Options, PathOptions};
use flypath::path::{KeyframeSet, PathCurves};
use flypath::playback::PlaybackMode;
use glam::Vec2;

fn curve_build_benchmark(c: &mut Criterion) {
    let keyframes = KeyframeSet::showcase();
    let mut group = c.benchmark_group("curve_build");

    for resolution in [200, 1500, 5000] {
        let options = PathOptions {
            resolution,
            ..PathOptions::default()
        };
        let _ = group.bench_function(format!("{resolution}_samples"), |b| {
            b.iter(|| {
                black_box(PathCurves::build(black_box(&keyframes), &options))
            });
        });
    }
    group.finish();
}

fn rig_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rig_update");

    for mode in [PlaybackMode::Snap, PlaybackMode::Cinematic] {
        let Ok(mut rig) =
            CameraRig::new(KeyframeSet::showcase(), Options::default())
        else {
            return;
        };
        let mut frame = 0_u32;
        let _ = group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| {
                frame = (frame + 1) % 600;
                let input = FrameInput {
                    raw_progress: frame as f32 / 600.0,
                    pointer: Vec2::new(0.4, -0.2),
                    free_look_enabled: true,
                    reference_yaw: -0.01 * frame as f32,
                    ..FrameInput::at(0.0, mode)
                };
                black_box(rig.update(black_box(&input)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, curve_build_benchmark, rig_update_benchmark);
criterion_main!(benches);
