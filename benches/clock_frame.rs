// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_clock::clock::{ClockFace, FixedClock, RecordingSurface, TimeSample};
use std::hint::black_box;

fn clock_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_frame");

    let mut face = ClockFace::default();
    face.resize(480.0, 480.0);
    let clock = FixedClock(TimeSample::new(10, 8, 42));

    group.bench_function("draw_frame", |b| {
        let mut surface = RecordingSurface::new();
        b.iter(|| {
            surface.clear();
            let redraw = face.draw(&mut surface, black_box(&clock));
            black_box(redraw);
        });
    });

    group.bench_function("snapshot_round_trip", |b| {
        b.iter(|| {
            let bytes = face
                .save_state(None)
                .to_bytes()
                .unwrap_or_default();
            let mut restored = ClockFace::default();
            black_box(restored.restore_from_bytes(black_box(&bytes)));
        });
    });

    group.finish();
}

criterion_group!(benches, clock_frame_benchmark);
criterion_main!(benches);
