// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use loupe_gesture::{DeltaGranularity, GestureEngine, InputEvent, WheelInput};

const SURFACE: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

fn zoomed_engine() -> GestureEngine<u32> {
    let mut engine = GestureEngine::default();
    for _ in 0..4 {
        engine.zoom_in(&SURFACE);
    }
    engine
}

fn drag_stream(len: usize) -> Vec<InputEvent<u32>> {
    let mut events = Vec::with_capacity(len + 2);
    events.push(InputEvent::ContactStart {
        id: 1,
        position: Point::new(640.0, 400.0),
    });
    for i in 0..len {
        let t = i as f64 / len as f64;
        events.push(InputEvent::ContactMove {
            id: 1,
            position: Point::new(640.0 + 900.0 * t, 400.0 - 300.0 * t),
        });
    }
    events.push(InputEvent::ContactEnd { id: 1 });
    events
}

fn pinch_stream(len: usize) -> Vec<InputEvent<u32>> {
    let mut events = Vec::with_capacity(2 * len + 4);
    events.push(InputEvent::ContactStart {
        id: 1,
        position: Point::new(500.0, 300.0),
    });
    events.push(InputEvent::ContactStart {
        id: 2,
        position: Point::new(700.0, 300.0),
    });
    for i in 0..len {
        // Spread out, then back in.
        let t = i as f64 / len as f64;
        let spread = 200.0 * (t * core::f64::consts::PI).sin();
        events.push(InputEvent::ContactMove {
            id: 1,
            position: Point::new(500.0 - spread, 300.0),
        });
        events.push(InputEvent::ContactMove {
            id: 2,
            position: Point::new(700.0 + spread, 300.0),
        });
    }
    events.push(InputEvent::ContactEnd { id: 1 });
    events.push(InputEvent::ContactEnd { id: 2 });
    events
}

fn wheel_stream(len: usize) -> Vec<InputEvent<u32>> {
    (0..len)
        .map(|i| {
            let delta_y = if i % 20 < 10 { -12.0 } else { 12.0 };
            InputEvent::Wheel(WheelInput {
                position: Point::new(300.0 + (i % 7) as f64 * 90.0, 200.0),
                delta_y,
                granularity: DeltaGranularity::Pixel,
                zoom_modifier: true,
            })
        })
        .collect()
}

fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/handle");

    for len in [64_usize, 512, 4_096] {
        let streams = [
            ("drag", drag_stream(len)),
            ("pinch", pinch_stream(len)),
            ("wheel", wheel_stream(len)),
        ];
        for (name, events) in &streams {
            group.throughput(Throughput::Elements(events.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, len), events, |b, events| {
                b.iter_batched(
                    zoomed_engine,
                    |mut engine| {
                        for event in events {
                            black_box(engine.handle(*event, &SURFACE));
                        }
                        black_box(engine.state());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_streams);
criterion_main!(benches);
