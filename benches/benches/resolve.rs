// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use loupe_view2d::{ViewTransform, ViewportState, ZoomLimits};

fn bench_resolve(c: &mut Criterion) {
    let surface = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let limits = ZoomLimits::default();
    let candidates: Vec<(f64, Vec2)> = (0..256)
        .map(|i| {
            let f = f64::from(i);
            (0.5 + f / 64.0, Vec2::new(f * 13.0 - 1600.0, 1000.0 - f * 9.0))
        })
        .collect();

    c.bench_function("view2d/resolve", |b| {
        b.iter(|| {
            for &(zoom, pan) in &candidates {
                black_box(ViewportState::resolve(zoom, pan, &limits, &surface));
            }
        });
    });

    let states: Vec<ViewportState> = candidates
        .iter()
        .filter_map(|&(zoom, pan)| ViewportState::resolve(zoom, pan, &limits, &surface))
        .collect();
    c.bench_function("view2d/view_to_content", |b| {
        b.iter(|| {
            for state in &states {
                let transform = ViewTransform::from_state(state, false);
                black_box(transform.view_to_content(surface.center(), surface.origin()));
            }
        });
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
