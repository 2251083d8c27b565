// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_carousel`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use understory_carousel::gesture::{SwipeTracker, TouchMove, is_valid_slide};
use understory_carousel::{Carousel, CarouselHost, CarouselOptions, EdgeMode, PositionTable};

/// Evenly spaced slides with no DOM behind them.
#[derive(Clone)]
struct Strip {
    count: usize,
    width: f64,
    viewport: f64,
    translation: f64,
}

impl Strip {
    fn new(count: usize) -> Self {
        Self {
            count,
            width: 320.0,
            viewport: 320.0,
            translation: 0.0,
        }
    }
}

impl CarouselHost for Strip {
    fn slide_count(&self) -> usize {
        self.count
    }

    fn slide_offset_left(&self, index: usize) -> f64 {
        index as f64 * self.width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn content_width(&self) -> f64 {
        self.count as f64 * self.width
    }

    fn translate(&mut self, offset: f64, _duration_ms: u32) {
        self.translation = offset;
    }
}

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/positions");

    for &count in &[8_usize, 128, 4096] {
        let lefts: Vec<f64> = (0..count).map(|i| 8.0 + i as f64 * 320.0).collect();

        group.bench_function(BenchmarkId::new("rebuild", count), |b| {
            let mut table = PositionTable::new();
            b.iter(|| {
                table.rebuild(lefts.iter().copied());
                black_box(table.len())
            });
        });

        let mut table = PositionTable::new();
        table.rebuild(lefts.iter().copied());
        // Viewport one slide wide; the last slide fits exactly.
        let overflow = (count - 1) as f64 * 320.0;
        group.bench_function(BenchmarkId::new("resolve_in_range", count), |b| {
            b.iter(|| black_box(table.resolve(black_box(count / 2), overflow)));
        });
        // Content shorter than the requested offset clamps.
        group.bench_function(BenchmarkId::new("resolve_clamped", count), |b| {
            b.iter(|| black_box(table.resolve(black_box(count - 1), overflow / 2.0)));
        });
    }

    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/gesture");

    group.bench_function("track_horizontal_swipe", |b| {
        let moves: Vec<TouchMove> = (1..=16)
            .map(|i| TouchMove::single(Point::new(300.0 - f64::from(i) * 6.0, 50.0)))
            .collect();
        b.iter(|| {
            let mut tracker = SwipeTracker::new();
            tracker.start(Point::new(300.0, 50.0), 0);
            for touch in &moves {
                black_box(tracker.update(*touch, false));
            }
            black_box(tracker.end(180, 320.0))
        });
    });

    group.bench_function("is_valid_slide", |b| {
        b.iter(|| {
            black_box(is_valid_slide(black_box(120), black_box(-40.0), 320.0))
                | black_box(is_valid_slide(black_box(900), black_box(-200.0), 320.0))
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/navigation");

    for &count in &[8_usize, 128] {
        group.bench_function(BenchmarkId::new("setup", count), |b| {
            b.iter_batched(
                || Carousel::new(Strip::new(count), CarouselOptions::default()),
                |mut carousel| {
                    black_box(carousel.setup()).ok();
                    black_box(carousel.run_tick());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("next_wrap_with_tick", count), |b| {
            let options = CarouselOptions::default().with_edge(EdgeMode::Wrap);
            let mut carousel = Carousel::new(Strip::new(count), options);
            carousel.run_tick();
            b.iter(|| {
                black_box(carousel.next()).ok();
                black_box(carousel.run_tick());
            });
        });
    }

    group.bench_function("swipe_to_next", |b| {
        let mut carousel = Carousel::new(Strip::new(8), CarouselOptions::default());
        carousel.run_tick();
        b.iter(|| {
            carousel.on_touch_start(Point::new(300.0, 50.0), 10_000);
            carousel.on_touch_move(TouchMove::single(Point::new(260.0, 52.0)));
            black_box(carousel.on_touch_end(10_120));
            carousel.slide(0, Some(0)).ok();
            black_box(carousel.run_tick());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_positions, bench_gesture, bench_navigation);
criterion_main!(benches);
