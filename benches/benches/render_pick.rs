// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use overstory_raster::{Pixmap, render_scene};
use overstory_scene::{Scene, decode_hit_color, generate};
use overstory_session::{Session, SessionConfig};

const WIDTH: u32 = 500;
const HEIGHT: u32 = 500;

fn seeded_scene(count: u32) -> Scene {
    let mut rng = SmallRng::seed_from_u64(0xCAFE_F00D);
    generate(&mut rng, count, WIDTH, HEIGHT)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &count in &[100u32, 1000, 2500, 10_000] {
        let scene = seeded_scene(count);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_function(format!("dual_buffer_n{count}"), |b| {
            b.iter_batched(
                || (Pixmap::new(WIDTH, HEIGHT), Pixmap::new(WIDTH, HEIGHT)),
                |(mut visible, mut hit)| {
                    let stats = render_scene(
                        &scene,
                        Affine::IDENTITY,
                        &mut visible,
                        Some(&mut hit),
                        None,
                    );
                    black_box(stats.shapes);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("visible_only_n{count}"), |b| {
            b.iter_batched(
                || Pixmap::new(WIDTH, HEIGHT),
                |mut visible| {
                    let stats = render_scene(&scene, Affine::IDENTITY, &mut visible, None, None);
                    black_box(stats.shapes);
                },
                BatchSize::SmallInput,
            )
        });
    }
    // The transform changes per-shape arithmetic but not the pass structure.
    let scene = seeded_scene(2500);
    let transform = Affine::translate(Vec2::new(37.0, -12.0)) * Affine::scale(0.64);
    group.bench_function("dual_buffer_n2500_panned_zoomed", |b| {
        b.iter_batched(
            || (Pixmap::new(WIDTH, HEIGHT), Pixmap::new(WIDTH, HEIGHT)),
            |(mut visible, mut hit)| {
                let stats = render_scene(&scene, transform, &mut visible, Some(&mut hit), None);
                black_box(stats.shapes);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

// Pick latency must be flat in scene size: one pixel read and a decode.
fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    for &count in &[100u32, 2500, 10_000] {
        let scene = seeded_scene(count);
        let mut visible = Pixmap::new(WIDTH, HEIGHT);
        let mut hit = Pixmap::new(WIDTH, HEIGHT);
        render_scene(&scene, Affine::IDENTITY, &mut visible, Some(&mut hit), None);
        group.bench_function(format!("pixel_decode_n{count}"), |b| {
            b.iter(|| {
                let px = hit.pixel(black_box(250), black_box(250));
                black_box(px.and_then(decode_hit_color));
            })
        });
    }
    group.finish();
}

fn bench_session_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let mut session = Session::new(SessionConfig {
        shape_count: 2500,
        seed: Some(0xBEEF),
        ..SessionConfig::default()
    });
    session.render();
    // Steady state: no pending redraw, so a click is mapping + read + decode.
    group.bench_function("click_steady_state", |b| {
        b.iter(|| black_box(session.click(black_box(Point::new(250.0, 250.0)))))
    });
    group.finish();
}

criterion_group!(benches, bench_render, bench_pick, bench_session_click);
criterion_main!(benches);
