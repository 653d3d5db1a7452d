// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadspace_geometry::{AxisBox, Point, Rect};
use quadspace_index::QuadTree;

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: i32) -> Vec<Rect<i32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "grid dimensions stay well inside i32 range"
            )]
            let (x0, y0) = ((x as i32) * cell, (y as i32) * cell);
            out.push(Rect::new(Point::new(x0, y0), cell, cell));
        }
    }
    out
}

fn to_rstar_rects(rects: &[Rect<i32>]) -> Vec<Rectangle<[i32; 2]>> {
    rects
        .iter()
        .map(|r| {
            let bl = r.bottom_left();
            let tr = r.top_right();
            Rectangle::from_corners([bl.x, bl.y], [tr.x, tr.y])
        })
        .collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_rstar");
    for &n in &[64_usize, 128] {
        let rects = gen_grid_rects(n, 10);
        let query = Rect::new(Point::new(100, 100), 400, 400);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadspace_build_query_n{n}"), |b| {
            b.iter_batched(
                QuadTree::<Rect<i32>>::new,
                |mut tree| {
                    for rect in rects.iter().copied() {
                        let _ = tree.insert(rect);
                    }
                    let hits = tree.query(&query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let rstar_rects = to_rstar_rects(&rects);
        let envelope = {
            let bl = query.bottom_left();
            let tr = query.top_right();
            AABB::from_corners([bl.x, bl.y], [tr.x, tr.y])
        };
        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                || rstar_rects.clone(),
                |items| {
                    let tree = RTree::bulk_load(items);
                    let hits = tree.locate_in_envelope_intersecting(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
