// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadspace_geometry::{Point, Rect};
use quadspace_index::QuadTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_coord(&mut self, bound: u64) -> i32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "bounds stay well inside i32 range"
        )]
        let v = (self.next_u64() % bound) as i32;
        v
    }
}

fn gen_random_rects(count: usize, max_pos: u64, max_w: u64, max_h: u64) -> Vec<Rect<i32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Rect::new(
            Point::new(rng.next_coord(max_pos), rng.next_coord(max_pos)),
            rng.next_coord(max_w),
            rng.next_coord(max_h),
        ));
    }
    out
}

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

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[512_usize, 4096, 32_768] {
        // The original workload shape: wide coordinate range, bounded
        // extents.
        let rects = gen_random_rects(n, 1_000_000, 1000, 1000);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{n}"), |b| {
            b.iter_batched(
                QuadTree::<Rect<i32>>::new,
                |mut tree| {
                    for rect in &rects {
                        let _ = tree.insert(*rect);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[64_usize, 128] {
        let rects = gen_grid_rects(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter_batched(
                QuadTree::<Rect<i32>>::new,
                |mut tree| {
                    for rect in &rects {
                        let _ = tree.insert(*rect);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    for &n in &[4096_usize, 32_768] {
        let rects = gen_random_rects(n, 1_000_000, 1000, 1000);
        let mut tree = QuadTree::new();
        for rect in &rects {
            let _ = tree.insert(*rect);
        }
        let windows = gen_random_rects(1024, 1_000_000, 1000, 1000);
        group.throughput(Throughput::Elements(windows.len() as u64));
        group.bench_function(format!("random_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for window in &windows {
                    total += tree.query(window).count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query);
criterion_main!(benches);
