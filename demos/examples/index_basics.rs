// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadspace Index: insert, query a window, remove.

use quadspace_geometry::{Point, Rect};
use quadspace_index::QuadTree;

fn main() {
    let mut tree: QuadTree<Rect<i32>> = QuadTree::new();
    tree.insert(Rect::new(Point::new(50, 13), 100, 100));
    tree.insert(Rect::new(Point::new(0, 0), 123, 123));
    tree.insert(Rect::new(Point::new(200, 200), 10, 10));
    println!("stored {} keys: {tree:?}", tree.len());

    let window = Rect::new(Point::new(60, 60), 5, 5);
    println!("hits for {window}:");
    for hit in tree.query(&window) {
        println!("  {hit}");
    }

    tree.remove(&Rect::new(Point::new(0, 0), 123, 123));
    let hits: Vec<_> = tree.query(&window).collect();
    println!("after removal: {} hit(s), len {}", hits.len(), tree.len());
}
