// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadspace Index: a dynamically sized quadtree over rectangle keys.
//!
//! Quadspace Index stores axis-aligned box keys — any
//! [`quadspace_geometry::AxisBox`] with a total order — and answers
//! window queries: report every stored key intersecting a query
//! rectangle.
//!
//! - The indexed region is not fixed up front. The root square doubles
//!   until it spans each newly inserted key, and quadrants materialize
//!   lazily as keys descend.
//! - A key whose extent crosses a node's split lines is held at that
//!   node, so every key lives in exactly one node and queries never
//!   report duplicates.
//! - `insert`, `remove`, and `contains` are set operations over the
//!   exact key value; [`QuadTree::len`] is maintained incrementally.
//!
//! Keys are expected to lie in the positive quadrant: the root is
//! anchored at the origin and grows toward the upper right only.
//!
//! # Example
//!
//! ```
//! use quadspace_geometry::{Point, Rect};
//! use quadspace_index::QuadTree;
//!
//! let mut tree: QuadTree<Rect<i32>> = QuadTree::new();
//! assert!(tree.insert(Rect::new(Point::new(50, 13), 100, 100)));
//! assert!(tree.insert(Rect::new(Point::new(0, 0), 123, 123)));
//! assert!(!tree.insert(Rect::new(Point::new(0, 0), 123, 123)));
//!
//! let window = Rect::new(Point::new(60, 60), 5, 5);
//! assert_eq!(tree.query(&window).count(), 2);
//!
//! assert!(tree.remove(&Rect::new(Point::new(0, 0), 123, 123)));
//! assert_eq!(tree.query(&window).count(), 1);
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The tree is single-threaded:
//! not safe for concurrent mutation, while read-only queries over a
//! finished tree are.

#![no_std]

extern crate alloc;

pub mod quadtree;

pub use quadtree::{BoxKey, QuadTree};
