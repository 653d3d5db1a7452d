// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadspace Geometry: 2D primitives and the predicate kernel.
//!
//! Quadspace Geometry is the value-type foundation of the workspace.
//!
//! - Plain-value primitives: [`Point`], [`Vec2`], [`Rect`], [`Square`],
//!   [`Segment`], [`SimplePolygon`], and [`Polygon`] (with holes).
//! - A total predicate kernel: closed-box [`intersects`] and
//!   [`contains`], [`orientation`], [`on_segment`], segment
//!   intersection, [`distance`], [`bounding_box`], and in-place
//!   [`Translate`].
//! - Polygon algorithms: even-odd point location
//!   ([`SimplePolygon::contains`], [`Polygon::contains`]) and
//!   separating-axis overlap ([`SimplePolygon::intersects`]).
//!
//! Everything is generic over a scalar [`Coord`]; integer coordinates
//! are the primary case and all predicates are exact for them. The only
//! fallible operations are the `boundary()` accessors, which return
//! [`Error::Empty`] on polygons without vertices.
//!
//! [`Rect`] and [`Square`] are interchangeable wherever a box is
//! expected: predicates accept any [`AxisBox`] implementor, so a
//! rectangle can be tested against a square region without conversion.
//!
//! # Example
//!
//! ```
//! use quadspace_geometry::{contains, intersects, Point, Rect, Translate};
//!
//! let field = Rect::new(Point::new(0, 0), 100, 100);
//! let mut probe = Rect::new(Point::new(50, 50), 10, 10);
//! assert!(contains(&field, &probe));
//!
//! // Slide the probe over the corner: no longer contained, still
//! // intersecting.
//! probe.translate(45, 45);
//! assert!(!contains(&field, &probe));
//! assert!(intersects(&field, &probe));
//! ```
//!
//! Polygon containment honors holes:
//!
//! ```
//! use quadspace_geometry::{Point, Polygon, SimplePolygon};
//!
//! let outer = SimplePolygon::new(vec![
//!     Point::new(0, 0),
//!     Point::new(0, 10),
//!     Point::new(10, 10),
//!     Point::new(10, 0),
//! ]);
//! let hole = SimplePolygon::new(vec![
//!     Point::new(4, 4),
//!     Point::new(4, 6),
//!     Point::new(6, 6),
//!     Point::new(6, 4),
//! ]);
//! let plate = Polygon::new(outer, vec![hole]);
//!
//! assert!(plate.contains(Point::new(2, 2)));
//! assert!(!plate.contains(Point::new(5, 5)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod coord;
pub mod point;
pub mod polygon;
pub mod predicates;
mod raycast;
pub mod rect;
mod sat;
pub mod segment;
pub mod vec2;

pub use coord::Coord;
pub use point::Point;
pub use polygon::{Error, Polygon, SimplePolygon};
pub use predicates::{
    Orientation, Translate, bounding_box, contains, contains_point, distance, intersects,
    on_segment, orientation,
};
pub use rect::{AxisBox, Rect, Square};
pub use segment::Segment;
pub use vec2::Vec2;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn intersects_is_symmetric() {
        let mut state = 0x9E37_79B9_7F4A_7C15_u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "low bits of the generator state are uniform enough here"
            )]
            let v = (state % 1000) as i32;
            v
        };
        for _ in 0..10_000 {
            let a = Rect::new(Point::new(next(), next()), next(), next());
            let b = Rect::new(Point::new(next(), next()), next(), next());
            assert_eq!(intersects(&a, &b), intersects(&b, &a), "a={a:?} b={b:?}");
            if contains(&a, &b) {
                assert!(intersects(&a, &b), "containment implies intersection");
            }
        }
    }

    #[test]
    fn segment_intersection_is_symmetric() {
        let a = Segment::new(Point::new(0, 0), Point::new(9, 9));
        let b = Segment::new(Point::new(0, 9), Point::new(9, 0));
        let c = Segment::new(Point::new(20, 20), Point::new(30, 20));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert_eq!(a.intersects(&c), c.intersects(&a));
    }

    #[test]
    fn simple_polygon_self_intersects() {
        let polygon = SimplePolygon::new(vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 5.0),
            Point::new(7.0, 6.0),
            Point::new(10.0, 4.0),
            Point::new(9.0, 2.0),
        ]);
        assert!(polygon.intersects(&polygon));
    }

    #[test]
    fn translate_roundtrip_for_every_shape() {
        let mut point = Point::new(3, 4);
        let mut rect = Rect::new(Point::new(1, 2), 5, 6);
        let mut square = Square::new(Point::new(7, 8), 9);
        let mut polygon = SimplePolygon::new(vec![Point::new(0, 0), Point::new(3, 1)]);

        let (dx, dy) = (12, -7);
        point.translate(dx, dy);
        rect.translate(dx, dy);
        square.translate(dx, dy);
        polygon.translate(dx, dy);
        point.translate(-dx, -dy);
        rect.translate(-dx, -dy);
        square.translate(-dx, -dy);
        polygon.translate(-dx, -dy);

        assert_eq!(point, Point::new(3, 4));
        assert_eq!(rect, Rect::new(Point::new(1, 2), 5, 6));
        assert_eq!(square, Square::new(Point::new(7, 8), 9));
        assert_eq!(
            polygon,
            SimplePolygon::new(vec![Point::new(0, 0), Point::new(3, 1)])
        );
    }
}
