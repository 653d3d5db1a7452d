// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicate kernel: total functions over the primitives.
//!
//! Everything here is pure and never fails. Box predicates use closed
//! semantics: touching edges count as intersection, and boundary points
//! are contained.

use crate::coord::{Coord, max_c, min_c};
use crate::point::Point;
use crate::polygon::SimplePolygon;
use crate::rect::{AxisBox, Rect};
use crate::segment::Segment;

/// Shapes that shift in place by a coordinate delta.
///
/// Translating a polygon moves every vertex of every contour.
pub trait Translate {
    /// Scalar type of the shape.
    type Coord: Coord;

    /// Moves the shape by the specified horizontal and vertical
    /// amounts.
    fn translate(&mut self, dx: Self::Coord, dy: Self::Coord);
}

/// Euclidean distance between two points.
///
/// Integer scalars truncate the square root.
pub fn distance<C: Coord>(first: Point<C>, second: Point<C>) -> C {
    let dx = first.x - second.x;
    let dy = first.y - second.y;
    (dx * dx + dy * dy).sqrt()
}

/// Whether two axis-aligned boxes intersect.
///
/// Closed-box semantics: there is at least one shared point, edges and
/// corners included.
pub fn intersects<A, B>(first: &A, second: &B) -> bool
where
    A: AxisBox,
    B: AxisBox<Coord = A::Coord>,
{
    let Point { x: ax1, y: ay1 } = first.bottom_left();
    let Point { x: ax2, y: ay2 } = first.top_right();
    let Point { x: bx1, y: by1 } = second.bottom_left();
    let Point { x: bx2, y: by2 } = second.top_right();

    ax2 >= bx1 && bx2 >= ax1 && ay2 >= by1 && by2 >= ay1
}

/// Whether the point is inside or on the edge of the box.
pub fn contains_point<A: AxisBox>(shape: &A, point: Point<A::Coord>) -> bool {
    let Point { x: x1, y: y1 } = shape.bottom_left();
    let Point { x: x2, y: y2 } = shape.top_right();
    x1 <= point.x && point.x <= x2 && y1 <= point.y && point.y <= y2
}

/// Whether `inner` lies entirely inside `outer` (edges included).
pub fn contains<A, B>(outer: &A, inner: &B) -> bool
where
    A: AxisBox,
    B: AxisBox<Coord = A::Coord>,
{
    contains_point(outer, inner.bottom_left()) && contains_point(outer, inner.top_right())
}

/// The bounding rectangle of a simple polygon, in linear time.
///
/// Spans the lexicographically minimum and maximum vertices of the
/// boundary. The lexicographic maximum always carries the true maximum
/// x, which is all the ray cast needs; the y span matches the axis
/// extremes only when the lexicographic extremes do. An empty polygon
/// yields the zero rectangle.
pub fn bounding_box<C: Coord>(polygon: &SimplePolygon<C>) -> Rect<C> {
    let mut vertices = polygon.vertices().iter();
    let Some(&first) = vertices.next() else {
        return Rect::new(Point::new(C::zero(), C::zero()), C::zero(), C::zero());
    };
    let (mut min, mut max) = (first, first);
    for &vertex in vertices {
        if vertex < min {
            min = vertex;
        }
        if vertex > max {
            max = vertex;
        }
    }
    Rect::from_corners(min, max)
}

/// Relative orientation of an ordered point triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// Traversal `p → q → r` turns clockwise.
    Clockwise,
    /// Traversal `p → q → r` turns counter-clockwise.
    CounterClockwise,
}

/// Orientation of the ordered triple `(p, q, r)`.
///
/// The sign of the cross product `(qy − py)(rx − qx) − (qx − px)(ry − qy)`.
pub fn orientation<C: Coord>(p: Point<C>, q: Point<C>, r: Point<C>) -> Orientation {
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if cross == C::zero() {
        Orientation::Collinear
    } else if cross > C::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `point` lies within the bounding rectangle of `segment`.
pub fn on_segment<C: Coord>(segment: &Segment<C>, point: Point<C>) -> bool {
    let min_x = min_c(segment.p.x, segment.q.x);
    let max_x = max_c(segment.p.x, segment.q.x);
    let min_y = min_c(segment.p.y, segment.q.y);
    let max_y = max_c(segment.p.y, segment.q.y);
    min_x <= point.x && point.x <= max_x && min_y <= point.y && point.y <= max_y
}
