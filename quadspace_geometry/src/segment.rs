// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segment primitive.

use crate::coord::Coord;
use crate::point::Point;
use crate::predicates::{Orientation, on_segment, orientation};

/// A part of a line bounded by two endpoints.
///
/// Equality compares the ordered pair, so `(p, q)` and `(q, p)` are
/// distinct segments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment<C> {
    /// First endpoint.
    pub p: Point<C>,
    /// Second endpoint.
    pub q: Point<C>,
}

impl<C> Segment<C> {
    /// A segment between the two endpoints.
    pub const fn new(p: Point<C>, q: Point<C>) -> Self {
        Self { p, q }
    }
}

impl<C: Coord> Segment<C> {
    /// Whether this segment and `other` intersect.
    ///
    /// The general case compares the four endpoint orientations; when a
    /// triple is collinear the corresponding endpoint must lie within
    /// the other segment's bounding rectangle.
    pub fn intersects(&self, other: &Self) -> bool {
        let o1 = orientation(self.p, self.q, other.p);
        let o2 = orientation(self.p, self.q, other.q);
        let o3 = orientation(other.p, other.q, self.p);
        let o4 = orientation(other.p, other.q, self.q);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && on_segment(self, other.p))
            || (o2 == Orientation::Collinear && on_segment(self, other.q))
            || (o3 == Orientation::Collinear && on_segment(other, self.p))
            || (o4 == Orientation::Collinear && on_segment(other, self.q))
    }
}
