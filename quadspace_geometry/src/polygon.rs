// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple polygons and polygons with holes.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;
use crate::point::Point;
use crate::predicates::{self, Translate};
use crate::raycast;
use crate::rect::Rect;
use crate::sat;

/// Error raised by boundary accessors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The polygon has no vertices.
    #[error("the polygon is empty")]
    Empty,
}

/// A subset of the plane bounded by a non-self-intersecting piecewise
/// linear curve.
///
/// Vertices are listed in traversal (clockwise) order. The library does
/// not verify that the curve is simple; that is the caller's contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimplePolygon<C> {
    curve: Vec<Point<C>>,
}

impl<C> SimplePolygon<C> {
    /// A polygon over the given piecewise linear curve.
    pub fn new(curve: Vec<Point<C>>) -> Self {
        Self { curve }
    }

    /// Whether the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// The boundary curve.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the polygon has no vertices.
    pub fn boundary(&self) -> Result<&[Point<C>], Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.curve)
    }

    /// Mutable access to the boundary curve.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the polygon has no vertices.
    pub fn boundary_mut(&mut self) -> Result<&mut [Point<C>], Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&mut self.curve)
    }

    pub(crate) fn vertices(&self) -> &[Point<C>] {
        &self.curve
    }
}

impl<C: Coord> SimplePolygon<C> {
    /// Whether `point` lies inside the polygon or on its boundary.
    ///
    /// Even-odd ray casting; polygons with fewer than three vertices
    /// contain nothing.
    pub fn contains(&self, point: Point<C>) -> bool {
        raycast::simple_polygon_contains(self, point)
    }

    /// Whether this polygon and `other` overlap, by the separating axis
    /// test over both polygons' edge perpendiculars.
    ///
    /// Exact for convex polygons. Non-convex inputs may produce false
    /// positives, never false negatives.
    pub fn intersects(&self, other: &Self) -> bool {
        sat::polygons_overlap(self, other)
    }
}

impl<C: Coord> Translate for SimplePolygon<C> {
    type Coord = C;

    fn translate(&mut self, dx: C, dy: C) {
        for vertex in &mut self.curve {
            vertex.translate(dx, dy);
        }
    }
}

impl<C: fmt::Display> fmt::Display for SimplePolygon<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimplePolygon {{ ")?;
        for vertex in &self.curve {
            write!(f, "{vertex}, ")?;
        }
        write!(f, "}}")
    }
}

/// An area-connected polygon: one external boundary plus interior
/// boundaries (holes).
///
/// Stored as one contiguous contour sequence with the external boundary
/// first, so the whole polygon's bounding box is the first contour's.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Polygon<C> {
    contours: Vec<SimplePolygon<C>>,
}

impl<C> Polygon<C> {
    /// A polygon with the given external boundary and holes.
    pub fn new(boundary: SimplePolygon<C>, holes: Vec<SimplePolygon<C>>) -> Self {
        let mut contours = Vec::with_capacity(holes.len() + 1);
        contours.push(boundary);
        contours.extend(holes);
        Self { contours }
    }

    /// Whether the polygon has an external boundary.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The external boundary.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when the polygon has no external boundary.
    pub fn boundary(&self) -> Result<&SimplePolygon<C>, Error> {
        self.contours.first().ok_or(Error::Empty)
    }

    /// Whether the polygon has interior boundaries.
    pub fn has_holes(&self) -> bool {
        self.contours.len() > 1
    }

    /// The interior boundaries; empty when there are none.
    pub fn holes(&self) -> &[SimplePolygon<C>] {
        self.contours.get(1..).unwrap_or(&[])
    }
}

impl<C: Coord> Polygon<C> {
    /// Whether `point` lies inside the filled area: inside the external
    /// boundary and inside no hole.
    ///
    /// An empty polygon contains nothing.
    pub fn contains(&self, point: Point<C>) -> bool {
        let Some(boundary) = self.contours.first() else {
            return false;
        };
        boundary.contains(point) && !self.holes().iter().any(|hole| hole.contains(point))
    }

    /// The bounding rectangle of the filled area (the external
    /// boundary's box).
    pub fn bounding_box(&self) -> Rect<C> {
        match self.contours.first() {
            Some(boundary) => predicates::bounding_box(boundary),
            None => Rect::new(Point::new(C::zero(), C::zero()), C::zero(), C::zero()),
        }
    }
}

impl<C: Coord> Translate for Polygon<C> {
    type Coord = C;

    fn translate(&mut self, dx: C, dy: C) {
        for contour in &mut self.contours {
            contour.translate(dx, dy);
        }
    }
}

impl<C: fmt::Display> fmt::Display for Polygon<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon {{ Boundary: {{ ")?;
        if let Some(boundary) = self.contours.first() {
            write!(f, "{boundary}")?;
        }
        for hole in self.holes() {
            write!(f, " }} Hole: {{ {hole}")?;
        }
        write!(f, " }} }}")
    }
}
