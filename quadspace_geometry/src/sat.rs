// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon overlap via the separating axis theorem.

use crate::coord::Coord;
use crate::polygon::SimplePolygon;
use crate::vec2::Vec2;

/// Whether the projections of the two polygons overlap on every
/// candidate axis.
///
/// Candidate axes are the normalized perpendiculars of both polygons'
/// edges; a strictly positive gap between the projection intervals on
/// any axis separates the shapes. Empty polygons overlap nothing.
pub(crate) fn polygons_overlap<C: Coord>(
    first: &SimplePolygon<C>,
    second: &SimplePolygon<C>,
) -> bool {
    if first.is_empty() || second.is_empty() {
        return false;
    }
    !has_separating_axis(first, second) && !has_separating_axis(second, first)
}

fn has_separating_axis<C: Coord>(edges_of: &SimplePolygon<C>, other: &SimplePolygon<C>) -> bool {
    let vertices = edges_of.vertices();
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        let axis = Vec2::between(from, to).perpendicular_axis();
        let (min_a, max_a) = project(edges_of, axis);
        let (min_b, max_b) = project(other, axis);
        if min_b > max_a || min_a > max_b {
            return true;
        }
    }
    false
}

fn project<C: Coord>(polygon: &SimplePolygon<C>, axis: Vec2<C>) -> (C, C) {
    let vertices = polygon.vertices();
    let first = axis.dot(Vec2::new(vertices[0].x, vertices[0].y));
    let (mut min, mut max) = (first, first);
    for vertex in &vertices[1..] {
        let shadow = axis.dot(Vec2::new(vertex.x, vertex.y));
        if shadow < min {
            min = shadow;
        }
        if shadow > max {
            max = shadow;
        }
    }
    (min, max)
}
