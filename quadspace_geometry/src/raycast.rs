// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Even-odd point location in simple polygons.

use crate::coord::Coord;
use crate::point::Point;
use crate::polygon::SimplePolygon;
use crate::predicates::{Orientation, bounding_box, on_segment, orientation};
use crate::rect::AxisBox;
use crate::segment::Segment;

/// Whether `point` lies inside `polygon` or on its boundary.
///
/// Casts a horizontal ray from the point past the polygon's bounding
/// box and counts boundary crossings; the point is inside when the
/// count is odd. A ray through a vertex would naively cross both
/// incident edges, so a vertex hit contributes an extra count exactly
/// when the neighboring vertices fall on the same side of the ray,
/// keeping the parity right in both configurations.
pub(crate) fn simple_polygon_contains<C: Coord>(
    polygon: &SimplePolygon<C>,
    point: Point<C>,
) -> bool {
    let vertices = polygon.vertices();
    if vertices.len() < 3 {
        return false;
    }

    let beyond = bounding_box(polygon).top_right().x + C::one();
    let ray = Segment::new(point, Point::new(beyond, point.y));

    let mut crossings = 0_usize;
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        let edge = Segment::new(from, to);
        if !edge.intersects(&ray) {
            continue;
        }
        if orientation(from, point, to) == Orientation::Collinear {
            // The point is on the edge's carrier line: on the boundary
            // iff it is within the edge itself.
            return on_segment(&edge, point);
        }
        if on_segment(&ray, to) {
            let after = vertices[(i + 2) % vertices.len()];
            if orientation(point, to, from) == orientation(after, to, point) {
                crossings += 1;
            }
        }
        crossings += 1;
    }

    crossings % 2 == 1
}
