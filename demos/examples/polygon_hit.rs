// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point location in a polygon with holes.

use quadspace_geometry::{Point, Polygon, SimplePolygon};

fn main() {
    let outer = SimplePolygon::new(vec![
        Point::new(2, 1),
        Point::new(3, 5),
        Point::new(5, 6),
        Point::new(10, 6),
        Point::new(12, 5),
        Point::new(12, 3),
        Point::new(10, 1),
    ]);
    let holes = vec![
        SimplePolygon::new(vec![
            Point::new(4, 3),
            Point::new(5, 5),
            Point::new(7, 4),
            Point::new(6, 2),
        ]),
        SimplePolygon::new(vec![
            Point::new(9, 2),
            Point::new(9, 3),
            Point::new(11, 5),
            Point::new(11, 4),
        ]),
    ];
    let plate = Polygon::new(outer, holes);
    println!("{plate}");

    for probe in [
        Point::new(3, 2),
        Point::new(8, 4),
        Point::new(11, 3),
        Point::new(1, 1),
        Point::new(5, 3),
        Point::new(10, 4),
    ] {
        let verdict = if plate.contains(probe) { "inside" } else { "outside" };
        println!("{probe} is {verdict}");
    }
}
