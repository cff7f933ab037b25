// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular polygon geometry shared by the chart outline, gradations, series,
//! and vertex decorations.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`
use kurbo::{BezPath, Point, Vec2};

/// Angle of axis 0, in radians: straight up in a y-down coordinate system.
pub const DEFAULT_START_ANGLE: f64 = -FRAC_PI_2;

/// A polygon corner together with the angle of the ray it sits on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position of the vertex.
    pub point: Point,
    /// Angle in radians of the ray from the polygon center through `point`.
    pub angle: f64,
}

/// Angle in radians between two consecutive axes of a `count`-gon.
///
/// Returns `None` for `count == 0`.
#[must_use]
pub fn exterior_angle(count: usize) -> Option<f64> {
    (count > 0).then(|| TAU / count as f64)
}

/// Vertex `index` of a regular `count`-gon inscribed in a circle.
///
/// The angle of vertex `i` is `i * TAU / count + start_angle`. Returns `None`
/// when `count` is zero.
#[must_use]
pub fn polygon_vertex(
    index: usize,
    count: usize,
    radius: f64,
    center: Point,
    start_angle: f64,
) -> Option<Vertex> {
    let step = exterior_angle(count)?;
    let angle = index as f64 * step + start_angle;
    Some(Vertex {
        point: point_on_ray(center, radius, angle),
        angle,
    })
}

/// All vertices of a regular `count`-gon, in axis order.
#[must_use]
pub fn regular_polygon(count: usize, radius: f64, center: Point, start_angle: f64) -> Vec<Vertex> {
    (0..count)
        .filter_map(|index| polygon_vertex(index, count, radius, center, start_angle))
        .collect()
}

/// The point at `radius` from `center` along the ray at `angle`.
#[must_use]
pub fn point_on_ray(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Moves `fraction` of the way from `center` to `target`.
///
/// `0.0` yields `center`, `1.0` yields `target`, larger values overshoot.
#[must_use]
pub fn scale_toward(center: Point, target: Point, fraction: f64) -> Point {
    center + (target - center) * fraction
}

/// Radius ratio of gradation ring `k` out of `total`: `(k + 1) / (total + 1)`.
///
/// Rings therefore sit strictly between the center and the outer polygon.
#[must_use]
pub fn gradation_ratio(k: usize, total: usize) -> f64 {
    (k + 1) as f64 / (total + 1) as f64
}

/// Radii of all `total` gradation rings for an outer `radius`, innermost first.
#[must_use]
pub fn gradation_radii(radius: f64, total: usize) -> Vec<f64> {
    (0..total)
        .map(|k| radius * gradation_ratio(k, total))
        .collect()
}

/// Builds a closed polygon path through `points`.
///
/// A single point yields a degenerate `MoveTo` + `ClosePath`; no points
/// yield an empty path.
#[must_use]
pub fn polygon_path(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return path;
    };
    path.move_to(first);
    for point in points {
        path.line_to(point);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::PathEl;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a - b).hypot() < 1e-9,
            "expected {b:?}, got {a:?} (distance {})",
            (a - b).hypot()
        );
    }

    #[test]
    fn vertices_are_equidistant_and_evenly_spaced() {
        let center = Point::new(12.0, -4.0);
        for count in 1..=9 {
            let vertices = regular_polygon(count, 50.0, center, DEFAULT_START_ANGLE);
            assert_eq!(vertices.len(), count);
            let step = TAU / count as f64;
            for (i, v) in vertices.iter().enumerate() {
                assert!(((v.point - center).hypot() - 50.0).abs() < 1e-9);
                if i > 0 {
                    let delta = v.angle - vertices[i - 1].angle;
                    assert!((delta - step).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn axis_zero_points_up() {
        let v = polygon_vertex(0, 5, 100.0, Point::ORIGIN, DEFAULT_START_ANGLE).unwrap();
        assert_close(v.point, Point::new(0.0, -100.0));
    }

    #[test]
    fn zero_count_has_no_vertices() {
        assert!(exterior_angle(0).is_none());
        assert!(polygon_vertex(0, 0, 10.0, Point::ORIGIN, 0.0).is_none());
        assert!(regular_polygon(0, 10.0, Point::ORIGIN, 0.0).is_empty());
    }

    #[test]
    fn gradation_radii_are_strictly_inside_and_increasing() {
        assert_eq!(gradation_radii(100.0, 3), vec![25.0, 50.0, 75.0]);

        let radii = gradation_radii(80.0, 7);
        for pair in radii.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(radii.iter().all(|r| *r > 0.0 && *r < 80.0));
        assert!(gradation_radii(80.0, 0).is_empty());
    }

    #[test]
    fn scale_toward_hits_endpoints() {
        let center = Point::new(1.0, 2.0);
        let target = Point::new(5.0, -6.0);
        assert_close(scale_toward(center, target, 0.0), center);
        assert_close(scale_toward(center, target, 1.0), target);
        assert_close(scale_toward(center, target, 0.5), Point::new(3.0, -2.0));
    }

    #[test]
    fn polygon_path_is_closed() {
        let path = polygon_path([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        let els: Vec<_> = path.elements().to_vec();
        assert_eq!(els.len(), 4);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[3], PathEl::ClosePath));

        let single = polygon_path([Point::new(3.0, 3.0)]);
        assert_eq!(single.elements().len(), 2);
        assert!(polygon_path(core::iter::empty()).elements().is_empty());
    }
}
