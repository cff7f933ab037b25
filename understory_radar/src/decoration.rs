// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-vertex marker shapes.

use core::f64::consts::FRAC_PI_4;

use kurbo::{BezPath, Circle, Point, Shape};

use crate::geometry::{DEFAULT_START_ANGLE, polygon_path, regular_polygon};

/// Rotation of [`Decoration::Square`]: corners on the diagonals, edges axis-aligned.
pub const SQUARE_OFFSET: f64 = -FRAC_PI_4;

/// Rotation of [`Decoration::Diamond`]: corners straight up, right, down, and left.
pub const VERTICAL_OFFSET: f64 = DEFAULT_START_ANGLE;

/// Flattening tolerance used when circles are converted to paths.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Marker drawn on every vertex of a series.
///
/// The carried value is the distance from the vertex to the marker outline
/// (the circle radius, or the center-to-corner distance of the 4-gons).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoration {
    /// A circle.
    Circle(f64),
    /// An axis-aligned square.
    Square(f64),
    /// A square standing on a corner.
    Diamond(f64),
}

impl Decoration {
    /// Returns the marker radius.
    #[must_use]
    pub fn radius(self) -> f64 {
        match self {
            Self::Circle(r) | Self::Square(r) | Self::Diamond(r) => r,
        }
    }
}

/// Builds the closed outline of `decoration` centered on `center`.
#[must_use]
pub fn decoration_path(decoration: Decoration, center: Point) -> BezPath {
    match decoration {
        Decoration::Circle(radius) => Circle::new(center, radius).to_path(CIRCLE_TOLERANCE),
        Decoration::Square(radius) => rotated_quad(radius, center, SQUARE_OFFSET),
        Decoration::Diamond(radius) => rotated_quad(radius, center, VERTICAL_OFFSET),
    }
}

fn rotated_quad(radius: f64, center: Point, rotation: f64) -> BezPath {
    polygon_path(
        regular_polygon(4, radius, center, rotation)
            .into_iter()
            .map(|v| v.point),
    )
}
