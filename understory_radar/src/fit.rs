// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fit radius solver.
//!
//! Laying out a radar chart is a two-pass process when auto-fit is enabled:
//!
//! 1. [`FitPass::AutoAdjust`]: vertices and label boxes are computed at the
//!    naive radius (half the container's short side, minus the margin). Every
//!    label box that crosses a container edge yields a candidate radius that
//!    pulls its vertex back along its ray by the missing distance. The
//!    smallest candidate wins.
//! 2. [`FitPass::DrawText`]: vertices and labels are recomputed at the
//!    resolved radius and drawn.
//!
//! Shrinking the radius moves a label along its axis ray, so an overflow
//! perpendicular to that ray (for example a very wide label on the vertical
//! axis) cannot be fixed this way. Such labels are left to clip.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`
use kurbo::{Point, Rect};

use crate::geometry::Vertex;

/// Below this magnitude a ray is treated as perpendicular to an edge normal.
const RAY_EPSILON: f64 = 1e-6;

/// How the chart radius is chosen for a draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitStrategy {
    /// Use `min(width, height) / 2 - margin` regardless of label sizes.
    Fixed,
    /// Start from the fixed radius and shrink it until labels fit.
    #[default]
    AutoFit,
}

/// Phase of a layout computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitPass {
    /// Measure labels at the naive radius and derive the final radius.
    AutoAdjust,
    /// Lay out at the final radius and issue draw calls.
    DrawText,
}

/// Signed distances from a label box to each container edge.
///
/// Positive values mean the box is inside that edge; negative values are
/// the amount by which it crosses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDifferences {
    /// Label top minus container top.
    pub top: f64,
    /// Container bottom minus label bottom.
    pub bottom: f64,
    /// Label left minus container left.
    pub left: f64,
    /// Container right minus label right.
    pub right: f64,
}

impl EdgeDifferences {
    /// Measures how `label` sits inside `container`.
    #[must_use]
    pub fn between(container: Rect, label: Rect) -> Self {
        Self {
            top: label.y0 - container.y0,
            bottom: container.y1 - label.y1,
            left: label.x0 - container.x0,
            right: container.x1 - label.x1,
        }
    }

    /// Returns `true` if the label does not cross any edge.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.top >= 0.0 && self.bottom >= 0.0 && self.left >= 0.0 && self.right >= 0.0
    }
}

/// A label measured during [`FitPass::AutoAdjust`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitCandidate {
    /// Outer vertex of the axis at the naive radius.
    pub vertex: Vertex,
    /// Label box placed for that vertex.
    pub label: Rect,
}

/// Resolves the largest radius, not above `naive_radius`, that keeps every
/// fixable label inside `container`.
///
/// Returns `naive_radius` unchanged when every label already fits.
#[must_use]
pub fn resolve_radius(
    container: Rect,
    center: Point,
    naive_radius: f64,
    labels: &[FitCandidate],
) -> f64 {
    let mut radius = naive_radius;
    for candidate in labels {
        let diff = EdgeDifferences::between(container, candidate.label);
        if diff.fits() {
            continue;
        }
        let point = candidate.vertex.point;
        let sin = candidate.vertex.angle.sin();
        let cos = candidate.vertex.angle.cos();

        // Each candidate solves `center + r * (cos, sin) == adjusted` along
        // the axis of the crossed edge.
        if diff.left < 0.0 && cos < -RAY_EPSILON {
            let adjusted = point.x - diff.left;
            radius = radius.min((adjusted - center.x) / cos);
        }
        if diff.right < 0.0 && cos > RAY_EPSILON {
            let adjusted = point.x + diff.right;
            radius = radius.min((adjusted - center.x) / cos);
        }
        if diff.top < 0.0 && sin < -RAY_EPSILON {
            let adjusted = point.y - diff.top;
            radius = radius.min((adjusted - center.y) / sin);
        }
        if diff.bottom < 0.0 && sin > RAY_EPSILON {
            let adjusted = point.y + diff.bottom;
            radius = radius.min((adjusted - center.y) / sin);
        }
    }
    let radius = radius.max(0.0);
    if radius < naive_radius {
        tracing::debug!(naive_radius, radius, "auto-fit shrank radar radius");
    }
    radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{DEFAULT_START_ANGLE, point_on_ray};
    use alloc::vec::Vec;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn candidate(
        center: Point,
        radius: f64,
        angle: f64,
        label: impl Fn(Point) -> Rect,
    ) -> FitCandidate {
        let point = point_on_ray(center, radius, angle);
        FitCandidate {
            vertex: Vertex { point, angle },
            label: label(point),
        }
    }

    #[test]
    fn edge_differences_sign_convention() {
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inside = EdgeDifferences::between(container, Rect::new(10.0, 20.0, 30.0, 40.0));
        assert!(inside.fits());
        assert_eq!(inside.top, 20.0);
        assert_eq!(inside.bottom, 60.0);
        assert_eq!(inside.left, 10.0);
        assert_eq!(inside.right, 70.0);

        let outside = EdgeDifferences::between(container, Rect::new(-5.0, 90.0, 30.0, 110.0));
        assert!(!outside.fits());
        assert_eq!(outside.left, -5.0);
        assert_eq!(outside.bottom, -10.0);
    }

    #[test]
    fn fitting_labels_keep_naive_radius() {
        let container = Rect::new(0.0, 0.0, 200.0, 200.0);
        let center = container.center();
        let labels: Vec<_> = (0_u32..5)
            .map(|i| {
                let angle = DEFAULT_START_ANGLE + f64::from(i) * (2.0 * PI / 5.0);
                candidate(center, 50.0, angle, |p| {
                    Rect::new(p.x - 5.0, p.y - 5.0, p.x + 5.0, p.y + 5.0)
                })
            })
            .collect();
        assert_eq!(resolve_radius(container, center, 50.0, &labels), 50.0);
    }

    #[test]
    fn top_overflow_pulls_vertex_down() {
        let container = Rect::new(0.0, 0.0, 200.0, 200.0);
        let center = container.center();
        // Vertex at y = 10, label 20 high above it: crosses the top by 10.
        let top = candidate(center, 90.0, -FRAC_PI_2, |p| {
            Rect::new(p.x - 10.0, p.y - 20.0, p.x + 10.0, p.y)
        });
        let radius = resolve_radius(container, center, 90.0, &[top]);
        assert!((radius - 80.0).abs() < 1e-9);
    }

    #[test]
    fn side_overflows_use_the_most_restrictive_candidate() {
        let container = Rect::new(0.0, 0.0, 200.0, 200.0);
        let center = container.center();
        // Right label crosses by 15, left label crosses by 30.
        let right = candidate(center, 90.0, 0.0, |p| {
            Rect::new(p.x, p.y - 5.0, p.x + 25.0, p.y + 5.0)
        });
        let left = candidate(center, 90.0, PI, |p| {
            Rect::new(p.x - 40.0, p.y - 5.0, p.x, p.y + 5.0)
        });
        let radius = resolve_radius(container, center, 90.0, &[right, left]);
        assert!((radius - 60.0).abs() < 1e-9);
        assert!(radius <= 90.0);
    }

    #[test]
    fn perpendicular_overflow_is_accepted() {
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        let center = container.center();
        // A label on the vertical axis wider than the container.
        let wide = candidate(center, 30.0, -FRAC_PI_2, |p| {
            Rect::new(p.x - 80.0, p.y - 10.0, p.x + 80.0, p.y)
        });
        assert_eq!(resolve_radius(container, center, 30.0, &[wide]), 30.0);
    }

    #[test]
    fn radius_never_goes_negative() {
        let container = Rect::new(0.0, 0.0, 20.0, 20.0);
        let center = container.center();
        let huge = candidate(center, 5.0, -FRAC_PI_2, |p| {
            Rect::new(p.x - 1.0, p.y - 100.0, p.x + 1.0, p.y)
        });
        assert_eq!(resolve_radius(container, center, 5.0, &[huge]), 0.0);
    }
}
