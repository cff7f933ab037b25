// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label placement.
//!
//! Each axis label is anchored to the outer vertex of its axis. The side of
//! the vertex the text sits on is chosen from the vertex position relative
//! to the chart center, so labels never overlap the polygon they describe:
//!
//! - Vertices on the vertical center line (within an epsilon) get their text
//!   centered horizontally, above the vertex when it is above the center and
//!   below it otherwise.
//! - All other vertices get their text centered vertically, to the right of
//!   the vertex on the right half of the chart and to the left otherwise.
//!
//! The rule assumes the default start angle (axis 0 pointing up). A rotated
//! chart still gets a valid placement, but labels close to the vertical line
//! may land on a less natural side.
//!
//! The side is decided once, at the naive radius. When auto-fit shrinks the
//! chart, [`place_label_in`] re-places each label on that same side.

use kurbo::{Point, Rect, Size, Vec2};

/// Side of its vertex on which a label is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelQuadrant {
    /// Above the vertex, horizontally centered.
    Top,
    /// Below the vertex, horizontally centered.
    Bottom,
    /// Left of the vertex, vertically centered.
    Left,
    /// Right of the vertex, vertically centered.
    Right,
}

impl LabelQuadrant {
    /// Classifies `vertex` relative to `center`.
    ///
    /// The x comparison tolerates `epsilon` so that vertices which are on the
    /// vertical center line up to rounding are treated as top/bottom.
    #[must_use]
    pub fn classify(vertex: Point, center: Point, epsilon: f64) -> Self {
        if (vertex.x - center.x).abs() <= epsilon {
            if vertex.y < center.y {
                Self::Top
            } else {
                Self::Bottom
            }
        } else if vertex.x > center.x {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Result of placing one label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Side of the vertex the label was placed on.
    pub quadrant: LabelQuadrant,
    /// Top-left corner of the text block, including the per-label offset.
    pub origin: Point,
    /// Measured size of the text block.
    pub size: Size,
}

impl LabelPlacement {
    /// Bounding box of the text block.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Computes the top-left draw origin of a label of `size` anchored at `vertex`.
///
/// `text_margin` separates the text from the vertex; `offset` is a manual
/// per-label nudge applied after the automatic placement.
#[must_use]
pub fn place_label(
    vertex: Point,
    center: Point,
    size: Size,
    text_margin: f64,
    offset: Vec2,
    epsilon: f64,
) -> LabelPlacement {
    let quadrant = LabelQuadrant::classify(vertex, center, epsilon);
    place_label_in(quadrant, vertex, size, text_margin, offset)
}

/// Places a label on a side chosen beforehand.
///
/// Used when the chart shrinks after fitting: the side picked at the naive
/// radius is kept, so the box moves with its vertex along the axis ray.
#[must_use]
pub fn place_label_in(
    quadrant: LabelQuadrant,
    vertex: Point,
    size: Size,
    text_margin: f64,
    offset: Vec2,
) -> LabelPlacement {
    let origin = match quadrant {
        LabelQuadrant::Top => Point::new(
            vertex.x - size.width / 2.0,
            vertex.y - (size.height + text_margin),
        ),
        LabelQuadrant::Bottom => Point::new(vertex.x - size.width / 2.0, vertex.y + text_margin),
        LabelQuadrant::Right => Point::new(vertex.x + text_margin, vertex.y - size.height / 2.0),
        LabelQuadrant::Left => Point::new(
            vertex.x - (size.width + text_margin),
            vertex.y - size.height / 2.0,
        ),
    };
    LabelPlacement {
        quadrant,
        origin: origin + offset,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 40.0,
        height: 10.0,
    };

    #[test]
    fn quadrants_follow_vertex_position() {
        let c = Point::new(100.0, 100.0);
        assert_eq!(
            LabelQuadrant::classify(Point::new(100.0, 0.0), c, 1.0),
            LabelQuadrant::Top
        );
        assert_eq!(
            LabelQuadrant::classify(Point::new(100.5, 200.0), c, 1.0),
            LabelQuadrant::Bottom
        );
        assert_eq!(
            LabelQuadrant::classify(Point::new(150.0, 120.0), c, 1.0),
            LabelQuadrant::Right
        );
        assert_eq!(
            LabelQuadrant::classify(Point::new(20.0, 80.0), c, 1.0),
            LabelQuadrant::Left
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let c = Point::new(3.0, 4.0);
        let v = Point::new(3.0 + 1e-7, -10.0);
        let first = LabelQuadrant::classify(v, c, 1e-6);
        for _ in 0..8 {
            assert_eq!(LabelQuadrant::classify(v, c, 1e-6), first);
        }
        assert_eq!(first, LabelQuadrant::Top);
        assert_eq!(LabelQuadrant::classify(v, c, 0.0), LabelQuadrant::Right);
    }

    #[test]
    fn origins_per_quadrant() {
        let c = Point::ORIGIN;
        let top = place_label(Point::new(0.0, -100.0), c, SIZE, 5.0, Vec2::ZERO, 0.5);
        assert_eq!(top.origin, Point::new(-20.0, -115.0));

        let bottom = place_label(Point::new(0.0, 100.0), c, SIZE, 5.0, Vec2::ZERO, 0.5);
        assert_eq!(bottom.origin, Point::new(-20.0, 105.0));

        let right = place_label(Point::new(100.0, 0.0), c, SIZE, 5.0, Vec2::ZERO, 0.5);
        assert_eq!(right.origin, Point::new(105.0, -5.0));

        let left = place_label(Point::new(-100.0, 0.0), c, SIZE, 5.0, Vec2::ZERO, 0.5);
        assert_eq!(left.origin, Point::new(-145.0, -5.0));
    }

    #[test]
    fn offset_is_applied_after_placement() {
        let placed = place_label(
            Point::new(100.0, 0.0),
            Point::ORIGIN,
            SIZE,
            5.0,
            Vec2::new(3.0, -2.0),
            0.5,
        );
        assert_eq!(placed.quadrant, LabelQuadrant::Right);
        assert_eq!(placed.origin, Point::new(108.0, -7.0));
        assert_eq!(placed.rect(), Rect::new(108.0, -7.0, 148.0, 3.0));
    }

    #[test]
    fn forced_quadrant_ignores_vertex_position() {
        // Close to the vertical line, but kept on the side chosen earlier.
        let vertex = Point::new(0.5, -80.0);
        assert_eq!(
            LabelQuadrant::classify(vertex, Point::ORIGIN, 1.0),
            LabelQuadrant::Top
        );
        let placed = place_label_in(LabelQuadrant::Left, vertex, SIZE, 5.0, Vec2::ZERO);
        assert_eq!(placed.quadrant, LabelQuadrant::Left);
        assert_eq!(placed.origin, Point::new(-44.5, -85.0));
    }
}
