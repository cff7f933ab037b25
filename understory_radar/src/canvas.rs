// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface IR and host traits.
//!
//! The chart does not rasterize anything itself. A draw pass is expressed as
//! a sequence of [`DrawOp`]s handed to a host [`Canvas`], in painter's order.
//! Text is measured through a host [`TextMeasurer`] so that label layout can
//! use the same metrics the host will render with.
//!
//! Ops carry their geometry and paint inline rather than referencing
//! resources by handle: a radar chart emits a few dozen ops per frame and
//! rebuilds all of them on every invalidation, so there is nothing to reuse.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Size, Stroke};
use peniko::Color;

/// Font selection and size used to measure and draw a run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name, or `None` for the host default.
    pub font_family: Option<String>,
    /// Font size in the canvas coordinate space.
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12.0,
        }
    }
}

impl TextStyle {
    /// Creates a style for the host default family at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_family: None,
            font_size,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

/// Paint applied to a fill, stroke, or text op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// A single color.
    Solid(Color),
    /// A two-stop linear gradient in canvas coordinates.
    LinearGradient {
        /// Point at which `start_color` is fully applied.
        start: Point,
        /// Point at which `end_color` is fully applied.
        end: Point,
        /// Color at `start`.
        start_color: Color,
        /// Color at `end`.
        end_color: Color,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A single drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Paint used for the fill.
        paint: Paint,
    },
    /// Fill the interior of a closed path (non-zero rule).
    FillPath {
        /// Path to fill.
        path: BezPath,
        /// Paint used for the fill.
        paint: Paint,
    },
    /// Stroke the outline of a path.
    StrokePath {
        /// Path to stroke.
        path: BezPath,
        /// Paint used for the stroke.
        paint: Paint,
        /// Stroke width, joins, caps, and dashes.
        stroke: Stroke,
    },
    /// Draw a run of text with its top-left corner at `origin`.
    DrawText {
        /// Text to draw.
        text: String,
        /// Top-left corner of the text block.
        origin: Point,
        /// Font used for the text; the same style the text was measured with.
        style: TextStyle,
        /// Paint used for the glyphs.
        paint: Paint,
    },
}

/// A host drawing surface.
pub trait Canvas {
    /// Applies one draw op.
    fn draw(&mut self, op: DrawOp);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}

impl Canvas for Vec<DrawOp> {
    fn draw(&mut self, op: DrawOp) {
        self.push(op);
    }
}

/// Host text metrics.
pub trait TextMeasurer {
    /// Returns the size of the block `text` occupies when drawn with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> Size;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        (**self).measure(text, style)
    }
}
