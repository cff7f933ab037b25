// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration data: axes and series.
//!
//! These types are plain data. Everything derived from them during a draw
//! pass (vertex positions, label origins) lives in
//! [`ChartLayout`](crate::ChartLayout) instead.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use peniko::Color;

use crate::decoration::Decoration;

/// One spoke of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    /// Label drawn next to the outer vertex.
    pub name: String,
    /// Manual nudge applied to the label after automatic placement.
    pub text_offset: Vec2,
}

impl Parameter {
    /// Creates an axis with no label offset.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text_offset: Vec2::ZERO,
        }
    }

    /// Sets the label offset.
    #[must_use]
    pub fn with_text_offset(mut self, offset: Vec2) -> Self {
        self.text_offset = offset;
        self
    }
}

/// How the interior of a series polygon is painted.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FillMode {
    /// A single color.
    Solid(Color),
    /// A vertical gradient spanning the chart circle, `start` at the top.
    Gradient {
        /// Color at the top of the chart circle.
        start: Color,
        /// Color at the bottom of the chart circle.
        end: Color,
    },
    /// No fill; only the stroke and decorations are drawn.
    #[default]
    None,
}

/// One data polygon plotted across all axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Optional display name.
    pub name: Option<String>,
    /// Interior paint.
    pub fill: FillMode,
    /// Outline color; no outline is drawn when `None`.
    pub stroke_color: Option<Color>,
    /// Outline width.
    pub stroke_width: f64,
    /// Value per axis, as a fraction of the chart's max value.
    ///
    /// Indexed in parallel with the chart parameters. Missing entries count
    /// as zero and surplus entries are ignored.
    pub values: Vec<f64>,
    /// Marker drawn on every vertex.
    pub decoration: Option<Decoration>,
    /// Marker color; see [`Series::marker_color`] for the fallback order.
    pub decoration_color: Option<Color>,
}

impl Series {
    /// Creates an unfilled, unstroked series with the given values.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: None,
            fill: FillMode::None,
            stroke_color: None,
            stroke_width: 1.0,
            values: values.into(),
            decoration: None,
            decoration_color: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the interior paint.
    #[must_use]
    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the outline color and width.
    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = width;
        self
    }

    /// Sets the vertex marker.
    #[must_use]
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Sets the vertex marker color.
    #[must_use]
    pub fn with_decoration_color(mut self, color: Color) -> Self {
        self.decoration_color = Some(color);
        self
    }

    /// Value for axis `index`, or zero when the series has no entry for it.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    /// Color used for vertex markers.
    ///
    /// Falls back to the stroke color, then to a solid fill color.
    #[must_use]
    pub fn marker_color(&self) -> Option<Color> {
        self.decoration_color
            .or(self.stroke_color)
            .or(match self.fill {
                FillMode::Solid(color) => Some(color),
                FillMode::Gradient { .. } | FillMode::None => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_read_as_zero() {
        let series = Series::new([0.5, 0.25]);
        assert_eq!(series.value(0), 0.5);
        assert_eq!(series.value(1), 0.25);
        assert_eq!(series.value(2), 0.0);
    }

    #[test]
    fn marker_color_fallbacks() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let green = Color::from_rgba8(0, 255, 0, 255);

        let plain = Series::new([1.0]);
        assert_eq!(plain.marker_color(), None);

        let filled = Series::new([1.0]).with_fill(FillMode::Solid(green));
        assert_eq!(filled.marker_color(), Some(green));

        let stroked = filled.clone().with_stroke(blue, 2.0);
        assert_eq!(stroked.marker_color(), Some(blue));

        let explicit = stroked.with_decoration_color(red);
        assert_eq!(explicit.marker_color(), Some(red));
    }
}
