// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-draw layout: radius, axis vertices, label boxes, and series polygons.
//!
//! [`ChartLayout::compute`] runs the two-pass fit. The first pass
//! ([`FitPass::AutoAdjust`]) places every label at the naive radius and asks
//! [`resolve_radius`] how far the chart has to shrink; the second
//! ([`FitPass::DrawText`]) places everything again at the resolved radius,
//! keeping the label sides chosen in the first pass.
//! With [`FitStrategy::Fixed`], or when nothing overflows, the first pass is
//! reused as is.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::canvas::TextMeasurer;
use crate::fit::{FitCandidate, FitPass, FitStrategy, resolve_radius};
use crate::geometry::{Vertex, gradation_radii, point_on_ray, polygon_vertex, scale_toward};
use crate::label::{LabelPlacement, LabelQuadrant, place_label, place_label_in};
use crate::model::{Parameter, Series};
use crate::style::RadarStyle;

/// One axis after layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    /// Outer polygon vertex for this axis.
    pub vertex: Vertex,
    /// Label box anchored at `vertex`.
    pub label: LabelPlacement,
}

/// One series after layout.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SeriesLayout {
    /// Final vertex per axis, in axis order.
    pub vertices: Vec<Point>,
}

/// Geometry of a whole chart for one container size.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    /// Container the chart was laid out in.
    pub bounds: Rect,
    /// Center of the chart circle.
    pub center: Point,
    /// Radius before label fitting.
    pub naive_radius: f64,
    /// Radius actually used.
    pub radius: f64,
    /// Axes in parameter order.
    pub axes: Vec<AxisLayout>,
    /// Radius of every gradation ring, innermost first.
    pub gradation_radii: Vec<f64>,
    /// Series in insertion order.
    pub series: Vec<SeriesLayout>,
}

impl ChartLayout {
    /// Lays out `parameters` and `series` inside `bounds`.
    #[must_use]
    pub fn compute(
        bounds: Rect,
        parameters: &[Parameter],
        series: &[Series],
        style: &RadarStyle,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let center = bounds.center();
        let naive_radius = naive_radius(bounds, style.margin);
        let sizes: Vec<Size> = parameters
            .iter()
            .map(|p| measurer.measure(&p.name, &style.label_style))
            .collect();

        let mut radius = naive_radius;
        let mut axes = place_axes(
            FitPass::AutoAdjust,
            center,
            radius,
            parameters,
            &sizes,
            None,
            style,
        );
        if style.fit == FitStrategy::AutoFit && !axes.is_empty() {
            let candidates: Vec<FitCandidate> = axes
                .iter()
                .map(|a| FitCandidate {
                    vertex: a.vertex,
                    label: a.label.rect(),
                })
                .collect();
            radius = resolve_radius(bounds, center, naive_radius, &candidates);
            if radius != naive_radius {
                // Sides stay as measured, or a label could flip onto an edge
                // the solver never checked.
                let quadrants: Vec<LabelQuadrant> = axes.iter().map(|a| a.label.quadrant).collect();
                axes = place_axes(
                    FitPass::DrawText,
                    center,
                    radius,
                    parameters,
                    &sizes,
                    Some(&quadrants),
                    style,
                );
            }
        }

        let gradation_radii = if axes.is_empty() {
            Vec::new()
        } else {
            gradation_radii(radius, style.number_of_gradations)
        };
        let series = series
            .iter()
            .map(|s| SeriesLayout {
                vertices: series_vertices(center, &axes, s, style.max_value),
            })
            .collect();

        Self {
            bounds,
            center,
            naive_radius,
            radius,
            axes,
            gradation_radii,
            series,
        }
    }

    /// Returns `true` when there are no axes to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Outer polygon vertices in axis order.
    pub fn outer_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.axes.iter().map(|a| a.vertex.point)
    }

    /// Vertices of the gradation ring at `radius`, in axis order.
    pub fn ring_points(&self, radius: f64) -> impl Iterator<Item = Point> + '_ {
        self.axes
            .iter()
            .map(move |a| point_on_ray(self.center, radius, a.vertex.angle))
    }
}

/// Radius of the chart circle before label fitting.
#[must_use]
pub fn naive_radius(bounds: Rect, margin: f64) -> f64 {
    (bounds.width().min(bounds.height()) / 2.0 - margin).max(0.0)
}

fn place_axes(
    pass: FitPass,
    center: Point,
    radius: f64,
    parameters: &[Parameter],
    sizes: &[Size],
    quadrants: Option<&[LabelQuadrant]>,
    style: &RadarStyle,
) -> Vec<AxisLayout> {
    tracing::trace!(?pass, radius, axes = parameters.len(), "placing radar axes");
    let count = parameters.len();
    parameters
        .iter()
        .zip(sizes)
        .enumerate()
        .filter_map(|(i, (p, &size))| {
            let vertex = polygon_vertex(i, count, radius, center, style.start_angle)?;
            let label = match quadrants.and_then(|q| q.get(i)) {
                Some(&quadrant) => {
                    place_label_in(quadrant, vertex.point, size, style.text_margin, p.text_offset)
                }
                None => place_label(
                    vertex.point,
                    center,
                    size,
                    style.text_margin,
                    p.text_offset,
                    style.label_epsilon,
                ),
            };
            Some(AxisLayout { vertex, label })
        })
        .collect()
}

/// Places each value of `series` along its axis.
///
/// Values are divided by `max_value`; negative and non-finite values are
/// drawn at the center.
#[must_use]
pub fn series_vertices(
    center: Point,
    axes: &[AxisLayout],
    series: &Series,
    max_value: f64,
) -> Vec<Point> {
    axes.iter()
        .enumerate()
        .map(|(i, axis)| {
            let value = series.value(i);
            let fraction = if value >= 0.0 && value.is_finite() {
                value / max_value
            } else {
                tracing::warn!(axis = i, value, "radar value clamped to zero");
                0.0
            };
            scale_toward(center, axis.vertex.point, fraction)
        })
        .collect()
}
