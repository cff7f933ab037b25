// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emission of draw ops from a computed layout.

use kurbo::{BezPath, Point, Stroke};

use crate::animation::SeriesLayer;
use crate::canvas::{Canvas, DrawOp, Paint};
use crate::decoration::decoration_path;
use crate::geometry::polygon_path;
use crate::layout::ChartLayout;
use crate::model::{FillMode, Parameter, Series};
use crate::style::RadarStyle;

/// Emits the whole chart for `layout` in painter's order.
///
/// `layers` runs parallel to `series`; a missing layer draws the series at
/// its final vertices. Hidden layers are skipped, and layers with an
/// in-flight presentation are drawn with that polygon and without markers.
pub fn draw_layout(
    canvas: &mut dyn Canvas,
    layout: &ChartLayout,
    parameters: &[Parameter],
    series: &[Series],
    layers: &[SeriesLayer],
    style: &RadarStyle,
) {
    if let Some(color) = style.background_color {
        canvas.draw(DrawOp::FillRect {
            rect: layout.bounds,
            paint: Paint::Solid(color),
        });
    }
    if layout.is_empty() {
        return;
    }

    let outer = polygon_path(layout.outer_points());
    canvas.draw(DrawOp::FillPath {
        path: outer.clone(),
        paint: Paint::Solid(style.fill_color),
    });
    stroke(
        canvas,
        outer,
        Paint::Solid(style.outer_stroke_color),
        style.outer_stroke_width,
    );

    for &radius in &layout.gradation_radii {
        stroke(
            canvas,
            polygon_path(layout.ring_points(radius)),
            Paint::Solid(style.gradation_stroke_color),
            style.gradation_stroke_width,
        );
    }

    if let Some(color) = style.axis_stroke_color {
        for axis in &layout.axes {
            let mut spoke = BezPath::new();
            spoke.move_to(layout.center);
            spoke.line_to(axis.vertex.point);
            stroke(canvas, spoke, Paint::Solid(color), style.axis_stroke_width);
        }
    }

    for (parameter, axis) in parameters.iter().zip(&layout.axes) {
        canvas.draw(DrawOp::DrawText {
            text: parameter.name.clone(),
            origin: axis.label.origin,
            style: style.label_style.clone(),
            paint: Paint::Solid(style.label_color),
        });
    }

    for (index, (data, placed)) in series.iter().zip(&layout.series).enumerate() {
        let layer = layers.get(index);
        if layer.is_some_and(SeriesLayer::is_hidden) {
            continue;
        }
        let presentation = layer.and_then(SeriesLayer::presentation);
        let points = presentation.unwrap_or(placed.vertices.as_slice());
        if points.is_empty() {
            continue;
        }
        let path = polygon_path(points.iter().copied());
        if let Some(paint) = fill_paint(data.fill, layout) {
            canvas.draw(DrawOp::FillPath {
                path: path.clone(),
                paint,
            });
        }
        if let Some(color) = data.stroke_color {
            stroke(canvas, path, Paint::Solid(color), data.stroke_width);
        }
        if presentation.is_some() {
            continue;
        }
        if let Some(decoration) = data.decoration {
            let color = data.marker_color().unwrap_or(style.outer_stroke_color);
            for &vertex in points {
                canvas.draw(DrawOp::FillPath {
                    path: decoration_path(decoration, vertex),
                    paint: Paint::Solid(color),
                });
            }
        }
    }
}

/// Paint for a series interior; gradients run top to bottom across the chart circle.
fn fill_paint(fill: FillMode, layout: &ChartLayout) -> Option<Paint> {
    match fill {
        FillMode::Solid(color) => Some(Paint::Solid(color)),
        FillMode::Gradient { start, end } => Some(Paint::LinearGradient {
            start: Point::new(layout.center.x, layout.center.y - layout.radius),
            end: Point::new(layout.center.x, layout.center.y + layout.radius),
            start_color: start,
            end_color: end,
        }),
        FillMode::None => None,
    }
}

fn stroke(canvas: &mut dyn Canvas, path: BezPath, paint: Paint, width: f64) {
    if width > 0.0 {
        canvas.draw(DrawOp::StrokePath {
            path,
            paint,
            stroke: Stroke::new(width),
        });
    }
}
