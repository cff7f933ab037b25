// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_radar_svg --heading-base-level=0

//! SVG export canvas for Understory Radar.
//!
//! [`SvgCanvas`] implements [`Canvas`] by recording draw ops and can export
//! them as a standalone SVG document.
//!
//! This is intended for inspection, demos, and snapshot-style tests rather
//! than pixel-exact rendering:
//! - Text is emitted as `<text>` elements with a hanging baseline, so the
//!   viewer's font stack decides the final glyph metrics.
//! - Linear gradients are emitted as `<linearGradient>` definitions in user
//!   space, one per op.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_radar::{Parameter, RadarChart, RadarStyle, Series};
//! use understory_radar_ref::MonospaceMeasurer;
//! use understory_radar_svg::SvgCanvas;
//!
//! let mut chart = RadarChart::new(RadarStyle::default()).unwrap();
//! chart.set_parameters(vec![Parameter::new("A"), Parameter::new("B"), Parameter::new("C")]);
//! chart.push_series(Series::new([0.5, 1.0, 0.75]));
//!
//! let mut canvas = SvgCanvas::new();
//! chart.draw(Rect::new(0.0, 0.0, 200.0, 200.0), &mut canvas, &MonospaceMeasurer::default());
//! let svg = canvas.to_svg(200, 200);
//! assert!(svg.starts_with("<svg"));
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{BezPath, Cap, Join, PathEl, Stroke};
use peniko::Color;
use understory_radar::{Canvas, DrawOp, Paint, TextStyle};

/// Line height used to space the lines of multi-line labels.
const LINE_HEIGHT_EM: f32 = 1.2;

/// A recording SVG canvas.
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    ops: Vec<DrawOp>,
}

impl SvgCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the recorded ops.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Returns the recorded ops.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Export the currently recorded ops as an SVG document.
    ///
    /// `width`/`height` are used both as the SVG `width`/`height` attributes and to set
    /// `viewBox="0 0 width height"`.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        render_svg_document(width, height, &self.ops)
    }
}

impl Canvas for SvgCanvas {
    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

#[derive(Clone, Copy)]
enum PaintKind {
    Fill,
    Stroke,
}

fn render_svg_document(width: u32, height: u32, ops: &[DrawOp]) -> String {
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_counter: u64 = 0;

    for op in ops {
        match op {
            DrawOp::FillRect { rect, paint } => {
                let style = paint_attrs(&mut defs, &mut gradient_counter, *paint, PaintKind::Fill);
                let _ = writeln!(
                    body,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{style}/>",
                    fmt_f64(rect.x0),
                    fmt_f64(rect.y0),
                    fmt_f64(rect.width()),
                    fmt_f64(rect.height()),
                );
            }
            DrawOp::FillPath { path, paint } => {
                let style = paint_attrs(&mut defs, &mut gradient_counter, *paint, PaintKind::Fill);
                let _ = writeln!(body, "  <path d=\"{}\"{style}/>", bez_path_to_svg_d(path));
            }
            DrawOp::StrokePath {
                path,
                paint,
                stroke,
            } => {
                let mut style =
                    paint_attrs(&mut defs, &mut gradient_counter, *paint, PaintKind::Stroke);
                style.push_str(&stroke_attrs(stroke));
                let _ = writeln!(body, "  <path d=\"{}\"{style}/>", bez_path_to_svg_d(path));
            }
            DrawOp::DrawText {
                text,
                origin,
                style,
                paint,
            } => {
                let paint = paint_attrs(&mut defs, &mut gradient_counter, *paint, PaintKind::Fill);
                let _ = write!(
                    body,
                    "  <text x=\"{}\" y=\"{}\"{} dominant-baseline=\"hanging\"{paint}>",
                    fmt_f64(origin.x),
                    fmt_f64(origin.y),
                    font_attrs(style),
                );
                write_text_lines(&mut body, text, origin.x);
                body.push_str("</text>\n");
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    if !defs.is_empty() {
        out.push_str("  <defs>\n");
        out.push_str(&defs);
        out.push_str("  </defs>\n");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn paint_attrs(defs: &mut String, counter: &mut u64, paint: Paint, kind: PaintKind) -> String {
    let attr = match kind {
        PaintKind::Fill => "fill",
        PaintKind::Stroke => "stroke",
    };
    let mut out = String::new();
    match kind {
        PaintKind::Fill => out.push_str(" stroke=\"none\""),
        PaintKind::Stroke => out.push_str(" fill=\"none\""),
    }
    match paint {
        Paint::Solid(color) => {
            let (rgb, a) = color_to_svg(color);
            let _ = write!(out, " {attr}=\"{rgb}\"");
            if a < 1.0 {
                let _ = write!(out, " {attr}-opacity=\"{}\"", fmt_f32(a));
            }
        }
        Paint::LinearGradient {
            start,
            end,
            start_color,
            end_color,
        } => {
            *counter += 1;
            let id = format!("grad{counter}");
            let _ = writeln!(
                defs,
                "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                fmt_f64(start.x),
                fmt_f64(start.y),
                fmt_f64(end.x),
                fmt_f64(end.y),
            );
            write_stop(defs, "0", start_color);
            write_stop(defs, "1", end_color);
            defs.push_str("    </linearGradient>\n");
            let _ = write!(out, " {attr}=\"url(#{id})\"");
        }
    }
    out
}

fn write_stop(defs: &mut String, offset: &str, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(defs, "      <stop offset=\"{offset}\" stop-color=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(defs, " stop-opacity=\"{}\"", fmt_f32(a));
    }
    defs.push_str("/>\n");
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut out = String::new();
    let _ = write!(out, " stroke-width=\"{}\"", fmt_f64(stroke.width));
    // SVG has a single linecap, while kurbo can specify start/end caps.
    // Use the start cap when they differ.
    let _ = write!(
        out,
        " stroke-linecap=\"{}\"",
        stroke_cap_svg(stroke.start_cap)
    );
    let _ = write!(out, " stroke-linejoin=\"{}\"", stroke_join_svg(stroke.join));
    if stroke.miter_limit.is_finite() && stroke.join == Join::Miter {
        let _ = write!(out, " stroke-miterlimit=\"{}\"", fmt_f64(stroke.miter_limit));
    }
    if !stroke.dash_pattern.is_empty() {
        out.push_str(" stroke-dasharray=\"");
        for (i, v) in stroke.dash_pattern.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&fmt_f64(*v));
        }
        out.push('"');
    }
    if stroke.dash_offset != 0.0 {
        let _ = write!(out, " stroke-dashoffset=\"{}\"", fmt_f64(stroke.dash_offset));
    }
    out
}

fn font_attrs(style: &TextStyle) -> String {
    let mut out = format!(" font-size=\"{}\"", fmt_f64(style.font_size));
    if let Some(family) = &style.font_family {
        let _ = write!(out, " font-family=\"{}\"", escape_xml(family));
    }
    out
}

fn write_text_lines(out: &mut String, text: &str, x: f64) {
    if !text.contains('\n') {
        out.push_str(&escape_xml(text));
        return;
    }
    for (i, line) in text.split('\n').enumerate() {
        let dy = if i == 0 { 0.0 } else { LINE_HEIGHT_EM };
        let _ = write!(
            out,
            "<tspan x=\"{}\" dy=\"{}em\">{}</tspan>",
            fmt_f64(x),
            fmt_f32(dy),
            escape_xml(line)
        );
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y),
                    fmt_f64(p3.x),
                    fmt_f64(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn stroke_join_svg(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "SVG uses f32-like scalar formatting"
)]
fn fmt_f64(v: f64) -> String {
    fmt_f32(v as f32)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable enough for diffing.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
