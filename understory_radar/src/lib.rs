// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_radar --heading-base-level=0

//! Understory Radar: backend-agnostic radar (spider) charts.
//!
//! A radar chart plots several series of values over `N` axes arranged as
//! the spokes of a regular `N`-gon. This crate computes the geometry, lays
//! out the axis labels, shrinks the chart so those labels stay inside the
//! container, emits drawing commands, and sequences series reveal
//! animations. It does not rasterize, shape text, or keep time: hosts supply
//! those through three small traits.
//!
//! # Host traits
//!
//! - [`Canvas`] receives [`DrawOp`]s in painter's order.
//! - [`TextMeasurer`] reports the size of a label for a given [`TextStyle`].
//! - [`PathAnimator`] runs from/to polygon transitions and reports completion
//!   through [`RadarChart::finish_transition`]. Hosts that drive a frame
//!   clock can use [`RadarTimeline`] and [`RadarChart::advance`] instead.
//!
//! # Draw pass
//!
//! [`RadarChart::draw`] computes a [`ChartLayout`] for the container and
//! emits, in order: the optional background, the outer polygon (fill then
//! stroke), the gradation rings, the optional spokes, the axis labels, and
//! finally each series (fill, stroke, then one marker per vertex).
//!
//! The radius starts at `min(width, height) / 2 - margin`. With
//! [`FitStrategy::AutoFit`] every label is placed at that radius first; any
//! label crossing a container edge shrinks the radius along its own ray until
//! it touches that edge, and the smallest such radius wins. See
//! [`resolve_radius`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use peniko::Color;
//! use understory_radar::{
//!     DrawOp, FillMode, Parameter, RadarChart, RadarStyle, Series, TextMeasurer, TextStyle,
//! };
//!
//! struct Mono;
//! impl TextMeasurer for Mono {
//!     fn measure(&self, text: &str, style: &TextStyle) -> Size {
//!         Size::new(text.chars().count() as f64 * style.font_size * 0.6, style.font_size)
//!     }
//! }
//!
//! let mut chart = RadarChart::new(RadarStyle::default()).unwrap();
//! chart.set_parameters(
//!     ["Speed", "Power", "Range", "Armor", "Cost"]
//!         .into_iter()
//!         .map(Parameter::new)
//!         .collect(),
//! );
//! chart.push_series(
//!     Series::new([0.8, 0.4, 0.6, 0.3, 0.9])
//!         .with_fill(FillMode::Solid(Color::from_rgba8(0x33, 0x66, 0xcc, 0x80)))
//!         .with_stroke(Color::from_rgba8(0x33, 0x66, 0xcc, 0xff), 2.0),
//! );
//!
//! let mut ops: Vec<DrawOp> = Vec::new();
//! let layout = chart.draw(Rect::new(0.0, 0.0, 320.0, 240.0), &mut ops, &Mono);
//! assert_eq!(layout.axes.len(), 5);
//! assert!(layout.radius <= layout.naive_radius);
//! assert!(!ops.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature when
//! building without `std`.

#![no_std]

extern crate alloc;

pub mod animation;
mod canvas;
mod chart;
pub mod decoration;
mod draw;
mod error;
pub mod fit;
pub mod geometry;
pub mod label;
pub mod layout;
mod model;
mod style;
mod timeline;

pub use animation::{
    AnimationKind, AnimationType, PathAnimator, PathTransition, SequencerState, SeriesLayer,
    StepOutcome, Ticket,
};
pub use canvas::{Canvas, DrawOp, Paint, TextMeasurer, TextStyle};
pub use chart::RadarChart;
pub use decoration::{Decoration, decoration_path};
pub use draw::draw_layout;
pub use error::{AnimationError, StyleError};
pub use fit::{FitStrategy, resolve_radius};
pub use layout::{AxisLayout, ChartLayout, SeriesLayout};
pub use model::{FillMode, Parameter, Series};
pub use style::RadarStyle;
pub use timeline::RadarTimeline;

pub use understory_timing::Easing;
