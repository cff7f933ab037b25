// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_radar_ref --heading-base-level=0

//! Understory Radar Reference Host.
//!
//! This crate provides small, deterministic implementations of the
//! [`understory_radar`] host traits for **tests and debugging**:
//!
//! - [`RecordingCanvas`] records every [`DrawOp`] together with running
//!   per-kind counts, so tests can assert on draw order.
//! - [`MonospaceMeasurer`] measures text as if every character had the same
//!   advance, which makes label sizes predictable without a font stack.
//! - [`ManualAnimator`] queues [`PathTransition`]s and lets the test decide
//!   when each one completes.
//!
//! It does **not** rasterize anything.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Size};
use understory_radar::{Canvas, DrawOp, PathAnimator, PathTransition, TextMeasurer, TextStyle};

/// Running totals of each kind of op applied so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Number of [`DrawOp::FillRect`] ops.
    pub rects: usize,
    /// Number of [`DrawOp::FillPath`] ops.
    pub fills: usize,
    /// Number of [`DrawOp::StrokePath`] ops.
    pub strokes: usize,
    /// Number of [`DrawOp::DrawText`] ops.
    pub texts: usize,
}

impl OpCounts {
    /// Total number of ops.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rects + self.fills + self.strokes + self.texts
    }

    fn count(&mut self, op: &DrawOp) {
        match op {
            DrawOp::FillRect { .. } => self.rects += 1,
            DrawOp::FillPath { .. } => self.fills += 1,
            DrawOp::StrokePath { .. } => self.strokes += 1,
            DrawOp::DrawText { .. } => self.texts += 1,
        }
    }
}

/// Event recorded by [`RecordingCanvas`].
#[derive(Clone, Debug)]
pub struct Event {
    /// Draw op that was applied.
    pub op: DrawOp,
    /// Counts after applying `op`.
    pub counts: OpCounts,
}

/// Canvas that records ops instead of drawing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    events: Vec<Event>,
    counts: OpCounts,
}

impl RecordingCanvas {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the recorded ops in the order they were applied.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.events.iter().map(|e| &e.op)
    }

    /// Counts over everything recorded since the last clear.
    #[must_use]
    pub fn counts(&self) -> OpCounts {
        self.counts
    }

    /// Text and origin of every text op, in order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.ops().filter_map(|op| match op {
            DrawOp::DrawText { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    /// Every filled path, in order.
    pub fn fills(&self) -> impl Iterator<Item = &BezPath> {
        self.ops().filter_map(|op| match op {
            DrawOp::FillPath { path, .. } => Some(path),
            _ => None,
        })
    }

    /// Every stroked path, in order.
    pub fn strokes(&self) -> impl Iterator<Item = &BezPath> {
        self.ops().filter_map(|op| match op {
            DrawOp::StrokePath { path, .. } => Some(path),
            _ => None,
        })
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
        self.counts = OpCounts::default();
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, op: DrawOp) {
        self.counts.count(&op);
        self.events.push(Event {
            op,
            counts: self.counts,
        });
    }
}

/// Measures text as a grid of equal-width characters.
///
/// Width is the longest line's character count times
/// `font_size * char_width_factor`; height is the line count times
/// `font_size * line_height_factor`. Lines are separated by `'\n'`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one character as a fraction of the font size.
    pub char_width_factor: f64,
    /// Line height as a fraction of the font size.
    pub line_height_factor: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            char_width_factor: 0.6,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let font_size = style.font_size.max(1.0);
        let (lines, max_chars) = text
            .split('\n')
            .fold((0_usize, 0_usize), |(lines, widest), line| {
                (lines + 1, widest.max(line.chars().count()))
            });
        Size::new(
            max_chars as f64 * font_size * self.char_width_factor,
            lines as f64 * font_size * self.line_height_factor,
        )
    }
}

/// Animator that holds transitions until the test completes them.
#[derive(Clone, Debug, Default)]
pub struct ManualAnimator {
    queue: VecDeque<PathTransition>,
    requested: usize,
}

impl ManualAnimator {
    /// Creates an empty animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions requested but not yet taken, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &PathTransition> {
        self.queue.iter()
    }

    /// Number of transitions requested since creation.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Removes and returns the oldest pending transition.
    pub fn pop(&mut self) -> Option<PathTransition> {
        self.queue.pop_front()
    }

    /// Removes and returns every pending transition.
    pub fn drain(&mut self) -> Vec<PathTransition> {
        self.queue.drain(..).collect()
    }
}

impl PathAnimator for ManualAnimator {
    fn animate(&mut self, transition: PathTransition) {
        self.requested += 1;
        self.queue.push_back(transition);
    }
}

/// Corner points of a polygonal path, in order, without the closing segment.
#[must_use]
pub fn path_points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Rect;
    use peniko::Color;
    use understory_radar::Paint;

    #[test]
    fn counts_track_each_kind() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw(DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            paint: Paint::Solid(Color::WHITE),
        });
        canvas.draw(DrawOp::FillPath {
            path: BezPath::new(),
            paint: Paint::Solid(Color::BLACK),
        });
        assert_eq!(canvas.events()[0].counts.rects, 1);
        assert_eq!(canvas.events()[0].counts.fills, 0);
        assert_eq!(canvas.counts().total(), 2);
        canvas.clear();
        assert_eq!(canvas.counts(), OpCounts::default());
        assert!(canvas.events().is_empty());
    }

    #[test]
    fn monospace_measures_longest_line() {
        let m = MonospaceMeasurer::default();
        let style = TextStyle::new(10.0);
        let one = m.measure("abcd", &style);
        assert!((one.width - 24.0).abs() < 1e-9);
        assert!((one.height - 12.0).abs() < 1e-9);
        let two = m.measure("ab\nabcdef", &style);
        assert!((two.width - 36.0).abs() < 1e-9);
        assert!((two.height - 24.0).abs() < 1e-9);
    }

    #[test]
    fn path_points_skip_close() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.line_to((1.0, 1.0));
        path.close_path();
        assert_eq!(
            path_points(&path),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0)
            ]
        );
    }
}
