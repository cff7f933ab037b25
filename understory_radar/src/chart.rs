// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart surface: configuration, draw passes, and animation entry points.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect};

use crate::animation::{
    AnimationKind, PathAnimator, Sequencer, SequencerState, SeriesLayer, StepOutcome, Ticket,
};
use crate::canvas::{Canvas, TextMeasurer};
use crate::draw::draw_layout;
use crate::error::{AnimationError, StyleError};
use crate::layout::ChartLayout;
use crate::model::{Parameter, Series};
use crate::style::RadarStyle;
use crate::timeline::RadarTimeline;

/// A radar chart: axes, series, style, and reveal animation state.
///
/// The chart is retained-mode data driven by an immediate-mode draw pass:
/// every call to [`RadarChart::draw`] recomputes the layout for the given
/// container and re-emits every op. Mutations only mark the chart dirty
/// (see [`RadarChart::needs_redraw`]); the host decides when to draw.
#[derive(Clone, Debug)]
pub struct RadarChart {
    parameters: Vec<Parameter>,
    series: Vec<Series>,
    style: RadarStyle,
    sequencer: Sequencer,
    layout: Option<ChartLayout>,
    needs_redraw: bool,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            parameters: Vec::new(),
            series: Vec::new(),
            style: RadarStyle::default(),
            sequencer: Sequencer::default(),
            layout: None,
            needs_redraw: true,
        }
    }
}

impl RadarChart {
    /// Creates an empty chart with a validated style.
    pub fn new(style: RadarStyle) -> Result<Self, StyleError> {
        style.validate()?;
        Ok(Self {
            style,
            ..Self::default()
        })
    }

    /// Axes in drawing order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Replaces every axis. Cancels a running animation.
    pub fn set_parameters(&mut self, parameters: Vec<Parameter>) {
        self.cancel_animation();
        self.parameters = parameters;
        self.needs_redraw = true;
    }

    /// Appends an axis. Cancels a running animation.
    pub fn push_parameter(&mut self, parameter: Parameter) {
        self.cancel_animation();
        self.parameters.push(parameter);
        self.needs_redraw = true;
    }

    /// Series in drawing order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Appends a series and returns its index.
    ///
    /// A series pushed while an animation runs is drawn statically and does
    /// not join that animation.
    pub fn push_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.sequencer.push_layer();
        self.needs_redraw = true;
        self.series.len() - 1
    }

    /// Removes the series at `index`. Cancels a running animation.
    pub fn remove_series(&mut self, index: usize) -> Option<Series> {
        if index >= self.series.len() {
            return None;
        }
        self.cancel_animation();
        self.sequencer.remove_layer(index);
        self.needs_redraw = true;
        Some(self.series.remove(index))
    }

    /// Replaces the values of the series at `index`.
    ///
    /// Returns `false` if there is no such series.
    pub fn set_series_values(&mut self, index: usize, values: Vec<f64>) -> bool {
        let Some(series) = self.series.get_mut(index) else {
            return false;
        };
        series.values = values;
        self.needs_redraw = true;
        true
    }

    /// Current appearance.
    #[must_use]
    pub fn style(&self) -> &RadarStyle {
        &self.style
    }

    /// Replaces the appearance after validating it.
    pub fn set_style(&mut self, style: RadarStyle) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        self.needs_redraw = true;
        Ok(())
    }

    /// Layout from the most recent draw pass.
    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    /// Returns `true` if anything changed since the last draw.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Forces the next [`RadarChart::needs_redraw`] to report `true`.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Lays the chart out inside `bounds` and emits it to `canvas`.
    ///
    /// The resulting layout is kept for the animation sequencer and returned.
    pub fn draw(
        &mut self,
        bounds: Rect,
        canvas: &mut dyn Canvas,
        measurer: &dyn TextMeasurer,
    ) -> &ChartLayout {
        let layout = ChartLayout::compute(
            bounds,
            &self.parameters,
            &self.series,
            &self.style,
            measurer,
        );
        draw_layout(
            canvas,
            &layout,
            &self.parameters,
            &self.series,
            self.sequencer.layers(),
            &self.style,
        );
        self.needs_redraw = false;
        self.layout.insert(layout)
    }

    /// Whether a reveal animation is running.
    #[must_use]
    pub fn animation_state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Animation bookkeeping, parallel to [`RadarChart::series`].
    #[must_use]
    pub fn layers(&self) -> &[SeriesLayer] {
        self.sequencer.layers()
    }

    /// Starts a reveal animation towards the vertices of the last draw pass.
    ///
    /// `duration` is per series for [`AnimationKind::ScaleOneByOne`], per
    /// vertex for [`AnimationKind::ParameterByParameter`], and for the whole
    /// reveal otherwise.
    pub fn start_animation(
        &mut self,
        kind: AnimationKind,
        duration: Duration,
        animator: &mut dyn PathAnimator,
    ) -> Result<(), AnimationError> {
        let layout = self.layout.as_ref().ok_or(AnimationError::NotLaidOut)?;
        self.sequencer
            .start(kind, duration, self.style.easing, layout, animator)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Reports that the transition carrying `ticket` has completed.
    ///
    /// Follow-up transitions, if any, are requested from `animator` before
    /// this returns.
    pub fn finish_transition(
        &mut self,
        ticket: Ticket,
        animator: &mut dyn PathAnimator,
    ) -> StepOutcome {
        let Some(layout) = self.layout.as_ref() else {
            return StepOutcome::Ignored;
        };
        let outcome = self.sequencer.finish(ticket, layout, animator);
        if outcome != StepOutcome::Ignored {
            self.needs_redraw = true;
        }
        outcome
    }

    /// Sets the in-flight polygon of the transition carrying `ticket`.
    ///
    /// Returns `false` and changes nothing if the ticket is stale.
    pub fn present(&mut self, ticket: Ticket, points: Vec<Point>) -> bool {
        let accepted = self.sequencer.present(ticket, points);
        self.needs_redraw |= accepted;
        accepted
    }

    /// Stops any running animation and shows every series at its final vertices.
    ///
    /// Returns `true` if an animation was running. Transitions still queued
    /// with the host become stale.
    pub fn cancel_animation(&mut self) -> bool {
        let cancelled = self.sequencer.cancel();
        self.needs_redraw |= cancelled;
        cancelled
    }

    /// Advances `timeline` by `dt`, presents every sampled transition, then
    /// reports the completed ones.
    ///
    /// Follow-up steps are back-dated by the time left over in the frame, so a
    /// chain of steps keeps its total duration. A step shorter than that
    /// leftover completes on the next call.
    ///
    /// Returns the outcome of each completion, in the order they finished.
    pub fn advance(&mut self, timeline: &mut RadarTimeline, dt: Duration) -> Vec<StepOutcome> {
        let mut frames = Vec::new();
        let finished = timeline.step(dt, |sample| {
            frames.push((sample.payload.ticket, sample.payload.sample(sample.progress)));
        });
        for (ticket, points) in frames {
            self.present(ticket, points);
        }
        let outcomes = finished
            .into_iter()
            .map(|done| {
                timeline.set_carry(done.overshoot);
                self.finish_transition(done.payload.ticket, timeline)
            })
            .collect();
        timeline.set_carry(Duration::ZERO);
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;
    use peniko::Color;

    use crate::canvas::{DrawOp, Paint, TextStyle};
    use crate::decoration::Decoration;
    use crate::fit::FitStrategy;
    use crate::model::FillMode;

    struct Blocks;

    impl TextMeasurer for Blocks {
        fn measure(&self, text: &str, style: &TextStyle) -> Size {
            Size::new(text.len() as f64 * style.font_size * 0.5, style.font_size)
        }
    }

    fn chart(axes: usize) -> RadarChart {
        let style = RadarStyle::default()
            .with_margin(10.0)
            .with_fit(FitStrategy::Fixed);
        let mut chart = RadarChart::new(style).unwrap();
        chart.set_parameters((0..axes).map(|i| Parameter::new(alloc::format!("p{i}"))).collect());
        chart
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

    #[test]
    fn empty_chart_draws_only_background() {
        let mut chart = RadarChart::new(
            RadarStyle::default().with_background(Color::from_rgba8(1, 2, 3, 255)),
        )
        .unwrap();
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], DrawOp::FillRect { rect, .. } if rect == BOUNDS));
    }

    #[test]
    fn draw_order_is_outline_rings_labels_series() {
        let mut chart = chart(5);
        chart.push_series(
            Series::new(vec![0.5; 5])
                .with_fill(FillMode::Solid(Color::WHITE))
                .with_stroke(Color::BLACK, 2.0)
                .with_decoration(Decoration::Circle(3.0)),
        );
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);

        let kinds: Vec<&str> = ops
            .iter()
            .map(|op| match op {
                DrawOp::FillRect { .. } => "rect",
                DrawOp::FillPath { .. } => "fill",
                DrawOp::StrokePath { .. } => "stroke",
                DrawOp::DrawText { .. } => "text",
            })
            .collect();
        let mut expected = vec!["fill", "stroke", "stroke", "stroke", "stroke"];
        expected.extend(["text"; 5]);
        expected.extend(["fill", "stroke"]);
        expected.extend(["fill"; 5]);
        assert_eq!(kinds, expected);
        assert!(!chart.needs_redraw());
    }

    #[test]
    fn mutations_mark_the_chart_dirty() {
        let mut chart = chart(3);
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);
        assert!(!chart.needs_redraw());

        let index = chart.push_series(Series::new(vec![1.0, 1.0, 1.0]));
        assert!(chart.needs_redraw());
        chart.draw(BOUNDS, &mut ops, &Blocks);

        assert!(chart.set_series_values(index, vec![0.5]));
        assert!(chart.needs_redraw());
        assert!(!chart.set_series_values(7, vec![0.5]));
        assert!(chart.remove_series(index).is_some());
        assert!(chart.remove_series(index).is_none());
        assert!(chart.layers().is_empty());
    }

    #[test]
    fn invalid_style_is_rejected_and_kept_out() {
        let mut chart = chart(3);
        assert_eq!(
            chart.set_style(RadarStyle::default().with_max_value(-1.0)),
            Err(StyleError::InvalidMaxValue)
        );
        assert_eq!(chart.style().max_value, 1.0);
    }

    #[test]
    fn gradient_fill_spans_the_chart_circle() {
        let mut chart = chart(4);
        let top = Color::from_rgba8(255, 0, 0, 255);
        let bottom = Color::from_rgba8(0, 0, 255, 255);
        chart.push_series(Series::new(vec![1.0; 4]).with_fill(FillMode::Gradient {
            start: top,
            end: bottom,
        }));
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);
        let gradient = ops.iter().find_map(|op| match op {
            DrawOp::FillPath {
                paint: paint @ Paint::LinearGradient { .. },
                ..
            } => Some(*paint),
            _ => None,
        });
        assert_eq!(
            gradient,
            Some(Paint::LinearGradient {
                start: Point::new(100.0, 10.0),
                end: Point::new(100.0, 190.0),
                start_color: top,
                end_color: bottom,
            })
        );
    }

    #[test]
    fn animation_needs_a_layout() {
        let mut chart = chart(3);
        chart.push_series(Series::new(vec![1.0; 3]));
        let mut timeline = RadarTimeline::new();
        assert_eq!(
            chart.start_animation(
                AnimationKind::ScaleAll,
                Duration::from_millis(10),
                &mut timeline
            ),
            Err(AnimationError::NotLaidOut)
        );
    }

    #[test]
    fn timeline_drives_scale_all_to_completion() {
        let mut chart = chart(3);
        chart.push_series(Series::new(vec![1.0; 3]).with_stroke(Color::BLACK, 1.0));
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);

        let mut timeline = RadarTimeline::new();
        chart
            .start_animation(
                AnimationKind::ScaleAll,
                Duration::from_millis(100),
                &mut timeline,
            )
            .unwrap();
        assert_eq!(timeline.len(), 1);

        let outcomes = chart.advance(&mut timeline, Duration::from_millis(50));
        assert!(outcomes.is_empty());
        let center = chart.layout().unwrap().center;
        let presented = chart.layers()[0].presentation().unwrap();
        let target = chart.layout().unwrap().series[0].vertices[0];
        assert!((presented[0] - center).hypot() > 0.0);
        assert!((presented[0] - target).hypot() > 0.0);

        let outcomes = chart.advance(&mut timeline, Duration::from_millis(50));
        assert_eq!(outcomes, vec![StepOutcome::Finished]);
        assert_eq!(chart.animation_state(), SequencerState::Idle);
        assert!(chart.layers()[0].presentation().is_none());
        assert!(timeline.is_empty());
    }

    #[test]
    fn structural_edits_cancel_animation() {
        let mut chart = chart(3);
        chart.push_series(Series::new(vec![1.0; 3]));
        let mut ops: Vec<DrawOp> = Vec::new();
        chart.draw(BOUNDS, &mut ops, &Blocks);
        let mut timeline = RadarTimeline::new();
        chart
            .start_animation(
                AnimationKind::ScaleOneByOne,
                Duration::from_millis(100),
                &mut timeline,
            )
            .unwrap();
        chart.push_parameter(Parameter::new("extra"));
        assert_eq!(chart.animation_state(), SequencerState::Idle);
        let outcomes = chart.advance(&mut timeline, Duration::from_millis(100));
        assert_eq!(outcomes, vec![StepOutcome::Ignored]);
    }
}
