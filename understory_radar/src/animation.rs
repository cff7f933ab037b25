// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series reveal animations.
//!
//! The sequencer never interpolates or keeps time itself. Every step is a
//! from/to [`PathTransition`] handed to a host [`PathAnimator`]; the host
//! reports completion back through
//! [`RadarChart::finish_transition`](crate::RadarChart::finish_transition),
//! which may schedule the next step. [`RadarTimeline`](crate::RadarTimeline)
//! is a ready-made animator for hosts that drive their own frame clock.
//!
//! ## Modes
//!
//! - [`AnimationKind::ScaleAll`]: every series grows from the center at once.
//! - [`AnimationKind::ScaleOneByOne`]: series grow from the center one after
//!   another, in insertion order; series that have not started yet are
//!   hidden.
//! - [`AnimationKind::ParameterByParameter`]: every series reveals one vertex
//!   per step. Step `k` moves from `partial(k)` to `partial(k + 1)`, where
//!   `partial(k)` has its first `k` vertices at their targets and the rest at
//!   the center.
//!
//! ## Tickets
//!
//! Each transition carries a [`Ticket`] naming its layer, its step, and the
//! generation of the animation that issued it. Starting or cancelling an
//! animation bumps the generation, so completions left over from an earlier
//! run are recognized and ignored.

use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use understory_timing::Easing;

use crate::error::AnimationError;
use crate::layout::ChartLayout;

/// Reveal animation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// All series grow from the center together.
    ScaleAll,
    /// Series grow from the center one after another.
    ScaleOneByOne,
    /// All series reveal one vertex per step.
    ParameterByParameter,
}

/// Animation assigned to a series layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnimationType {
    /// The layer is not animating.
    #[default]
    None,
    /// Part of a [`AnimationKind::ScaleAll`] run; the duration covers the whole reveal.
    ScaleAll(Duration),
    /// Part of a [`AnimationKind::ScaleOneByOne`] run; the duration is per series.
    ScaleOneByOne(Duration),
    /// Part of a [`AnimationKind::ParameterByParameter`] run; the duration is per vertex.
    ParameterByParameter(Duration),
}

impl AnimationType {
    /// Pairs `kind` with `duration`.
    #[must_use]
    pub fn new(kind: AnimationKind, duration: Duration) -> Self {
        match kind {
            AnimationKind::ScaleAll => Self::ScaleAll(duration),
            AnimationKind::ScaleOneByOne => Self::ScaleOneByOne(duration),
            AnimationKind::ParameterByParameter => Self::ParameterByParameter(duration),
        }
    }

    /// Returns the mode, or `None` when not animating.
    #[must_use]
    pub fn kind(self) -> Option<AnimationKind> {
        match self {
            Self::None => None,
            Self::ScaleAll(_) => Some(AnimationKind::ScaleAll),
            Self::ScaleOneByOne(_) => Some(AnimationKind::ScaleOneByOne),
            Self::ParameterByParameter(_) => Some(AnimationKind::ParameterByParameter),
        }
    }

    /// Returns the step duration, or `None` when not animating.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::None => None,
            Self::ScaleAll(d) | Self::ScaleOneByOne(d) | Self::ParameterByParameter(d) => Some(d),
        }
    }
}

/// Whether an animation is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SequencerState {
    /// No animation is running.
    #[default]
    Idle,
    /// An animation of the given mode is running.
    Animating(AnimationKind),
}

/// Animation bookkeeping for one series.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SeriesLayer {
    animation: AnimationType,
    last_animated_vertex: usize,
    hidden: bool,
    presentation: Option<Vec<Point>>,
}

impl SeriesLayer {
    /// Animation this layer is part of.
    #[must_use]
    pub fn animation(&self) -> AnimationType {
        self.animation
    }

    /// Number of vertices revealed so far by a parameter-by-parameter run.
    #[must_use]
    pub fn last_animated_vertex(&self) -> usize {
        self.last_animated_vertex
    }

    /// Whether the layer is waiting for its turn and must not be drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// In-flight polygon; `None` when the layer shows its final vertices.
    #[must_use]
    pub fn presentation(&self) -> Option<&[Point]> {
        self.presentation.as_deref()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn settle(&mut self) {
        self.animation = AnimationType::None;
        self.hidden = false;
        self.presentation = None;
    }
}

/// Identifies one transition issued by the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    layer: usize,
    step: usize,
}

impl Ticket {
    /// Index of the series layer being animated.
    #[must_use]
    pub fn layer(self) -> usize {
        self.layer
    }

    /// Vertex step for parameter-by-parameter runs; zero otherwise.
    #[must_use]
    pub fn step(self) -> usize {
        self.step
    }
}

/// One from/to path animation requested from the host.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTransition {
    /// Completion token to hand back to the chart.
    pub ticket: Ticket,
    /// Polygon at progress `0`.
    pub from: Vec<Point>,
    /// Polygon at progress `1`.
    pub to: Vec<Point>,
    /// Duration of this step.
    pub duration: Duration,
    /// Timing curve of this step.
    pub easing: Easing,
}

impl PathTransition {
    /// Index of the series layer being animated.
    #[must_use]
    pub fn layer(&self) -> usize {
        self.ticket.layer
    }

    /// Interpolates every vertex at eased `progress`.
    #[must_use]
    pub fn sample(&self, progress: f64) -> Vec<Point> {
        self.from
            .iter()
            .zip(&self.to)
            .map(|(a, b)| a.lerp(*b, progress))
            .collect()
    }
}

/// Host animation primitive.
pub trait PathAnimator {
    /// Starts animating a layer's path. The host must eventually report
    /// completion with the transition's ticket.
    fn animate(&mut self, transition: PathTransition);
}

impl<A: PathAnimator + ?Sized> PathAnimator for &mut A {
    fn animate(&mut self, transition: PathTransition) {
        (**self).animate(transition);
    }
}

/// Result of reporting a completed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// A follow-up transition was issued.
    Continued,
    /// The layer settled; other layers are still animating.
    LayerFinished,
    /// The whole animation completed and the sequencer is idle.
    Finished,
    /// The completion was stale or unexpected and changed nothing.
    Ignored,
}

/// Vertices `0..revealed` at their targets, the rest at `center`.
#[must_use]
pub fn partial_polygon(targets: &[Point], center: Point, revealed: usize) -> Vec<Point> {
    targets
        .iter()
        .enumerate()
        .map(|(i, p)| if i < revealed { *p } else { center })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Sequencer {
    state: SequencerState,
    layers: Vec<SeriesLayer>,
    chain: Vec<usize>,
    cursor: usize,
    pending: usize,
    generation: u64,
    easing: Easing,
}

impl Sequencer {
    pub(crate) fn state(&self) -> SequencerState {
        self.state
    }

    pub(crate) fn layers(&self) -> &[SeriesLayer] {
        &self.layers
    }

    pub(crate) fn push_layer(&mut self) {
        self.layers.push(SeriesLayer::default());
    }

    pub(crate) fn remove_layer(&mut self, index: usize) {
        if index < self.layers.len() {
            self.layers.remove(index);
        }
    }

    pub(crate) fn start(
        &mut self,
        kind: AnimationKind,
        duration: Duration,
        easing: Easing,
        layout: &ChartLayout,
        animator: &mut dyn PathAnimator,
    ) -> Result<(), AnimationError> {
        if let SequencerState::Animating(running) = self.state {
            tracing::debug!(?running, requested = ?kind, "radar animation refused: busy");
            return Err(AnimationError::Busy);
        }
        self.generation += 1;
        self.easing = easing;
        self.chain.clear();
        self.cursor = 0;
        self.pending = 0;
        for layer in &mut self.layers {
            layer.reset();
        }

        let animation = AnimationType::new(kind, duration);
        let animated: Vec<usize> = (0..self.layers.len())
            .filter(|&i| !targets(layout, i).is_empty())
            .collect();
        for &i in &animated {
            self.layers[i].animation = animation;
        }

        match kind {
            AnimationKind::ScaleAll => {
                for &i in &animated {
                    self.grow_from_center(i, layout, animator);
                }
                self.pending = animated.len();
            }
            AnimationKind::ScaleOneByOne => {
                for &i in &animated {
                    self.layers[i].hidden = true;
                }
                self.chain = animated;
                if let Some(&first) = self.chain.first() {
                    self.grow_from_center(first, layout, animator);
                }
                self.pending = self.chain.len();
            }
            AnimationKind::ParameterByParameter => {
                for &i in &animated {
                    self.reveal_vertex(i, 0, layout, animator);
                }
                self.pending = animated.len();
            }
        }

        if self.pending == 0 {
            tracing::debug!(?kind, "radar animation has nothing to animate");
            for layer in &mut self.layers {
                layer.reset();
            }
        } else {
            self.state = SequencerState::Animating(kind);
            tracing::debug!(
                ?kind,
                ?duration,
                layers = self.pending,
                generation = self.generation,
                "radar animation started"
            );
        }
        Ok(())
    }

    pub(crate) fn finish(
        &mut self,
        ticket: Ticket,
        layout: &ChartLayout,
        animator: &mut dyn PathAnimator,
    ) -> StepOutcome {
        if !self.accepts(ticket) {
            tracing::warn!(
                ?ticket,
                generation = self.generation,
                "ignoring stale radar transition completion"
            );
            return StepOutcome::Ignored;
        }
        let SequencerState::Animating(kind) = self.state else {
            return StepOutcome::Ignored;
        };
        tracing::trace!(?ticket, ?kind, "radar transition completed");

        match kind {
            AnimationKind::ScaleAll => self.settle_layer(ticket.layer),
            AnimationKind::ScaleOneByOne => {
                self.layers[ticket.layer].settle();
                self.cursor += 1;
                self.pending -= 1;
                match self.chain.get(self.cursor).copied() {
                    Some(next) => {
                        self.grow_from_center(next, layout, animator);
                        StepOutcome::Continued
                    }
                    None => self.go_idle(),
                }
            }
            AnimationKind::ParameterByParameter => {
                let layer = &mut self.layers[ticket.layer];
                layer.last_animated_vertex += 1;
                let revealed = layer.last_animated_vertex;
                if revealed >= targets(layout, ticket.layer).len() {
                    self.settle_layer(ticket.layer)
                } else {
                    self.reveal_vertex(ticket.layer, revealed, layout, animator);
                    StepOutcome::Continued
                }
            }
        }
    }

    /// Replaces the in-flight polygon of the ticket's layer.
    pub(crate) fn present(&mut self, ticket: Ticket, points: Vec<Point>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.layers[ticket.layer].presentation = Some(points);
        true
    }

    pub(crate) fn cancel(&mut self) -> bool {
        let was_animating = self.state != SequencerState::Idle;
        self.generation += 1;
        self.state = SequencerState::Idle;
        self.chain.clear();
        self.cursor = 0;
        self.pending = 0;
        for layer in &mut self.layers {
            layer.reset();
        }
        if was_animating {
            tracing::debug!(generation = self.generation, "radar animation cancelled");
        }
        was_animating
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation || self.state == SequencerState::Idle {
            return false;
        }
        let Some(layer) = self.layers.get(ticket.layer) else {
            return false;
        };
        match layer.animation {
            AnimationType::None => false,
            AnimationType::ParameterByParameter(_) => ticket.step == layer.last_animated_vertex,
            AnimationType::ScaleOneByOne(_) => self.chain.get(self.cursor) == Some(&ticket.layer),
            AnimationType::ScaleAll(_) => true,
        }
    }

    fn settle_layer(&mut self, index: usize) -> StepOutcome {
        self.layers[index].settle();
        self.pending -= 1;
        if self.pending == 0 {
            self.go_idle()
        } else {
            StepOutcome::LayerFinished
        }
    }

    fn go_idle(&mut self) -> StepOutcome {
        tracing::debug!(generation = self.generation, "radar animation finished");
        self.state = SequencerState::Idle;
        self.chain.clear();
        self.cursor = 0;
        StepOutcome::Finished
    }

    fn grow_from_center(
        &mut self,
        index: usize,
        layout: &ChartLayout,
        animator: &mut dyn PathAnimator,
    ) {
        let to = targets(layout, index).to_vec();
        let from = vec![layout.center; to.len()];
        self.request(index, 0, from, to, animator);
    }

    fn reveal_vertex(
        &mut self,
        index: usize,
        step: usize,
        layout: &ChartLayout,
        animator: &mut dyn PathAnimator,
    ) {
        let targets = targets(layout, index);
        let from = partial_polygon(targets, layout.center, step);
        let to = partial_polygon(targets, layout.center, step + 1);
        self.request(index, step, from, to, animator);
    }

    fn request(
        &mut self,
        index: usize,
        step: usize,
        from: Vec<Point>,
        to: Vec<Point>,
        animator: &mut dyn PathAnimator,
    ) {
        let layer = &mut self.layers[index];
        let Some(duration) = layer.animation.duration() else {
            return;
        };
        layer.hidden = false;
        layer.presentation = Some(from.clone());
        let ticket = Ticket {
            generation: self.generation,
            layer: index,
            step,
        };
        tracing::trace!(?ticket, vertices = to.len(), "requesting radar transition");
        animator.animate(PathTransition {
            ticket,
            from,
            to,
            duration,
            easing: self.easing,
        });
    }
}

fn targets(layout: &ChartLayout, index: usize) -> &[Point] {
    layout
        .series
        .get(index)
        .map(|s| s.vertices.as_slice())
        .unwrap_or_default()
}
