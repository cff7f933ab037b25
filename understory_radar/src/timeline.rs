// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use understory_timing::{Finished, Sample, Timeline};

use crate::animation::{PathAnimator, PathTransition};

/// A [`PathAnimator`] that queues transitions on a [`Timeline`].
///
/// Hosts without their own animation primitive own one of these and pass it
/// to [`RadarChart::advance`](crate::RadarChart::advance) once per frame.
///
/// A step that follows a completed one starts where that one ended, not at
/// the frame boundary, so chained steps do not drift by a frame each.
#[derive(Clone, Debug, Default)]
pub struct RadarTimeline {
    timeline: Timeline<PathTransition>,
    /// Overshoot of the completion being reported; applied to follow-ups.
    carry: Duration,
}

impl RadarTimeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Returns `true` when no transitions are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Queued transitions in the order they were requested.
    pub fn pending(&self) -> impl Iterator<Item = &PathTransition> {
        self.timeline.payloads()
    }

    /// Drops every queued transition without completing it.
    pub fn clear(&mut self) {
        self.timeline.clear();
    }

    pub(crate) fn step(
        &mut self,
        dt: Duration,
        on_sample: impl FnMut(Sample<'_, PathTransition>),
    ) -> Vec<Finished<PathTransition>> {
        self.timeline.advance(dt, on_sample)
    }

    pub(crate) fn set_carry(&mut self, carry: Duration) {
        self.carry = carry;
    }
}

impl PathAnimator for RadarTimeline {
    fn animate(&mut self, transition: PathTransition) {
        let (duration, easing) = (transition.duration, transition.easing);
        self.timeline.schedule_elapsed(duration, easing, transition, self.carry);
    }
}
