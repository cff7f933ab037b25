// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timeline primitives.
//!
//! This crate provides a small [`Timeline`] that owns a set of in-flight
//! transitions, each with a duration, an [`Easing`] curve, and an arbitrary
//! payload. It does **not** own a clock or a thread. Hosts drive it by
//! calling [`Timeline::advance`] with the elapsed time since the previous
//! frame (from a display link, a `requestAnimationFrame` callback, a test
//! loop, and so on).
//!
//! Each call to `advance`:
//! - Reports an eased progress sample for every live transition, in the order
//!   the transitions were scheduled.
//! - Removes the transitions that reached the end of their duration and
//!   returns them, again in schedule order.
//!
//! Completion is reported by return value rather than by callback. Callers
//! can therefore react to completions (for example by scheduling the next
//! step of a sequence) without re-entering the timeline.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{Easing, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.schedule(Duration::from_millis(100), Easing::Linear, "fade");
//!
//! let mut last = 0.0;
//! let finished = timeline.advance(Duration::from_millis(50), |sample| last = sample.progress);
//! assert!(finished.is_empty());
//! assert!((last - 0.5).abs() < 1e-9);
//!
//! let finished = timeline.advance(Duration::from_millis(50), |_| {});
//! assert_eq!(finished.len(), 1);
//! assert_eq!(finished[0].payload, "fade");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

/// Timing curve applied to the linear progress of a transition.
///
/// All curves map `0.0` to `0.0` and `1.0` to `1.0` and are monotonic on
/// `[0, 1]`; inputs outside that range are clamped first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Accelerates through the first half and decelerates through the second.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` onto this curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Identifier of a scheduled transition.
///
/// Identifiers are unique for the lifetime of the owning [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    /// Returns the raw numeric value of this identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Progress report for one live transition, produced by [`Timeline::advance`].
#[derive(Debug)]
pub struct Sample<'a, T> {
    /// Transition being sampled.
    pub id: TransitionId,
    /// Payload supplied when the transition was scheduled.
    pub payload: &'a T,
    /// Linear progress in `[0, 1]`.
    pub linear: f64,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
}

/// A transition that reached the end of its duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Finished<T> {
    /// Identifier the transition was scheduled under.
    pub id: TransitionId,
    /// Payload supplied when the transition was scheduled.
    pub payload: T,
    /// Time between the end of the transition and the current timeline time.
    ///
    /// A follow-up scheduled with [`Timeline::schedule_elapsed`] and this
    /// value starts exactly where the finished transition ended.
    pub overshoot: Duration,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TransitionId,
    start: Duration,
    duration: Duration,
    easing: Easing,
    payload: T,
}

impl<T> Entry<T> {
    fn linear_progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// A set of in-flight transitions advanced by an external clock.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Creates an empty timeline with its clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the accumulated time of this timeline.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of live transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no transitions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the payloads of the live transitions in schedule order.
    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.payload)
    }

    /// Schedules a transition that starts at the current timeline time.
    ///
    /// A zero `duration` completes on the next call to [`Timeline::advance`],
    /// even if that call advances by zero.
    pub fn schedule(&mut self, duration: Duration, easing: Easing, payload: T) -> TransitionId {
        self.schedule_elapsed(duration, easing, payload, Duration::ZERO)
    }

    /// Schedules a transition that started `elapsed` before the current
    /// timeline time.
    ///
    /// The start never precedes time zero.
    pub fn schedule_elapsed(
        &mut self,
        duration: Duration,
        easing: Easing,
        payload: T,
        elapsed: Duration,
    ) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            start: self.now.saturating_sub(elapsed),
            duration,
            easing,
            payload,
        });
        id
    }

    /// Removes a live transition without reporting it as finished.
    pub fn cancel(&mut self, id: TransitionId) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Removes every live transition whose payload does not satisfy `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|entry| keep(&entry.payload));
    }

    /// Removes all live transitions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advances the clock by `dt`, samples every live transition, and returns
    /// the ones that completed.
    ///
    /// Finished transitions are sampled one last time at progress `1.0`
    /// before being returned.
    pub fn advance(
        &mut self,
        dt: Duration,
        mut on_sample: impl FnMut(Sample<'_, T>),
    ) -> Vec<Finished<T>> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;

        for entry in &self.entries {
            let linear = entry.linear_progress(now);
            on_sample(Sample {
                id: entry.id,
                payload: &entry.payload,
                linear,
                progress: entry.easing.apply(linear),
            });
        }

        let mut finished = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].linear_progress(now) >= 1.0 {
                let entry = self.entries.remove(index);
                let end = entry.start.saturating_add(entry.duration);
                finished.push(Finished {
                    id: entry.id,
                    payload: entry.payload,
                    overshoot: now.saturating_sub(end),
                });
            } else {
                index += 1;
            }
        }
        finished
    }
}
