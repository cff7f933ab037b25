// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A [`RadarStyle`](crate::RadarStyle) value that cannot produce a sensible chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// `margin` or `text_margin` is negative.
    #[error("{which} must be non-negative")]
    NegativeMargin {
        /// Name of the offending field.
        which: &'static str,
    },
    /// A stroke width is negative.
    #[error("{which} stroke width must be non-negative")]
    NegativeStrokeWidth {
        /// Name of the offending field.
        which: &'static str,
    },
    /// `max_value` is zero or negative.
    #[error("max value must be positive")]
    InvalidMaxValue,
    /// The label font size is zero or negative.
    #[error("label font size must be positive")]
    InvalidFontSize,
    /// A numeric field is NaN or infinite.
    #[error("{which} must be finite")]
    NonFinite {
        /// Name of the offending field.
        which: &'static str,
    },
}

/// Why an animation request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    /// Another animation is still running; cancel it first.
    #[error("an animation is already running")]
    Busy,
    /// The chart has not been drawn yet, so there are no target vertices.
    #[error("the chart has not been laid out yet")]
    NotLaidOut,
}
