// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance configuration.

use peniko::Color;
use understory_timing::Easing;

use crate::canvas::TextStyle;
use crate::error::StyleError;
use crate::fit::FitStrategy;
use crate::geometry::DEFAULT_START_ANGLE;

/// Appearance of a radar chart.
///
/// All lengths are in canvas units. Build one with [`RadarStyle::default`]
/// and the `with_*` methods, then check it with [`RadarStyle::validate`]
/// (which [`RadarChart::set_style`](crate::RadarChart::set_style) does for you).
#[derive(Clone, Debug, PartialEq)]
pub struct RadarStyle {
    /// Space kept between the chart circle and the container edge.
    pub margin: f64,
    /// Space between an outer vertex and its label.
    pub text_margin: f64,
    /// Outline color of the outer polygon.
    pub outer_stroke_color: Color,
    /// Outline width of the outer polygon.
    pub outer_stroke_width: f64,
    /// Outline color of the gradation rings.
    pub gradation_stroke_color: Color,
    /// Outline width of the gradation rings.
    pub gradation_stroke_width: f64,
    /// Interior of the outer polygon.
    pub fill_color: Color,
    /// Fill of the whole container, drawn first when set.
    pub background_color: Option<Color>,
    /// Color of the center-to-vertex spokes; spokes are skipped when `None`.
    pub axis_stroke_color: Option<Color>,
    /// Width of the spokes.
    pub axis_stroke_width: f64,
    /// Number of concentric rings between the center and the outer polygon.
    pub number_of_gradations: usize,
    /// Series value that maps onto the outer polygon.
    pub max_value: f64,
    /// Angle of axis 0 in radians; the default points straight up.
    pub start_angle: f64,
    /// Font used for axis labels.
    pub label_style: TextStyle,
    /// Color of axis labels.
    pub label_color: Color,
    /// Tolerance on x when deciding whether a vertex sits on the vertical axis.
    pub label_epsilon: f64,
    /// How the chart radius is chosen.
    pub fit: FitStrategy,
    /// Timing curve for reveal animations.
    pub easing: Easing,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            margin: 16.0,
            text_margin: 8.0,
            outer_stroke_color: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            outer_stroke_width: 1.0,
            gradation_stroke_color: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            gradation_stroke_width: 0.5,
            fill_color: Color::WHITE,
            background_color: None,
            axis_stroke_color: None,
            axis_stroke_width: 0.5,
            number_of_gradations: 3,
            max_value: 1.0,
            start_angle: DEFAULT_START_ANGLE,
            label_style: TextStyle::default(),
            label_color: Color::BLACK,
            label_epsilon: 1.0,
            fit: FitStrategy::AutoFit,
            easing: Easing::EaseInOut,
        }
    }
}

impl RadarStyle {
    /// Sets the outer margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the vertex-to-label spacing.
    #[must_use]
    pub fn with_text_margin(mut self, text_margin: f64) -> Self {
        self.text_margin = text_margin;
        self
    }

    /// Sets the outer polygon outline.
    #[must_use]
    pub fn with_outer_stroke(mut self, color: Color, width: f64) -> Self {
        self.outer_stroke_color = color;
        self.outer_stroke_width = width;
        self
    }

    /// Sets the gradation ring outline.
    #[must_use]
    pub fn with_gradation_stroke(mut self, color: Color, width: f64) -> Self {
        self.gradation_stroke_color = color;
        self.gradation_stroke_width = width;
        self
    }

    /// Sets the outer polygon interior.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the container background.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Enables center-to-vertex spokes.
    #[must_use]
    pub fn with_axis_stroke(mut self, color: Color, width: f64) -> Self {
        self.axis_stroke_color = Some(color);
        self.axis_stroke_width = width;
        self
    }

    /// Sets the number of gradation rings.
    #[must_use]
    pub fn with_gradations(mut self, count: usize) -> Self {
        self.number_of_gradations = count;
        self
    }

    /// Sets the value that maps onto the outer polygon.
    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the angle of axis 0, in radians.
    #[must_use]
    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    /// Sets the label font and color.
    #[must_use]
    pub fn with_labels(mut self, style: TextStyle, color: Color) -> Self {
        self.label_style = style;
        self.label_color = color;
        self
    }

    /// Sets the radius strategy.
    #[must_use]
    pub fn with_fit(mut self, fit: FitStrategy) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the reveal animation timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), StyleError> {
        let finite = [
            ("margin", self.margin),
            ("text_margin", self.text_margin),
            ("outer_stroke_width", self.outer_stroke_width),
            ("gradation_stroke_width", self.gradation_stroke_width),
            ("axis_stroke_width", self.axis_stroke_width),
            ("max_value", self.max_value),
            ("start_angle", self.start_angle),
            ("label_epsilon", self.label_epsilon),
            ("label_style.font_size", self.label_style.font_size),
        ];
        if let Some((which, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(StyleError::NonFinite { which });
        }
        for (which, v) in [
            ("margin", self.margin),
            ("text_margin", self.text_margin),
            ("label_epsilon", self.label_epsilon),
        ] {
            if v < 0.0 {
                return Err(StyleError::NegativeMargin { which });
            }
        }
        for (which, v) in [
            ("outer", self.outer_stroke_width),
            ("gradation", self.gradation_stroke_width),
            ("axis", self.axis_stroke_width),
        ] {
            if v < 0.0 {
                return Err(StyleError::NegativeStrokeWidth { which });
            }
        }
        if self.max_value <= 0.0 {
            return Err(StyleError::InvalidMaxValue);
        }
        if self.label_style.font_size <= 0.0 {
            return Err(StyleError::InvalidFontSize);
        }
        Ok(())
    }
}
