//! Slider configuration: range, quantization, orientation, gesture behavior,
//! transition policy, and presentational passthrough for the renderer.
//!
//! Configuration is supplied by the caller and treated as immutable per
//! render pass; the engine repairs malformed values defensively (see
//! [`SliderConfig::normalized`]) and never fails at runtime. Hosts that load
//! configuration from documents can opt into loud failure with
//! [`SliderConfig::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{AnimationType, SpringParams, TimingParams};
use crate::geometry::{Point, Size};

/// Default visual thumb extent in pixels, for renderers without a theme.
pub const DEFAULT_THUMB_SIZE: f32 = 20.0;
/// Default visual track thickness in pixels.
pub const DEFAULT_TRACK_THICKNESS: f32 = 4.0;

/// Which screen axis carries the draggable extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the draggable axis.
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Extent of `size` across the draggable axis.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Component of `point` along the draggable axis.
    pub fn along(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Component of a cumulative `(dx, dy)` translation along the axis.
    pub fn delta(self, translation: (f32, f32)) -> f32 {
        match self {
            Orientation::Horizontal => translation.0,
            Orientation::Vertical => translation.1,
        }
    }
}

/// An RGBA color with components in `[0, 1]`, passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Transition policy for programmatic value updates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animate programmatic updates instead of snapping.
    pub animate_transitions: bool,
    /// Policy used when animating.
    pub animation_type: AnimationType,
    /// Timing tunables, used when `animation_type` is [`AnimationType::Timing`].
    pub timing: TimingParams,
    /// Spring tunables, used when `animation_type` is [`AnimationType::Spring`].
    pub spring: SpringParams,
}

/// Caller-supplied slider configuration.
///
/// Deserializes leniently: any missing field takes its default, so a partial
/// document acts as overrides on top of [`SliderConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Initial (or controlled) value.
    pub value: f32,
    /// Lower end of the value range.
    pub minimum_value: f32,
    /// Upper end of the value range.
    pub maximum_value: f32,
    /// Quantization granularity; 0 means continuous.
    pub step: f32,
    /// Which axis the thumb travels along.
    pub orientation: Orientation,
    /// Mirror the value-to-position mapping without changing the value range.
    pub revert: bool,
    /// Freeze the value: gestures still run their lifecycle but cannot move it.
    pub disabled: bool,
    /// Whether a press outside the thumb jumps the value to that position.
    pub update_on_press: bool,
    /// Hit-test rectangle size; may exceed the visual thumb.
    pub thumb_touch_size: Size,
    /// Render bias applied to the drawn thumb, not to hit-testing.
    pub thumb_offset: f32,
    /// Transition policy for programmatic updates.
    pub animation: AnimationConfig,
    /// Whether tick marks are generated.
    pub tick_marks: bool,
    /// Tick mark color (rendering only).
    pub tick_marks_color: Color,
    /// Track background color (rendering only).
    pub background_color: Color,
    /// Opaque background image source for the renderer to resolve.
    pub background_image: Option<String>,
    /// Draw the hit-test rectangle as a diagnostic overlay (rendering only).
    pub debug_touch_area: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            orientation: Orientation::Horizontal,
            revert: false,
            disabled: false,
            update_on_press: true,
            thumb_touch_size: Size::new(40.0, 40.0),
            thumb_offset: 0.0,
            animation: AnimationConfig::default(),
            tick_marks: false,
            tick_marks_color: Color::rgb(0.9, 0.9, 0.9),
            background_color: Color::TRANSPARENT,
            background_image: None,
            debug_touch_area: false,
        }
    }
}

impl SliderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the value range.
    pub fn range(mut self, minimum: f32, maximum: f32) -> Self {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self
    }

    /// Set the quantization step (0 for continuous).
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the drag axis.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Mirror the value-to-position mapping.
    pub fn revert(mut self, revert: bool) -> Self {
        self.revert = revert;
        self
    }

    /// Freeze or unfreeze the value.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Enable or disable press-to-jump.
    pub fn update_on_press(mut self, update_on_press: bool) -> Self {
        self.update_on_press = update_on_press;
        self
    }

    /// Set the hit-test rectangle size.
    pub fn thumb_touch_size(mut self, size: Size) -> Self {
        self.thumb_touch_size = size;
        self
    }

    /// Set the render bias for the drawn thumb.
    pub fn thumb_offset(mut self, offset: f32) -> Self {
        self.thumb_offset = offset;
        self
    }

    /// Set the transition policy.
    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Enable or disable tick marks.
    pub fn tick_marks(mut self, tick_marks: bool) -> Self {
        self.tick_marks = tick_marks;
        self
    }

    /// The value range collapsed to a valid interval: an inverted or
    /// non-finite bound degrades to a single point instead of poisoning
    /// the clamp math downstream.
    pub fn bounds(&self) -> (f32, f32) {
        let minimum = if self.minimum_value.is_finite() {
            self.minimum_value
        } else if self.maximum_value.is_finite() {
            self.maximum_value
        } else {
            0.0
        };
        let maximum = if self.maximum_value.is_finite() {
            self.maximum_value.max(minimum)
        } else {
            minimum
        };
        (minimum, maximum)
    }

    /// Check the configuration without repairing it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.minimum_value.is_finite() || !self.maximum_value.is_finite() {
            return Err(ConfigError::NonFiniteRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        if self.maximum_value < self.minimum_value {
            return Err(ConfigError::InvertedRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        if !self.step.is_finite() {
            return Err(ConfigError::NonFiniteStep { step: self.step });
        }
        if self.step < 0.0 {
            return Err(ConfigError::NegativeStep { step: self.step });
        }
        if self.thumb_touch_size.width < 0.0 || self.thumb_touch_size.height < 0.0 {
            return Err(ConfigError::NegativeTouchSize {
                width: self.thumb_touch_size.width,
                height: self.thumb_touch_size.height,
            });
        }
        Ok(())
    }

    /// A copy with every malformed field repaired: an inverted or non-finite
    /// range collapses to a single point, a malformed step becomes
    /// continuous, and negative touch dimensions become zero.
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        let (minimum, maximum) = config.bounds();
        config.minimum_value = minimum;
        config.maximum_value = maximum;
        if !config.step.is_finite() || config.step < 0.0 {
            config.step = 0.0;
        }
        config.thumb_touch_size = Size::new(
            config.thumb_touch_size.width.max(0.0),
            config.thumb_touch_size.height.max(0.0),
        );
        config
    }
}

/// Why a configuration document failed validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("range {minimum}..{maximum} has a non-finite bound")]
    NonFiniteRange { minimum: f32, maximum: f32 },

    #[error("maximum value {maximum} is below minimum value {minimum}")]
    InvertedRange { minimum: f32, maximum: f32 },

    #[error("step {step} is not finite")]
    NonFiniteStep { step: f32 },

    #[error("step {step} is negative; use 0 for a continuous slider")]
    NegativeStep { step: f32 },

    #[error("thumb touch size {width}x{height} has a negative dimension")]
    NegativeTouchSize { width: f32, height: f32 },
}
