//! Pure value/position math for the slider track.
//!
//! Everything here is a function of the configuration and a complete
//! geometry snapshot; no state is held. The stored slider value lives in
//! display space (reversal already folded in by [`bound`]), positions are
//! pixel offsets of the thumb's leading edge along the active axis, and
//! [`value_at_offset`] returns logical values ready for callbacks.

use crate::config::{Orientation, SliderConfig};
use crate::geometry::{GeometrySnapshot, Rect};

/// Tolerance for degenerate-extent and float comparisons.
pub(crate) const EPSILON: f32 = 1e-6;

// =============================================================================
// Value model
// =============================================================================

/// Mirror a value across the range midpoint when `revert` is set.
///
/// Self-inverse, so it converts in both directions between the logical
/// domain and display space.
pub fn mirror(value: f32, config: &SliderConfig) -> f32 {
    if config.revert {
        let (minimum, maximum) = config.bounds();
        minimum + maximum - value
    } else {
        value
    }
}

/// Normalize a caller-supplied value into display space: reversal first,
/// then clamping into the range. The clamp always happens last.
pub fn bound(value: f32, config: &SliderConfig) -> f32 {
    let (minimum, maximum) = config.bounds();
    mirror(value, config).clamp(minimum, maximum)
}

/// Snap a logical value onto the step grid anchored at the minimum, then
/// clamp into range. Continuous sliders (step 0) only clamp.
///
/// Ties round half away from zero.
pub fn quantize(value: f32, config: &SliderConfig) -> f32 {
    let (minimum, maximum) = config.bounds();
    let value = if config.step > 0.0 {
        minimum + ((value - minimum) / config.step).round() * config.step
    } else {
        value
    };
    value.clamp(minimum, maximum)
}

// =============================================================================
// Position mapping
// =============================================================================

/// Ratio of a display-space value within the range; 0 when the range is
/// degenerate.
pub fn value_ratio(value: f32, config: &SliderConfig) -> f32 {
    let (minimum, maximum) = config.bounds();
    let range = maximum - minimum;
    if range.abs() < EPSILON {
        return 0.0;
    }
    (value - minimum) / range
}

/// Pixels of thumb travel along the active axis.
pub fn usable_extent(config: &SliderConfig, geometry: &GeometrySnapshot) -> f32 {
    let orientation = config.orientation;
    (orientation.extent(geometry.track) - orientation.extent(geometry.thumb)).max(0.0)
}

/// Pixel offset of the thumb's leading edge for a display-space value.
pub fn offset_for_value(value: f32, config: &SliderConfig, geometry: &GeometrySnapshot) -> f32 {
    value_ratio(value, config) * usable_extent(config, geometry)
}

/// The logical value a pixel offset selects: inverse ratio, mirrored back to
/// the logical domain, quantized, clamped.
pub fn value_at_offset(offset: f32, config: &SliderConfig, geometry: &GeometrySnapshot) -> f32 {
    let (minimum, maximum) = config.bounds();
    let extent = usable_extent(config, geometry);
    if extent < EPSILON {
        return minimum;
    }
    let raw = minimum + (offset / extent) * (maximum - minimum);
    quantize(mirror(raw, config), config)
}

// =============================================================================
// Hit testing and renderer helpers
// =============================================================================

/// Hit-test rectangle for the thumb at a display-space value.
///
/// Sized to `thumb_touch_size` (screen coordinates), centered on the thumb's
/// center along the active axis and on the container's midline across it.
pub fn thumb_touch_rect(value: f32, config: &SliderConfig, geometry: &GeometrySnapshot) -> Rect {
    let orientation = config.orientation;
    let touch_width = config.thumb_touch_size.width.max(0.0);
    let touch_height = config.thumb_touch_size.height.max(0.0);
    let center_along =
        offset_for_value(value, config, geometry) + orientation.extent(geometry.thumb) / 2.0;
    let center_cross = orientation.cross(geometry.container) / 2.0;
    match orientation {
        Orientation::Horizontal => Rect::new(
            center_along - touch_width / 2.0,
            center_cross - touch_height / 2.0,
            touch_width,
            touch_height,
        ),
        Orientation::Vertical => Rect::new(
            center_cross - touch_width / 2.0,
            center_along - touch_height / 2.0,
            touch_width,
            touch_height,
        ),
    }
}

/// Filled track extent up to the thumb center, for minimum-track rendering.
pub fn track_fill_extent(value: f32, config: &SliderConfig, geometry: &GeometrySnapshot) -> f32 {
    offset_for_value(value, config, geometry)
        + config.orientation.extent(geometry.thumb) / 2.0
}
