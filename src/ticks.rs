//! Tick mark generation.
//!
//! Ticks decorate a stepped track: one mark at the start and one every
//! `step` value units, each centered under the thumb position for the value
//! it marks. The generator is a lazy iterator; it is regenerated from
//! configuration and geometry whenever either changes, never patched.

use crate::config::SliderConfig;
use crate::geometry::GeometrySnapshot;
use crate::track::{self, EPSILON};

/// Visual extent of a tick mark in pixels.
pub const TICK_SIZE: f32 = 4.0;

/// Lazy, finite sequence of tick pixel offsets along the active axis.
///
/// Cloning before iterating yields an independent cursor; rebuilding via
/// [`TickMarks::new`] is cheap and is how changed inputs are picked up.
#[derive(Debug, Clone)]
pub struct TickMarks {
    index: u64,
    count: u64,
    origin: f32,
    spacing: f32,
}

impl TickMarks {
    /// Tick positions for a configuration and complete geometry.
    ///
    /// Empty unless tick marks are enabled, the slider is stepped, and the
    /// range is non-degenerate.
    pub fn new(config: &SliderConfig, geometry: &GeometrySnapshot) -> Self {
        let (minimum, maximum) = config.bounds();
        let range = maximum - minimum;
        if !config.tick_marks || !config.step.is_finite() || config.step <= 0.0 || range < EPSILON {
            return Self::empty();
        }
        let pixels_per_unit = track::usable_extent(config, geometry) / range;
        let thumb_extent = config.orientation.extent(geometry.thumb);
        let count = ((range / config.step + EPSILON).floor() as u64).saturating_add(1);
        Self {
            index: 0,
            count,
            origin: thumb_extent / 2.0 - TICK_SIZE / 2.0,
            spacing: config.step * pixels_per_unit,
        }
    }

    /// A generator that yields nothing.
    pub fn empty() -> Self {
        Self {
            index: 0,
            count: 0,
            origin: 0.0,
            spacing: 0.0,
        }
    }
}

impl Iterator for TickMarks {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.count {
            return None;
        }
        let offset = self.origin + self.spacing * self.index as f32;
        self.index += 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickMarks {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot {
            container: Size::new(200.0, 40.0),
            track: Size::new(190.0, 4.0),
            thumb: Size::new(20.0, 20.0),
        }
    }

    #[test]
    fn count_is_one_per_step_plus_the_start() {
        let config = SliderConfig::new()
            .range(0.0, 10.0)
            .step(2.0)
            .tick_marks(true);
        assert_eq!(TickMarks::new(&config, &geometry()).len(), 6);

        let uneven = SliderConfig::new()
            .range(1.0, 10.0)
            .step(4.0)
            .tick_marks(true);
        // Values 1, 5, 9; the range end is not on the grid.
        assert_eq!(TickMarks::new(&uneven, &geometry()).len(), 3);
    }

    #[test]
    fn marks_start_under_the_thumb_and_space_evenly() {
        let config = SliderConfig::new()
            .range(0.0, 9.0)
            .step(3.0)
            .tick_marks(true);
        let ticks: Vec<f32> = TickMarks::new(&config, &geometry()).collect();
        assert_eq!(ticks.len(), 4);

        // Thumb extent 20, tick 4: first mark centered under the thumb start.
        assert!(approx_eq(ticks[0], 10.0 - 2.0));
        let spacing = 3.0 * 170.0 / 9.0;
        for pair in ticks.windows(2) {
            assert!(approx_eq(pair[1] - pair[0], spacing));
        }
        // The last mark stays within the usable travel.
        assert!(ticks[ticks.len() - 1] <= 8.0 + 170.0 + 0.001);
    }

    #[test]
    fn disabled_or_continuous_sliders_have_no_ticks() {
        let continuous = SliderConfig::new().range(0.0, 10.0).tick_marks(true);
        assert_eq!(TickMarks::new(&continuous, &geometry()).count(), 0);

        let unticked = SliderConfig::new().range(0.0, 10.0).step(2.0);
        assert_eq!(TickMarks::new(&unticked, &geometry()).count(), 0);

        let degenerate = SliderConfig::new()
            .range(3.0, 3.0)
            .step(1.0)
            .tick_marks(true);
        assert_eq!(TickMarks::new(&degenerate, &geometry()).count(), 0);
    }

    #[test]
    fn cloned_cursor_walks_independently() {
        let ticks = TickMarks::new(
            &SliderConfig::new().range(0.0, 4.0).step(1.0).tick_marks(true),
            &geometry(),
        );
        let first: Vec<f32> = ticks.clone().collect();
        let second: Vec<f32> = ticks.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
