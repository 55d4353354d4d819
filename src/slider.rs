//! The slider engine: configuration, geometry, value, gesture session, and
//! transitions under one owner, with the read surface a renderer consumes.

use web_time::Instant;

use crate::animation::{AnimationType, Transition, TransitionId};
use crate::callback::Callback;
use crate::config::SliderConfig;
use crate::geometry::{GeometryTracker, Point, Rect, Region, Size};
use crate::gesture::{DragState, GestureResponder};
use crate::ticks::TickMarks;
use crate::track;

/// Headless range-selection engine, generic over the host's message type.
///
/// The host feeds it layout measurements, pointer gestures (through
/// [`GestureResponder`]), configuration updates, and clock ticks; it answers
/// with messages from the registered callbacks and with read accessors for
/// drawing. Until all three regions are measured the engine refuses gestures
/// and the geometry-dependent accessors yield nothing.
pub struct Slider<M> {
    config: SliderConfig,
    geometry: GeometryTracker,
    /// Display-space value: reversal folded in, always within bounds.
    value: f32,
    drag: DragState,
    transition: Option<Transition>,
    next_transition: u64,
    on_value_change: Callback<f32, M>,
    on_sliding_start: Callback<f32, M>,
    on_sliding_complete: Callback<f32, M>,
}

/// Create a slider engine from a configuration.
pub fn slider<M>(config: SliderConfig) -> Slider<M> {
    Slider::new(config)
}

impl<M> Slider<M> {
    pub fn new(config: SliderConfig) -> Self {
        let config = Self::adopt(config);
        let value = track::bound(track::quantize(config.value, &config), &config);
        Self {
            config,
            geometry: GeometryTracker::new(),
            value,
            drag: DragState::Idle,
            transition: None,
            next_transition: 0,
            on_value_change: Callback::none(),
            on_sliding_start: Callback::none(),
            on_sliding_complete: Callback::none(),
        }
    }

    /// Repair a malformed configuration instead of failing.
    fn adopt(config: SliderConfig) -> SliderConfig {
        match config.validate() {
            Ok(()) => config,
            Err(error) => {
                log::warn!("repairing slider config: {error}");
                config.normalized()
            }
        }
    }

    // ========================================================================
    // Builder-style callback registration
    // ========================================================================

    /// Set the callback fired on every value update.
    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_value_change = Callback::new(callback);
        self
    }

    /// Set the callback fired when a gesture claims the slider.
    pub fn on_sliding_start<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_sliding_start = Callback::new(callback);
        self
    }

    /// Set the callback fired when a gesture ends or is torn away.
    pub fn on_sliding_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) -> M + 'static,
    {
        self.on_sliding_complete = Callback::new(callback);
        self
    }

    // ========================================================================
    // Host inputs
    // ========================================================================

    /// Record a layout measurement for one region.
    ///
    /// Returns whether anything observable changed, so the host can skip
    /// redundant redraws.
    pub fn measure(&mut self, region: Region, size: Size) -> bool {
        self.geometry.report(region, size)
    }

    /// Adopt the next render pass's configuration.
    ///
    /// A changed `value` field is a programmatic update and follows the
    /// animation policy; a changed range, step, or reversal re-normalizes
    /// the stored value. Returns the change message when the value moved
    /// synchronously.
    pub fn set_config(&mut self, config: SliderConfig, now: Instant) -> Option<M> {
        let config = Self::adopt(config);
        let value_prop_changed = config.value != self.config.value;
        let mapping_changed = config.minimum_value != self.config.minimum_value
            || config.maximum_value != self.config.maximum_value
            || config.revert != self.config.revert
            || config.step != self.config.step;
        let previous_logical = self.value();
        self.config = config;

        if value_prop_changed {
            return if self.config.animation.animate_transitions {
                self.animate_to(self.config.value, now);
                None
            } else {
                self.set_value(self.config.value)
            };
        }
        if mapping_changed {
            // A transition aimed at the old range must not land outside the
            // new one.
            self.cancel_transition();
            let display =
                track::bound(track::quantize(previous_logical, &self.config), &self.config);
            if display != self.value {
                self.value = display;
                return self.on_value_change.call(self.value());
            }
        }
        None
    }

    /// Set the value programmatically, snapping immediately.
    ///
    /// The value is quantized and bounded first; the change callback fires
    /// only when the stored value actually moves. Any running transition is
    /// cancelled either way.
    pub fn set_value(&mut self, value: f32) -> Option<M> {
        self.cancel_transition();
        let display = track::bound(track::quantize(value, &self.config), &self.config);
        if display == self.value {
            return None;
        }
        self.value = display;
        self.on_value_change.call(self.value())
    }

    /// Animate the value toward `value` under the configured policy.
    ///
    /// Supersedes any running transition; the replaced transition never
    /// reaches its completion callback. Returns the new transition's token.
    pub fn animate_to(&mut self, value: f32, now: Instant) -> TransitionId {
        self.cancel_transition();
        let target = track::bound(track::quantize(value, &self.config), &self.config);
        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        let animation = &self.config.animation;
        self.transition = Some(match animation.animation_type {
            AnimationType::Timing => {
                Transition::timing(id, self.value, target, animation.timing, now)
            }
            AnimationType::Spring => {
                Transition::spring(id, self.value, target, animation.spring, now)
            }
        });
        id
    }

    /// Cancel the running transition, leaving the value where the last
    /// sample put it. Returns the cancelled token.
    pub fn cancel_transition(&mut self) -> Option<TransitionId> {
        let transition = self.transition.take()?;
        log::debug!(
            "transition {:?} cancelled short of target {}",
            transition.id(),
            transition.target()
        );
        Some(transition.id())
    }

    /// Advance the animation clock.
    ///
    /// Fires the change callback once when a transition completes; cancelled
    /// transitions never reach it.
    pub fn tick(&mut self, now: Instant) -> Option<M> {
        let transition = self.transition.as_mut()?;
        let (value, finished) = transition.sample(now);
        self.value = value;
        if finished {
            self.transition = None;
            return self.on_value_change.call(self.value());
        }
        None
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// Current logical value (reversal unfolded).
    pub fn value(&self) -> f32 {
        track::mirror(self.value, &self.config)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Whether all three regions have been measured.
    pub fn is_ready(&self) -> bool {
        self.geometry.is_ready()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Token of the in-flight transition, if one is running.
    pub fn active_transition(&self) -> Option<TransitionId> {
        self.transition.as_ref().map(Transition::id)
    }

    /// Pixel offset of the thumb's leading edge; `None` until measured.
    pub fn thumb_offset(&self) -> Option<f32> {
        let geometry = self.geometry.snapshot()?;
        Some(track::offset_for_value(self.value, &self.config, geometry))
    }

    /// Offset the renderer draws the thumb at: [`Self::thumb_offset`] plus
    /// the configured render bias. Hit-testing ignores the bias.
    pub fn thumb_draw_offset(&self) -> Option<f32> {
        Some(self.thumb_offset()? + self.config.thumb_offset)
    }

    /// Filled track extent up to the thumb center, for minimum-track
    /// rendering.
    pub fn track_fill_extent(&self) -> Option<f32> {
        let geometry = self.geometry.snapshot()?;
        Some(track::track_fill_extent(self.value, &self.config, geometry))
    }

    /// Hit-test rectangle around the thumb; also the `debug_touch_area`
    /// overlay data.
    pub fn thumb_touch_rect(&self) -> Option<Rect> {
        let geometry = self.geometry.snapshot()?;
        Some(track::thumb_touch_rect(self.value, &self.config, geometry))
    }

    /// Tick mark offsets; empty until measured, and unless ticks are
    /// enabled on a stepped slider.
    pub fn tick_marks(&self) -> TickMarks {
        match self.geometry.snapshot() {
            Some(geometry) => TickMarks::new(&self.config, geometry),
            None => TickMarks::empty(),
        }
    }
}

impl<M> GestureResponder<M> for Slider<M> {
    fn should_claim(&self, location: Point) -> bool {
        if !self.geometry.is_ready() {
            return false;
        }
        if self.config.update_on_press {
            return true;
        }
        self.thumb_touch_rect()
            .is_some_and(|rect| rect.contains(location))
    }

    fn on_start(&mut self, location: Point) -> Vec<M> {
        let Some(geometry) = self.geometry.snapshot().copied() else {
            log::debug!("gesture start before layout is complete, ignoring");
            return Vec::new();
        };
        if self.drag.is_active() {
            return Vec::new();
        }
        self.cancel_transition();

        let on_thumb =
            track::thumb_touch_rect(self.value, &self.config, &geometry).contains(location);
        if !on_thumb && !self.config.disabled {
            // Press-to-set: center the thumb under the touch, then let the
            // usual offset-to-value path quantize.
            let pressed = self.config.orientation.along(location)
                - self.config.orientation.extent(geometry.thumb) / 2.0;
            let logical = track::value_at_offset(pressed, &self.config, &geometry);
            self.value = track::bound(logical, &self.config);
        }
        let previous_offset = track::offset_for_value(self.value, &self.config, &geometry);
        self.drag = DragState::Active { previous_offset };
        log::debug!(
            "drag claimed at offset {previous_offset:.1}, value {}",
            self.value()
        );

        let current = self.value();
        let mut messages = Vec::new();
        messages.extend(self.on_sliding_start.call(current));
        messages.extend(self.on_value_change.call(current));
        messages
    }

    fn on_move(&mut self, translation: (f32, f32)) -> Vec<M> {
        let DragState::Active { previous_offset } = self.drag else {
            return Vec::new();
        };
        if self.config.disabled {
            return Vec::new();
        }
        let Some(geometry) = self.geometry.snapshot().copied() else {
            return Vec::new();
        };
        let offset = previous_offset + self.config.orientation.delta(translation);
        let logical = track::value_at_offset(offset, &self.config, &geometry);
        self.value = track::bound(logical, &self.config);
        self.on_value_change
            .call(self.value())
            .into_iter()
            .collect()
    }

    fn on_end(&mut self, translation: (f32, f32)) -> Vec<M> {
        let DragState::Active { previous_offset } = self.drag else {
            return Vec::new();
        };
        if !self.config.disabled {
            if let Some(geometry) = self.geometry.snapshot().copied() {
                let offset = previous_offset + self.config.orientation.delta(translation);
                let logical = track::value_at_offset(offset, &self.config, &geometry);
                self.value = track::bound(logical, &self.config);
            }
        }
        self.drag = DragState::Idle;
        log::debug!("drag finished at value {}", self.value());
        self.on_sliding_complete
            .call(self.value())
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::gesture::PointerEvent;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Started(f32),
        Changed(f32),
        Completed(f32),
    }

    /// One value unit of thumb travel on the standard test geometry.
    const UNIT: f32 = 170.0 / 9.0;

    fn wired(config: SliderConfig) -> Slider<Msg> {
        slider(config)
            .on_value_change(Msg::Changed)
            .on_sliding_start(Msg::Started)
            .on_sliding_complete(Msg::Completed)
    }

    fn measured(config: SliderConfig) -> Slider<Msg> {
        let mut slider = wired(config);
        slider.measure(Region::Container, Size::new(200.0, 40.0));
        slider.measure(Region::Track, Size::new(190.0, 4.0));
        slider.measure(Region::Thumb, Size::new(20.0, 20.0));
        slider
    }

    fn one_to_ten() -> SliderConfig {
        SliderConfig::new().range(1.0, 10.0).step(1.0).value(2.0)
    }

    /// Point on the thumb center for the current value.
    fn thumb_center(slider: &Slider<Msg>) -> Point {
        slider.thumb_touch_rect().unwrap().center()
    }

    #[test]
    fn dragging_three_units_moves_the_value_three_steps() {
        let mut slider = measured(one_to_ten());
        let start = slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        assert_eq!(start, vec![Msg::Started(2.0), Msg::Changed(2.0)]);

        let mut changes = Vec::new();
        for units in 1..=3 {
            changes.extend(slider.on_pointer_event(&PointerEvent::Move {
                translation: (UNIT * units as f32, 0.0),
            }));
        }
        assert_eq!(
            changes,
            vec![Msg::Changed(3.0), Msg::Changed(4.0), Msg::Changed(5.0)]
        );

        let end = slider.on_pointer_event(&PointerEvent::End {
            translation: (UNIT * 3.0, 0.0),
        });
        assert_eq!(end, vec![Msg::Completed(5.0)]);
        assert_eq!(slider.value(), 5.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn tap_at_half_ratio_jumps_to_the_rounded_value() {
        let mut slider = measured(one_to_ten());
        // Pressed offset 85 = half the travel; raw value 5.5 rounds away
        // from zero to 6.
        let messages = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(95.0, 20.0),
        });
        assert_eq!(messages, vec![Msg::Started(6.0), Msg::Changed(6.0)]);
        assert_eq!(slider.value(), 6.0);
        assert!(slider.is_dragging());
    }

    #[test]
    fn press_on_the_thumb_does_not_jump() {
        let mut slider = measured(one_to_ten());
        let center = thumb_center(&slider);
        // Land inside the touch rectangle but off the exact center.
        let messages = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(center.x + 8.0, center.y),
        });
        assert_eq!(messages, vec![Msg::Started(2.0), Msg::Changed(2.0)]);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn draw_bias_moves_the_drawn_thumb_but_not_hit_testing() {
        let mut slider = measured(one_to_ten().thumb_offset(5.0));
        let offset = slider.thumb_offset().unwrap();
        assert_eq!(slider.thumb_draw_offset(), Some(offset + 5.0));

        // The touch rectangle stays centered on the unbiased thumb, so a
        // press there counts as on-thumb and does not jump.
        let center = thumb_center(&slider);
        assert!((center.x - (offset + 10.0)).abs() < 0.001);
        let start = slider.on_pointer_event(&PointerEvent::Start { location: center });
        assert_eq!(start, vec![Msg::Started(2.0), Msg::Changed(2.0)]);
    }

    #[test]
    fn without_update_on_press_only_the_thumb_claims() {
        let mut slider = measured(one_to_ten().update_on_press(false));
        assert!(!GestureResponder::should_claim(
            &slider,
            Point::new(120.0, 20.0)
        ));
        let refused = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(120.0, 20.0),
        });
        assert!(refused.is_empty());
        assert!(!slider.is_dragging());

        assert!(GestureResponder::should_claim(&slider, thumb_center(&slider)));
    }

    #[test]
    fn pointer_events_before_measurement_are_ignored() {
        let mut slider = wired(one_to_ten());
        let messages = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(95.0, 20.0),
        });
        assert!(messages.is_empty());
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 2.0);
        assert_eq!(slider.thumb_offset(), None);
        assert_eq!(slider.tick_marks().count(), 0);

        // Even a mis-delivered start changes nothing.
        assert!(slider.on_start(Point::new(95.0, 20.0)).is_empty());
        assert!(slider.on_move((10.0, 0.0)).is_empty());
    }

    #[test]
    fn termination_requests_are_always_denied() {
        let mut slider = measured(one_to_ten());
        assert!(!slider.on_termination_request());
        slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        assert!(slider.is_dragging());
        assert!(!slider.on_termination_request());
    }

    #[test]
    fn forced_termination_completes_like_a_release() {
        let mut slider = measured(one_to_ten());
        slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        let messages = slider.on_pointer_event(&PointerEvent::Cancel {
            translation: (UNIT, 0.0),
        });
        assert_eq!(messages, vec![Msg::Completed(3.0)]);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn disabled_freezes_the_value_but_not_the_lifecycle() {
        let mut slider = measured(one_to_ten().disabled(true));
        // Claimed away from the thumb, yet no jump happens.
        let start = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(95.0, 20.0),
        });
        assert_eq!(start, vec![Msg::Started(2.0), Msg::Changed(2.0)]);

        let moves = slider.on_pointer_event(&PointerEvent::Move {
            translation: (UNIT * 4.0, 0.0),
        });
        assert!(moves.is_empty());
        assert_eq!(slider.value(), 2.0);

        let end = slider.on_pointer_event(&PointerEvent::End {
            translation: (UNIT * 4.0, 0.0),
        });
        assert_eq!(end, vec![Msg::Completed(2.0)]);
    }

    #[test]
    fn disabling_mid_drag_freezes_further_moves() {
        let mut slider = measured(one_to_ten());
        slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        slider.on_pointer_event(&PointerEvent::Move {
            translation: (UNIT, 0.0),
        });
        assert_eq!(slider.value(), 3.0);

        let frozen = slider.config().clone().disabled(true);
        slider.set_config(frozen, Instant::now());
        let moves = slider.on_pointer_event(&PointerEvent::Move {
            translation: (UNIT * 5.0, 0.0),
        });
        assert!(moves.is_empty());
        assert_eq!(slider.value(), 3.0);
        assert!(slider.is_dragging());
    }

    #[test]
    fn reverted_drags_move_the_logical_value_backwards() {
        let mut slider = measured(
            SliderConfig::new()
                .range(0.0, 10.0)
                .step(1.0)
                .value(2.0)
                .revert(true),
        );
        assert_eq!(slider.value(), 2.0);
        // Display space mirrors: the thumb sits at ratio 0.8.
        let offset = slider.thumb_offset().unwrap();
        assert!((offset - 0.8 * 170.0).abs() < 0.001);

        slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        let messages = slider.on_pointer_event(&PointerEvent::Move {
            translation: (17.0, 0.0),
        });
        assert_eq!(messages, vec![Msg::Changed(1.0)]);
    }

    #[test]
    fn vertical_sliders_follow_the_y_axis() {
        let mut slider = wired(one_to_ten().orientation(Orientation::Vertical));
        slider.measure(Region::Container, Size::new(40.0, 200.0));
        slider.measure(Region::Track, Size::new(4.0, 190.0));
        slider.measure(Region::Thumb, Size::new(20.0, 20.0));

        slider.on_pointer_event(&PointerEvent::Start {
            location: thumb_center(&slider),
        });
        // Horizontal translation is ignored; vertical moves the value.
        let messages = slider.on_pointer_event(&PointerEvent::Move {
            translation: (500.0, UNIT * 2.0),
        });
        assert_eq!(messages, vec![Msg::Changed(4.0)]);
    }

    #[test]
    fn set_value_quantizes_clamps_and_detects_change() {
        let mut slider = measured(one_to_ten());
        assert_eq!(slider.set_value(7.4), Some(Msg::Changed(7.0)));
        assert_eq!(slider.set_value(7.0), None);
        assert_eq!(slider.set_value(25.0), Some(Msg::Changed(10.0)));
        assert_eq!(slider.set_value(-25.0), Some(Msg::Changed(1.0)));
    }

    #[test]
    fn animated_update_fires_change_only_on_completion() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0));
        let start = Instant::now();
        slider.animate_to(8.0, start);
        assert!(slider.active_transition().is_some());

        assert_eq!(slider.tick(start + Duration::from_millis(75)), None);
        let mid = slider.value();
        assert!(mid > 0.0 && mid < 8.0);

        let done = slider.tick(start + Duration::from_millis(150));
        assert_eq!(done, Some(Msg::Changed(8.0)));
        assert_eq!(slider.value(), 8.0);
        assert!(slider.active_transition().is_none());
    }

    #[test]
    fn a_new_drag_cancels_the_running_transition() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0).step(1.0));
        let start = Instant::now();
        let token = slider.animate_to(8.0, start);
        slider.tick(start + Duration::from_millis(50));
        assert_eq!(slider.active_transition(), Some(token));

        let claim = slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(95.0, 20.0),
        });
        assert_eq!(slider.active_transition(), None);
        // Only the claim's own messages; nothing from the dead transition.
        assert_eq!(claim, vec![Msg::Started(5.0), Msg::Changed(5.0)]);

        // Later ticks are inert; changes now come from the drag alone.
        assert_eq!(slider.tick(start + Duration::from_secs(2)), None);
        let moves = slider.on_pointer_event(&PointerEvent::Move {
            translation: (UNIT, 0.0),
        });
        assert_eq!(moves, vec![Msg::Changed(6.0)]);
    }

    #[test]
    fn superseding_transitions_drop_the_older_token() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0));
        let start = Instant::now();
        let first = slider.animate_to(4.0, start);
        let second = slider.animate_to(9.0, start + Duration::from_millis(30));
        assert_ne!(first, second);
        assert_eq!(slider.active_transition(), Some(second));

        let done = slider.tick(start + Duration::from_millis(300));
        assert_eq!(done, Some(Msg::Changed(9.0)));
    }

    #[test]
    fn config_value_prop_update_follows_the_animation_policy() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0));
        let now = Instant::now();

        let immediate = slider.config().clone().value(4.0);
        assert_eq!(slider.set_config(immediate, now), Some(Msg::Changed(4.0)));

        let mut animated = slider.config().clone().value(9.0);
        animated.animation.animate_transitions = true;
        assert_eq!(slider.set_config(animated, now), None);
        assert!(slider.active_transition().is_some());
        assert_eq!(
            slider.tick(now + Duration::from_millis(150)),
            Some(Msg::Changed(9.0))
        );
    }

    #[test]
    fn shrinking_the_range_rebounds_the_stored_value() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0).value(8.0));
        let narrowed = slider.config().clone().range(0.0, 5.0);
        assert_eq!(
            slider.set_config(narrowed, Instant::now()),
            Some(Msg::Changed(5.0))
        );
        assert_eq!(slider.value(), 5.0);
    }

    #[test]
    fn non_finite_range_is_absorbed_not_fatal() {
        // Construction collapses the range onto its one usable bound.
        let broken: Slider<Msg> = slider(SliderConfig::new().range(f32::NAN, 10.0).value(2.0));
        assert_eq!(broken.value(), 10.0);

        // The same poisoned range arriving through a config pass re-bounds
        // the stored value instead of failing.
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0).value(4.0));
        let poisoned = slider.config().clone().range(f32::NAN, 10.0);
        assert_eq!(
            slider.set_config(poisoned, Instant::now()),
            Some(Msg::Changed(10.0))
        );
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn range_changes_cancel_running_transitions() {
        let mut slider = measured(SliderConfig::new().range(0.0, 10.0));
        let now = Instant::now();
        slider.animate_to(9.0, now);
        let narrowed = slider.config().clone().range(0.0, 5.0);
        assert_eq!(slider.set_config(narrowed, now), None);
        assert!(slider.active_transition().is_none());
        assert_eq!(slider.tick(now + Duration::from_secs(1)), None);
        assert!(slider.value() <= 5.0);
    }

    #[test]
    fn emitted_values_stay_in_range_and_on_grid() {
        let mut slider = measured(SliderConfig::new().range(1.0, 10.0).step(2.0));
        let mut emitted = Vec::new();
        emitted.extend(slider.on_pointer_event(&PointerEvent::Start {
            location: Point::new(40.0, 20.0),
        }));
        for px in 0..20 {
            emitted.extend(slider.on_pointer_event(&PointerEvent::Move {
                translation: (px as f32 * 13.0, 0.0),
            }));
        }
        emitted.extend(slider.on_pointer_event(&PointerEvent::End {
            translation: (260.0, 0.0),
        }));

        for message in emitted {
            let value = match message {
                Msg::Started(v) | Msg::Changed(v) | Msg::Completed(v) => v,
            };
            assert!((1.0..=10.0).contains(&value), "{value} out of range");
            let steps = (value - 1.0) / 2.0;
            assert!(
                (steps - steps.round()).abs() < 0.001 || value == 10.0,
                "{value} off the grid"
            );
        }
    }

    #[test]
    fn ticks_appear_once_measured_on_a_stepped_slider() {
        let config = SliderConfig::new()
            .range(0.0, 10.0)
            .step(2.0)
            .tick_marks(true);
        let mut slider = wired(config);
        assert_eq!(slider.tick_marks().count(), 0);

        slider.measure(Region::Container, Size::new(200.0, 40.0));
        slider.measure(Region::Track, Size::new(190.0, 4.0));
        slider.measure(Region::Thumb, Size::new(20.0, 20.0));
        assert_eq!(slider.tick_marks().count(), 6);
    }
}
