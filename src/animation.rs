//! Value transitions: eased timing curves and spring physics.
//!
//! Transitions are sampled against a host-supplied clock; this module never
//! reads time on its own, which keeps behavior deterministic under test and
//! wasm-safe via `web_time`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use web_time::Instant;

/// Easing curves for timing transitions, applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    /// Slow start, fast middle, slow finish. The default for value updates.
    #[default]
    EaseInOutCubic,
    EaseOutExpo,
}

impl Easing {
    /// Apply the curve to progress `t` in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Parameters for a fixed-duration eased transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingParams {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(150),
            delay: Duration::ZERO,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// Parameters for a spring transition with unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Velocity damping coefficient.
    pub friction: f32,
    /// Stiffness pulling the value toward its target.
    pub tension: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            friction: 7.0,
            tension: 100.0,
        }
    }
}

/// Which policy an animated update uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    Spring,
    #[default]
    Timing,
}

/// Identifies one started transition for observation and cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub(crate) u64);

// Spring rest thresholds, in value units.
const REST_DISPLACEMENT: f32 = 1e-3;
const REST_VELOCITY: f32 = 1e-3;
// Cap on a single integration step so a stalled host clock cannot destabilize
// the simulation.
const MAX_SPRING_STEP: f32 = 0.1;

/// An in-flight value transition.
#[derive(Debug)]
pub struct Transition {
    id: TransitionId,
    from: f32,
    to: f32,
    started: Instant,
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    Timing(TimingParams),
    Spring {
        params: SpringParams,
        position: f32,
        velocity: f32,
        last_tick: Instant,
    },
}

impl Transition {
    pub(crate) fn timing(
        id: TransitionId,
        from: f32,
        to: f32,
        params: TimingParams,
        now: Instant,
    ) -> Self {
        Self {
            id,
            from,
            to,
            started: now,
            kind: Kind::Timing(params),
        }
    }

    pub(crate) fn spring(
        id: TransitionId,
        from: f32,
        to: f32,
        params: SpringParams,
        now: Instant,
    ) -> Self {
        Self {
            id,
            from,
            to,
            started: now,
            kind: Kind::Spring {
                params,
                position: from,
                velocity: 0.0,
                last_tick: now,
            },
        }
    }

    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// The value the transition is heading for.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance to `now` and return the sampled value plus a finished flag.
    /// Finished samples sit exactly on the target.
    pub(crate) fn sample(&mut self, now: Instant) -> (f32, bool) {
        match &mut self.kind {
            Kind::Timing(params) => {
                let elapsed = now.saturating_duration_since(self.started);
                if elapsed < params.delay {
                    return (self.from, false);
                }
                let active = elapsed - params.delay;
                if params.duration.is_zero() || active >= params.duration {
                    return (self.to, true);
                }
                let t = active.as_secs_f32() / params.duration.as_secs_f32();
                (self.from + (self.to - self.from) * params.easing.apply(t), false)
            }
            Kind::Spring {
                params,
                position,
                velocity,
                last_tick,
            } => {
                let dt = now
                    .saturating_duration_since(*last_tick)
                    .as_secs_f32()
                    .min(MAX_SPRING_STEP);
                *last_tick = now;
                if dt > 0.0 {
                    let acceleration =
                        params.tension * (self.to - *position) - params.friction * *velocity;
                    *velocity += acceleration * dt;
                    *position += *velocity * dt;
                }
                if (self.to - *position).abs() < REST_DISPLACEMENT
                    && velocity.abs() < REST_VELOCITY
                {
                    (self.to, true)
                } else {
                    (*position, false)
                }
            }
        }
    }
}
