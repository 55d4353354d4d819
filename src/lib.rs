//! trackbar - A headless range-slider core
//!
//! This crate turns layout measurements, pointer gestures, and configuration
//! into a clamped, quantized value plus everything a renderer needs to draw:
//! thumb offset, track fill, tick marks, and animated transitions. It never
//! draws and never reads the clock; the host supplies both.

mod animation;
mod callback;
mod config;
mod geometry;
mod gesture;
mod slider;
mod ticks;
mod track;

pub use animation::{AnimationType, Easing, SpringParams, TimingParams, TransitionId};
pub use callback::Callback;
pub use config::{
    AnimationConfig, Color, ConfigError, Orientation, SliderConfig, DEFAULT_THUMB_SIZE,
    DEFAULT_TRACK_THICKNESS,
};
pub use geometry::{GeometrySnapshot, GeometryTracker, Point, Rect, Region, Size};
pub use gesture::{DragState, GestureResponder, PointerEvent};
pub use slider::{slider, Slider};
pub use ticks::{TickMarks, TICK_SIZE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animation::{AnimationType, TransitionId};
    pub use crate::config::{AnimationConfig, Orientation, SliderConfig};
    pub use crate::geometry::{Point, Region, Size};
    pub use crate::gesture::{GestureResponder, PointerEvent};
    pub use crate::slider::{slider, Slider};
}
