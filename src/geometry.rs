//! Geometry primitives and layout-measurement tracking.
//!
//! Sizes for the container, track, and thumb regions arrive from the host as
//! independent layout notifications, in any order and possibly repeated. The
//! tracker merges them and publishes a complete [`GeometrySnapshot`] only once
//! every region has reported at least once; downstream position math never
//! sees a partial snapshot.

use serde::{Deserialize, Serialize};

/// A point in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// An axis-aligned rectangle in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The independently measured regions of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The outer widget bounds.
    Container,
    /// The groove the thumb travels along.
    Track,
    /// The draggable handle.
    Thumb,
}

/// A complete set of measured region sizes.
///
/// Only ever constructed once all three regions have reported, and replaced
/// wholesale on later reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub container: Size,
    pub track: Size,
    pub thumb: Size,
}

/// Accumulates per-region layout measurements until a full snapshot exists.
///
/// Readiness is one-way: once all regions have reported, later reports
/// replace the snapshot but never make it unavailable again.
#[derive(Debug, Default)]
pub struct GeometryTracker {
    container: Option<Size>,
    track: Option<Size>,
    thumb: Option<Size>,
    snapshot: Option<GeometrySnapshot>,
}

impl GeometryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a layout measurement for one region.
    ///
    /// Re-reports of an unchanged size are suppressed. Returns `true` when
    /// the published snapshot changed, including the initial transition to
    /// ready; partial updates before readiness return `false` because
    /// nothing observable changed yet.
    pub fn report(&mut self, region: Region, size: Size) -> bool {
        // Layout systems occasionally deliver transient negative extents.
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        let slot = match region {
            Region::Container => &mut self.container,
            Region::Track => &mut self.track,
            Region::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            return false;
        }
        *slot = Some(size);

        let (Some(container), Some(track), Some(thumb)) =
            (self.container, self.track, self.thumb)
        else {
            return false;
        };
        let was_ready = self.snapshot.is_some();
        self.snapshot = Some(GeometrySnapshot {
            container,
            track,
            thumb,
        });
        if !was_ready {
            log::debug!(
                "geometry complete: container {}x{}, track {}x{}, thumb {}x{}",
                container.width,
                container.height,
                track.width,
                track.height,
                thumb.width,
                thumb.height
            );
        }
        true
    }

    /// Whether every region has been measured at least once.
    pub fn is_ready(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The current complete snapshot, if ready.
    pub fn snapshot(&self) -> Option<&GeometrySnapshot> {
        self.snapshot.as_ref()
    }
}
