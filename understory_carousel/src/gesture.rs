// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition: decide whether a single-finger drag asks for the next or
//! previous slide.
//!
//! ## Usage
//!
//! 1) Call [`SwipeTracker::start`] on touch start with the touch position and a
//!    timestamp in milliseconds.
//! 2) Feed every touch move to [`SwipeTracker::update`]. The first tracked move
//!    locks the gesture to either page scrolling or a horizontal swipe.
//! 3) Call [`SwipeTracker::end`] on touch end. It returns the swipe direction
//!    if the gesture qualifies, and always returns the tracker to idle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::gesture::{SwipeDirection, SwipeTracker, TouchMove};
//!
//! let mut swipe = SwipeTracker::new();
//! swipe.start(Point::new(200.0, 100.0), 1_000);
//! swipe.update(TouchMove::single(Point::new(170.0, 102.0)), false);
//!
//! // 30px to the left in 200ms: a quick swipe toward the next slide.
//! let end = swipe.end(1_200, 400.0);
//! assert_eq!(end.direction, Some(SwipeDirection::Next));
//! assert!(!swipe.is_tracking());
//! ```

use kurbo::{Point, Vec2};

/// A gesture shorter than this (in milliseconds) counts as a quick swipe.
pub const QUICK_SWIPE_MAX_MS: u64 = 250;

/// Minimum horizontal travel, in logical pixels, for a quick swipe.
pub const QUICK_SWIPE_MIN_DISTANCE: f64 = 20.0;

/// Direction a recognized swipe asks the carousel to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: reveal the following slide.
    Next,
    /// Finger moved right: reveal the preceding slide.
    Prev,
}

/// One-time axis decision for a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// No tracked move has arrived yet.
    #[default]
    Undecided,
    /// The first move was more vertical than horizontal; the page scrolls.
    Scroll,
    /// The first move was at least as horizontal as vertical.
    Swipe,
}

/// A touch move as seen by the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchMove {
    /// Position of the first touch point.
    pub position: Point,
    /// Number of touch points currently on the surface.
    pub touch_count: usize,
    /// Pinch scale reported by the platform, if any.
    pub scale: Option<f64>,
}

impl TouchMove {
    /// A single-finger move without pinch information.
    #[must_use]
    pub fn single(position: Point) -> Self {
        Self {
            position,
            touch_count: 1,
            scale: None,
        }
    }

    /// Returns `true` for moves the tracker ignores: more than one finger, or a
    /// pinch scale other than `1.0`.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.touch_count > 1 || self.scale.is_some_and(|scale| scale != 1.0)
    }
}

/// Result of feeding a move into the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResponse {
    /// No gesture is tracked, or the move was a multi-touch/pinch move.
    Ignored,
    /// The move updated the gesture.
    Tracked {
        /// Whether the host should suppress native page scrolling.
        prevent_default: bool,
    },
}

/// Outcome of a finished gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEnd {
    /// Total movement from the start position to the last tracked move.
    pub delta: Vec2,
    /// Gesture duration in milliseconds.
    pub duration_ms: u64,
    /// Axis decision taken on the first move.
    pub axis: AxisLock,
    /// Direction to move, if the gesture committed.
    pub direction: Option<SwipeDirection>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tracking {
    start: Point,
    start_ms: u64,
    delta: Vec2,
    axis: AxisLock,
}

/// Single-finger swipe state machine: idle until [`start`](Self::start),
/// tracking until [`end`](Self::end).
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    tracking: Option<Tracking>,
}

impl SwipeTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a gesture, replacing any gesture still in progress.
    pub fn start(&mut self, position: Point, time_ms: u64) {
        self.tracking = Some(Tracking {
            start: position,
            start_ms: time_ms,
            delta: Vec2::ZERO,
            axis: AxisLock::Undecided,
        });
    }

    /// Updates the gesture with a touch move.
    ///
    /// The axis is decided on the first tracked move and kept for the rest of
    /// the gesture. `disable_scroll` asks for page-scroll suppression on every
    /// tracked move regardless of the axis.
    pub fn update(&mut self, touch: TouchMove, disable_scroll: bool) -> MoveResponse {
        let Some(tracking) = self.tracking.as_mut() else {
            return MoveResponse::Ignored;
        };
        if touch.is_multi_touch() {
            return MoveResponse::Ignored;
        }

        tracking.delta = touch.position - tracking.start;
        if tracking.axis == AxisLock::Undecided {
            tracking.axis = if tracking.delta.x.abs() < tracking.delta.y.abs() {
                AxisLock::Scroll
            } else {
                AxisLock::Swipe
            };
            log::trace!(
                "swipe axis locked to {:?} at delta {:?}",
                tracking.axis,
                tracking.delta
            );
        }

        MoveResponse::Tracked {
            prevent_default: disable_scroll || tracking.axis == AxisLock::Swipe,
        }
    }

    /// Finishes the gesture and returns to idle.
    ///
    /// `viewport_width` is the visible width of the carousel; travelling more
    /// than half of it commits regardless of speed. Ending while idle reports
    /// no movement and no direction.
    pub fn end(&mut self, time_ms: u64, viewport_width: f64) -> GestureEnd {
        let Some(tracking) = self.tracking.take() else {
            return GestureEnd {
                delta: Vec2::ZERO,
                duration_ms: 0,
                axis: AxisLock::Undecided,
                direction: None,
            };
        };

        let duration_ms = time_ms.saturating_sub(tracking.start_ms);
        let dx = tracking.delta.x;
        let direction = (tracking.axis != AxisLock::Scroll
            && is_valid_slide(duration_ms, dx, viewport_width))
        .then_some(if dx > 0.0 {
            SwipeDirection::Prev
        } else {
            SwipeDirection::Next
        });

        GestureEnd {
            delta: tracking.delta,
            duration_ms,
            axis: tracking.axis,
            direction,
        }
    }

    /// Returns `true` between [`start`](Self::start) and [`end`](Self::end).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Axis decision of the gesture in progress, if any.
    #[must_use]
    pub fn axis(&self) -> Option<AxisLock> {
        self.tracking.map(|t| t.axis)
    }

    /// Movement of the gesture in progress, if any.
    #[must_use]
    pub fn delta(&self) -> Option<Vec2> {
        self.tracking.map(|t| t.delta)
    }
}

/// Commit rule for a finished gesture.
///
/// A gesture commits when it is quick and long enough
/// (`duration_ms < 250` and `|dx| > 20`) or when it covers more than half of
/// the viewport at any speed.
#[must_use]
pub fn is_valid_slide(duration_ms: u64, dx: f64, viewport_width: f64) -> bool {
    let distance = dx.abs();
    (duration_ms < QUICK_SWIPE_MAX_MS && distance > QUICK_SWIPE_MIN_DISTANCE)
        || distance > viewport_width / 2.0
}
