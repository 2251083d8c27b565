// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::error::CarouselError;
use crate::gesture::{MoveResponse, SwipeDirection, SwipeTracker, TouchMove};
use crate::host::CarouselHost;
use crate::options::{CarouselOptions, EdgeMode};
use crate::positions::{PositionTable, overflow_width};
use crate::ticks::TickQueue;

/// Notification delivered to user code on a tick after the fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A slide call committed; `index` is the active slide afterwards.
    Slide {
        /// Active slide.
        index: usize,
    },
    /// The host reported that the strip's transition finished.
    TransitionEnd {
        /// Active slide when the transition finished.
        index: usize,
    },
}

/// What the host should do with the native event it just forwarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default action (page scrolling).
    pub prevent_default: bool,
    /// Stop the event from reaching ancestors.
    pub stop_propagation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    Setup,
    Notify(CarouselEvent),
}

/// Touch-swipe carousel over a horizontal strip of slides.
///
/// The carousel owns the active index, the slide position table, the swipe
/// tracker, and a queue of work deferred to the next tick. The host forwards
/// input through the `on_*` methods and calls [`Carousel::run_tick`] on a later
/// turn of its event loop whenever [`Carousel::has_pending_tick`] is `true`.
#[derive(Debug)]
pub struct Carousel<H> {
    host: H,
    options: CarouselOptions,
    positions: PositionTable,
    index: usize,
    enabled: bool,
    swipe: SwipeTracker,
    ticks: TickQueue<Deferred>,
}

impl<H: CarouselHost> Carousel<H> {
    /// Creates a carousel over `host` and runs the initial setup.
    ///
    /// With fewer than two slides the carousel stays inert; check
    /// [`Carousel::is_enabled`].
    pub fn new(host: H, options: CarouselOptions) -> Self {
        let mut carousel = Self {
            host,
            index: options.index,
            options,
            positions: PositionTable::new(),
            enabled: false,
            swipe: SwipeTracker::new(),
            ticks: TickQueue::new(),
        };
        if let Err(err) = carousel.setup() {
            log::debug!("carousel left inert: {err}");
        }
        carousel
    }

    /// Measures every slide, rebuilds the position table, and re-settles the
    /// strip on the active slide using the configured speed.
    ///
    /// With fewer than two slides the table is cleared, nothing is measured,
    /// and the carousel becomes inert. Safe to call repeatedly.
    pub fn setup(&mut self) -> Result<usize, CarouselError> {
        let count = self.host.slide_count();
        if count < 2 {
            self.enabled = false;
            self.positions.rebuild(core::iter::empty());
            return Err(CarouselError::TooFewSlides { count });
        }

        let host = &self.host;
        self.positions
            .rebuild((0..count).map(|i| host.slide_offset_left(i)));
        for i in 0..count {
            self.host.mark_slide_index(i);
        }
        self.enabled = true;
        self.index = self.index.min(count - 1);
        log::debug!(
            "carousel setup: {count} slides, offsets {:?}",
            self.positions.offsets()
        );

        self.slide(self.index, Some(self.options.speed_ms))
    }

    /// Moves to slide `to` over `speed_ms` milliseconds, or the configured
    /// speed when `None`.
    ///
    /// When slide `to` starts beyond the scrollable range the strip stops at
    /// the end of the content and the first slide visible there becomes
    /// active. Returns the new active index. On error nothing changes.
    pub fn slide(&mut self, to: usize, speed_ms: Option<u32>) -> Result<usize, CarouselError> {
        if !self.enabled {
            return Err(CarouselError::Inert);
        }
        let overflow = overflow_width(self.host.content_width(), self.host.viewport_width());
        let resolved =
            self.positions
                .resolve(to, overflow)
                .ok_or(CarouselError::IndexOutOfRange {
                    index: to,
                    len: self.positions.len(),
                })?;

        let duration = speed_ms.unwrap_or(self.options.speed_ms);
        self.host.translate(-resolved.offset, duration);
        self.index = resolved.index;
        log::debug!(
            "slide to {to} resolved to index {} at offset {} over {duration}ms",
            resolved.index,
            resolved.offset
        );

        self.ticks
            .push(Deferred::Notify(CarouselEvent::Slide { index: self.index }));
        Ok(self.index)
    }

    /// Moves to the following slide.
    pub fn next(&mut self) -> Result<usize, CarouselError> {
        if !self.enabled {
            return Err(CarouselError::Inert);
        }
        let last = self.positions.len() - 1;
        if self.index < last {
            self.slide(self.index + 1, None)
        } else {
            match self.options.edge {
                EdgeMode::Stop => Err(CarouselError::AtEdge),
                EdgeMode::Wrap => self.slide(0, None),
            }
        }
    }

    /// Moves to the preceding slide.
    pub fn prev(&mut self) -> Result<usize, CarouselError> {
        if !self.enabled {
            return Err(CarouselError::Inert);
        }
        if self.index > 0 {
            self.slide(self.index - 1, None)
        } else {
            match self.options.edge {
                EdgeMode::Stop => Err(CarouselError::AtEdge),
                EdgeMode::Wrap => self.slide(self.positions.len() - 1, None),
            }
        }
    }

    /// Handles a touch start at `position`, timestamped in milliseconds.
    pub fn on_touch_start(&mut self, position: Point, time_ms: u64) -> EventResponse {
        if self.enabled {
            self.swipe.start(position, time_ms);
        }
        self.response(false)
    }

    /// Handles a touch move during a gesture.
    pub fn on_touch_move(&mut self, touch: TouchMove) -> EventResponse {
        match self.swipe.update(touch, self.options.disable_scroll) {
            MoveResponse::Tracked { prevent_default } => self.response(prevent_default),
            MoveResponse::Ignored => self.response(false),
        }
    }

    /// Handles the end of a gesture and moves to the next or previous slide if
    /// the gesture qualifies as a swipe.
    pub fn on_touch_end(&mut self, time_ms: u64) -> EventResponse {
        if self.swipe.is_tracking() {
            let end = self.swipe.end(time_ms, self.host.viewport_width());
            log::trace!(
                "gesture ended after {}ms with delta {:?}, axis {:?}",
                end.duration_ms,
                end.delta,
                end.axis
            );
            if let Some(direction) = end.direction {
                let result = match direction {
                    SwipeDirection::Next => self.next(),
                    SwipeDirection::Prev => self.prev(),
                };
                if let Err(err) = result {
                    log::debug!("swipe {direction:?} not applied: {err}");
                }
            }
        }
        self.response(false)
    }

    /// Handles the host's transition-finished signal.
    ///
    /// Queues [`CarouselEvent::TransitionEnd`] with the current index.
    pub fn on_transition_end(&mut self) -> EventResponse {
        self.ticks
            .push(Deferred::Notify(CarouselEvent::TransitionEnd { index: self.index }));
        self.response(false)
    }

    /// Handles a viewport resize by deferring a setup to the next tick.
    ///
    /// Resizes that arrive before the deferred setup runs are folded into it.
    pub fn on_resize(&mut self) -> EventResponse {
        if !self.ticks.push_unique(Deferred::Setup) {
            log::trace!("resize folded into pending setup");
        }
        self.response(false)
    }

    /// Returns `true` if work is waiting for [`Carousel::run_tick`].
    #[must_use]
    pub fn has_pending_tick(&self) -> bool {
        !self.ticks.is_empty()
    }

    /// Runs the work queued before this call and returns the notifications to
    /// deliver, in order.
    ///
    /// Work queued while the tick runs (such as the slide notification of a
    /// deferred setup) waits for the following tick.
    pub fn run_tick(&mut self) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        for item in self.ticks.take_tick() {
            match item {
                Deferred::Setup => {
                    if let Err(err) = self.setup() {
                        log::debug!("deferred setup: {err}");
                    }
                }
                Deferred::Notify(event) => events.push(event),
            }
        }
        events
    }

    /// Active slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides measured by the last setup; zero while inert.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` once a setup found at least two slides.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while a touch gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.swipe.is_tracking()
    }

    /// The options this carousel was created with.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The slide position table.
    #[must_use]
    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns a snapshot of the carousel state for logging or inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            index: self.index,
            enabled: self.enabled,
            offsets: self.positions.offsets().to_vec(),
            overflow: overflow_width(self.host.content_width(), self.host.viewport_width()),
            tracking: self.swipe.is_tracking(),
            pending_ticks: self.ticks.len(),
        }
    }

    fn response(&self, prevent_default: bool) -> EventResponse {
        EventResponse {
            prevent_default,
            stop_propagation: self.options.stop_propagation,
        }
    }
}

/// Debug snapshot of a [`Carousel`].
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Active slide index.
    pub index: usize,
    /// Whether the carousel is interactive.
    pub enabled: bool,
    /// Slide offsets from the last setup.
    pub offsets: Vec<f64>,
    /// Current maximum leftward translation.
    pub overflow: f64,
    /// Whether a gesture is in progress.
    pub tracking: bool,
    /// Items waiting for the next tick.
    pub pending_ticks: usize,
}
