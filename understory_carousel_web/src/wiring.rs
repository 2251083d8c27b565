// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-loop bookkeeping shared by the DOM binding.
//!
//! None of this touches the browser, so it runs under the ordinary test
//! harness:
//!
//! - [`listener`]: wraps a handler so the installed listener owns the state it
//!   drives.
//! - [`GestureListeners`]: when the per-gesture `touchmove`/`touchend`
//!   listeners go on and come off.
//! - [`TickScheduler`]: at most one host tick in flight.
//! - [`TransitionEvents`] and [`drain_tick`]: pairing native transition-end
//!   events with the carousel's notifications and delivering them with no
//!   borrow held.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use understory_carousel::{Carousel, CarouselEvent, CarouselHost};

/// Wraps `f` into a listener that holds a strong reference to `state`.
///
/// An installed listener keeps the carousel alive even after the page drops
/// its handle; the state is released once the listener itself is dropped.
pub fn listener<S, E>(state: &Rc<S>, f: fn(&Rc<S>, &E)) -> impl FnMut(E) + 'static
where
    S: 'static,
    E: 'static,
{
    let state = Rc::clone(state);
    move |event: E| f(&state, &event)
}

/// Change to apply to the per-gesture touch listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    /// Add `touchmove` and `touchend` listeners.
    Attach,
    /// Remove them again.
    Detach,
}

/// Tracks whether the per-gesture listeners are installed.
///
/// `touchmove` and `touchend` are only listened for between a tracked touch
/// start and the following touch end.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureListeners {
    attached: bool,
}

impl GestureListeners {
    /// Called after a touch start; `tracking` is whether the carousel began
    /// tracking a gesture.
    pub fn after_touch_start(&mut self, tracking: bool) -> Option<ListenerChange> {
        if !tracking || self.attached {
            return None;
        }
        self.attached = true;
        Some(ListenerChange::Attach)
    }

    /// Called after a touch end, and on teardown.
    pub fn after_touch_end(&mut self) -> Option<ListenerChange> {
        if !self.attached {
            return None;
        }
        self.attached = false;
        Some(ListenerChange::Detach)
    }

    /// Whether `touchmove`/`touchend` are currently installed.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Ensures at most one host tick is scheduled at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickScheduler {
    scheduled: bool,
}

impl TickScheduler {
    /// Returns `true` if the caller should schedule a tick now.
    ///
    /// Nothing is scheduled without pending work or while a tick is already
    /// waiting to run.
    pub fn request(&mut self, has_pending: bool) -> bool {
        if self.scheduled || !has_pending {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called when the scheduled tick starts running, or when scheduling it
    /// failed.
    pub fn tick_started(&mut self) {
        self.scheduled = false;
    }

    /// Whether a tick is waiting to run.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Native transition-end events waiting for their carousel notification.
///
/// Every recorded event matches one
/// [`CarouselEvent::TransitionEnd`](understory_carousel::CarouselEvent) queued
/// at the same time, and both queues are first-in first-out.
#[derive(Clone, Debug)]
pub struct TransitionEvents<E> {
    pending: VecDeque<E>,
}

impl<E> Default for TransitionEvents<E> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<E> TransitionEvents<E> {
    /// Records a native event.
    pub fn record(&mut self, event: E) {
        self.pending.push_back(event);
    }

    /// Number of events waiting for delivery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn take_oldest(&mut self) -> Option<E> {
        self.pending.pop_front()
    }
}

/// One hook invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery<E> {
    /// `callback(index, slide)`
    Slide {
        /// Active slide.
        index: usize,
    },
    /// `transitionEnd(event, index, slide)`
    TransitionEnd {
        /// The native event, if one was recorded.
        native: Option<E>,
        /// Active slide when the transition finished.
        index: usize,
    },
}

/// Runs one carousel tick and hands each notification to `deliver`.
///
/// Neither `carousel` nor `transitions` is borrowed while `deliver` runs, so
/// hooks may call back into the carousel.
pub fn drain_tick<H, E>(
    carousel: &RefCell<Carousel<H>>,
    transitions: &RefCell<TransitionEvents<E>>,
    mut deliver: impl FnMut(Delivery<E>),
) where
    H: CarouselHost,
{
    let events = carousel.borrow_mut().run_tick();
    for event in events {
        let delivery = match event {
            CarouselEvent::Slide { index } => Delivery::Slide { index },
            CarouselEvent::TransitionEnd { index } => Delivery::TransitionEnd {
                native: transitions.borrow_mut().take_oldest(),
                index,
            },
        };
        deliver(delivery);
    }
}
