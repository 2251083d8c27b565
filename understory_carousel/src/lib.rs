// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless touch-swipe carousel.
//!
//! A carousel shows one window onto a horizontal strip of slides. This crate
//! decides which slide is active and how far the strip should be translated:
//!
//! - [`gesture`]: single-finger swipe recognition with a one-time
//!   scroll-versus-swipe decision and a distance/speed commit rule.
//! - [`PositionTable`]: per-slide offsets measured from the first slide, and
//!   the rule that clamps requests to the end of the content.
//! - [`ticks`]: a FIFO queue for work deferred to the next turn of the host's
//!   event loop.
//! - [`Carousel`]: the controller tying these together behind `next`, `prev`
//!   and `slide`.
//!
//! It does **not** touch any UI toolkit. Hosts implement [`CarouselHost`] to
//! report slide geometry and apply the strip translation (for example as an
//! inline CSS transform with a transition duration), forward touch, resize and
//! transition-end input to the `on_*` methods, and apply the returned
//! [`EventResponse`] to the native event. User notifications come back as
//! [`CarouselEvent`] values from [`Carousel::run_tick`], never from inside the
//! call that caused them.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselEvent, CarouselHost, CarouselOptions};
//!
//! // Five 100px slides behind a 100px window.
//! struct Strip {
//!     translation: f64,
//! }
//!
//! impl CarouselHost for Strip {
//!     fn slide_count(&self) -> usize {
//!         5
//!     }
//!     fn slide_offset_left(&self, index: usize) -> f64 {
//!         index as f64 * 100.0
//!     }
//!     fn viewport_width(&self) -> f64 {
//!         100.0
//!     }
//!     fn content_width(&self) -> f64 {
//!         500.0
//!     }
//!     fn translate(&mut self, offset: f64, _duration_ms: u32) {
//!         self.translation = offset;
//!     }
//! }
//!
//! let mut carousel = Carousel::new(Strip { translation: 0.0 }, CarouselOptions::default());
//! assert!(carousel.is_enabled());
//!
//! carousel.next().unwrap();
//! assert_eq!(carousel.index(), 1);
//! assert_eq!(carousel.host().translation, -100.0);
//!
//! // Notifications are delivered on the next tick.
//! assert_eq!(
//!     carousel.run_tick(),
//!     [CarouselEvent::Slide { index: 0 }, CarouselEvent::Slide { index: 1 }]
//! );
//! ```
//!
//! ## Swipes
//!
//! ```rust
//! # use understory_carousel::{Carousel, CarouselHost, CarouselOptions};
//! # struct Strip;
//! # impl CarouselHost for Strip {
//! #     fn slide_count(&self) -> usize { 3 }
//! #     fn slide_offset_left(&self, index: usize) -> f64 { index as f64 * 400.0 }
//! #     fn viewport_width(&self) -> f64 { 400.0 }
//! #     fn content_width(&self) -> f64 { 1200.0 }
//! #     fn translate(&mut self, _offset: f64, _duration_ms: u32) {}
//! # }
//! use kurbo::Point;
//! use understory_carousel::gesture::TouchMove;
//!
//! let mut carousel = Carousel::new(Strip, CarouselOptions::default());
//!
//! carousel.on_touch_start(Point::new(300.0, 50.0), 10_000);
//! let response = carousel.on_touch_move(TouchMove::single(Point::new(260.0, 52.0)));
//! // Horizontal drag: the host should stop the page from scrolling.
//! assert!(response.prevent_default);
//! carousel.on_touch_end(10_120);
//!
//! assert_eq!(carousel.index(), 1);
//! ```
//!
//! ## Edges
//!
//! By default `next` on the last slide and `prev` on the first are no-ops
//! that return [`CarouselError::AtEdge`]. [`EdgeMode::Wrap`] makes them cycle.
//! [`Carousel::slide`] never wraps; out-of-range targets return
//! [`CarouselError::IndexOutOfRange`] and leave everything unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod error;
mod host;
mod options;
mod positions;

pub mod gesture;
pub mod ticks;

pub use carousel::{Carousel, CarouselDebugInfo, CarouselEvent, EventResponse};
pub use error::CarouselError;
pub use host::CarouselHost;
pub use options::{CarouselOptions, DEFAULT_SPACE, DEFAULT_SPEED_MS, EdgeMode};
pub use positions::{PositionTable, Resolved, overflow_width};
