// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel_web --heading-base-level=0

//! Browser binding for `understory_carousel`.
//!
//! On `wasm32` this crate exports a `touchSlide(container, options)` function
//! through `wasm-bindgen`. The container's first element child is the strip
//! and the strip's element children are the slides. Slide geometry is read
//! from `offsetLeft` and the rendered widths, and the strip is moved with an
//! inline `transform: translate(..)` plus a matching transition duration.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(container: web_sys::HtmlElement) {
//!     let options = wasm_bindgen::JsValue::UNDEFINED;
//!     if let Some(carousel) = understory_carousel_web::touch_slide(Some(container), options) {
//!         carousel.next();
//!     }
//! }
//! ```
//!
//! The pieces that do not need a browser are public and usable on any target:
//!
//! - [`capabilities`]: one-time feature detection reduced to a wiring
//!   [`Strategy`](capabilities::Strategy).
//! - [`options`]: JavaScript option values mapped to
//!   [`CarouselOptions`](understory_carousel::CarouselOptions).
//! - [`style`]: the CSS declarations written on every move.
//! - [`wiring`]: the binding's listener ownership and tick bookkeeping.
//!
//! Notes:
//! - Installed listeners own the carousel, so it keeps working after the
//!   returned handle is garbage collected. `destroy()` detaches it.
//! - Touch listeners for `touchmove` and `touchend` are only attached while a
//!   gesture is being tracked.
//! - `callback` and `transitionEnd` hooks run from a zero-delay timeout, never
//!   from inside the call or event that caused them.
//! - Without `addEventListener` the carousel only relayouts from
//!   `window.onresize`.

pub mod capabilities;
pub mod options;
pub mod style;
pub mod wiring;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use binding::{TouchSlide, touch_slide};
