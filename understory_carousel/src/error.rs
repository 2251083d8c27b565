// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a carousel operation did not change the active slide.
///
/// None of these are fatal. The widget stays in its previous state, and
/// callers that only care about the visible result can ignore them.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Setup found fewer than two slides, so the carousel stays inert.
    #[error("carousel needs at least 2 slides, found {count}")]
    TooFewSlides {
        /// Number of slides reported by the host.
        count: usize,
    },
    /// The carousel has not been set up successfully.
    #[error("carousel is inert")]
    Inert,
    /// The requested slide index is past the last slide.
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides in the position table.
        len: usize,
    },
    /// `next`/`prev` was asked to move past the first or last slide with
    /// [`EdgeMode::Stop`](crate::EdgeMode::Stop).
    #[error("already at the edge of the carousel")]
    AtEdge,
}
