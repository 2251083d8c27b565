// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for [`Carousel`](crate::Carousel).

/// Default transition duration in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 300;

/// Default spacing hint between slides, in logical pixels.
pub const DEFAULT_SPACE: f64 = 10.0;

/// What `next`/`prev` do at the ends of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeMode {
    /// Stop at the first and last slide.
    #[default]
    Stop,
    /// `next` on the last slide goes to the first, `prev` on the first goes
    /// to the last.
    ///
    /// Explicit [`Carousel::slide`](crate::Carousel::slide) calls never wrap.
    Wrap,
}

/// Options recognized by a carousel.
///
/// All fields have defaults; build one with [`CarouselOptions::default`] and
/// the chained setters.
///
/// ```rust
/// use understory_carousel::{CarouselOptions, EdgeMode};
///
/// let options = CarouselOptions::default()
///     .with_index(2)
///     .with_speed_ms(450)
///     .with_disable_scroll(true)
///     .with_edge(EdgeMode::Wrap);
/// assert_eq!(options.index, 2);
/// assert_eq!(options.space, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Initially active slide.
    pub index: usize,
    /// Transition duration used when a slide call does not pass one.
    pub speed_ms: u32,
    /// Spacing hint between slides.
    ///
    /// Stored for hosts that lay out slides themselves; the carousel does not
    /// read it.
    pub space: f64,
    /// Suppress native page scrolling on every tracked touch move, even before
    /// the gesture is recognized as a horizontal swipe.
    pub disable_scroll: bool,
    /// Ask the host to stop propagation of every event the carousel handles.
    pub stop_propagation: bool,
    /// Behavior of `next`/`prev` at the ends of the strip.
    pub edge: EdgeMode,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            index: 0,
            speed_ms: DEFAULT_SPEED_MS,
            space: DEFAULT_SPACE,
            disable_scroll: false,
            stop_propagation: false,
            edge: EdgeMode::Stop,
        }
    }
}

impl CarouselOptions {
    /// Sets the initially active slide.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Sets the default transition duration in milliseconds.
    #[must_use]
    pub fn with_speed_ms(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    /// Sets the spacing hint.
    #[must_use]
    pub fn with_space(mut self, space: f64) -> Self {
        self.space = space;
        self
    }

    /// Enables or disables unconditional page-scroll suppression.
    #[must_use]
    pub fn with_disable_scroll(mut self, disable_scroll: bool) -> Self {
        self.disable_scroll = disable_scroll;
        self
    }

    /// Enables or disables propagation stopping for handled events.
    #[must_use]
    pub fn with_stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = stop_propagation;
        self
    }

    /// Sets the edge behavior of `next`/`prev`.
    #[must_use]
    pub fn with_edge(mut self, edge: EdgeMode) -> Self {
        self.edge = edge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CarouselOptions, DEFAULT_SPACE, DEFAULT_SPEED_MS, EdgeMode};

    #[test]
    fn defaults_match_documented_values() {
        let options = CarouselOptions::default();
        assert_eq!(options.index, 0);
        assert_eq!(options.speed_ms, DEFAULT_SPEED_MS);
        assert_eq!(options.space, DEFAULT_SPACE);
        assert!(!options.disable_scroll);
        assert!(!options.stop_propagation);
        assert_eq!(options.edge, EdgeMode::Stop);
    }

    #[test]
    fn setters_chain() {
        let options = CarouselOptions::default()
            .with_index(3)
            .with_speed_ms(120)
            .with_space(4.0)
            .with_disable_scroll(true)
            .with_stop_propagation(true)
            .with_edge(EdgeMode::Wrap);
        assert_eq!(options.index, 3);
        assert_eq!(options.speed_ms, 120);
        assert_eq!(options.space, 4.0);
        assert!(options.disable_scroll);
        assert!(options.stop_propagation);
        assert_eq!(options.edge, EdgeMode::Wrap);
    }
}
