// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from a JavaScript options object to [`CarouselOptions`].

use understory_carousel::{CarouselOptions, EdgeMode};

/// Raw option values read from a JavaScript object.
///
/// Numbers are kept as JavaScript numbers; flags are already reduced to
/// truthiness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JsOptionValues {
    /// `index`
    pub index: Option<f64>,
    /// `speed`, in milliseconds.
    pub speed: Option<f64>,
    /// `space`
    pub space: Option<f64>,
    /// `disableScroll`
    pub disable_scroll: bool,
    /// `stopPropagation`
    pub stop_propagation: bool,
    /// `wrap`
    pub wrap: bool,
}

impl JsOptionValues {
    /// Converts to carousel options.
    ///
    /// Missing, zero, negative and non-finite numbers fall back to the
    /// defaults, so `speed: 0` still animates over the default duration.
    #[must_use]
    pub fn to_options(&self) -> CarouselOptions {
        let defaults = CarouselOptions::default();
        CarouselOptions {
            index: positive(self.index).map_or(defaults.index, to_usize),
            speed_ms: positive(self.speed).map_or(defaults.speed_ms, to_u32),
            space: positive(self.space).unwrap_or(defaults.space),
            disable_scroll: self.disable_scroll,
            stop_propagation: self.stop_propagation,
            edge: if self.wrap {
                EdgeMode::Wrap
            } else {
                EdgeMode::Stop
            },
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Input is finite and positive; fractional indices truncate like array access in JS."
)]
fn to_usize(value: f64) -> usize {
    value as usize
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Input is finite and positive; durations past u32::MAX saturate."
)]
fn to_u32(value: f64) -> u32 {
    value as u32
}

#[cfg(test)]
mod tests {
    use understory_carousel::{CarouselOptions, EdgeMode};

    use super::JsOptionValues;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(
            JsOptionValues::default().to_options(),
            CarouselOptions::default()
        );
    }

    #[test]
    fn falsy_numbers_fall_back_to_defaults() {
        let values = JsOptionValues {
            index: Some(-1.0),
            speed: Some(0.0),
            space: Some(f64::NAN),
            ..JsOptionValues::default()
        };
        assert_eq!(values.to_options(), CarouselOptions::default());
    }

    #[test]
    fn provided_values_are_used() {
        let values = JsOptionValues {
            index: Some(3.0),
            speed: Some(450.0),
            space: Some(4.0),
            disable_scroll: true,
            stop_propagation: true,
            wrap: true,
        };
        let options = values.to_options();
        assert_eq!(options.index, 3);
        assert_eq!(options.speed_ms, 450);
        assert_eq!(options.space, 4.0);
        assert!(options.disable_scroll);
        assert!(options.stop_propagation);
        assert_eq!(options.edge, EdgeMode::Wrap);
    }

    #[test]
    fn fractional_index_truncates() {
        let values = JsOptionValues {
            index: Some(2.7),
            ..JsOptionValues::default()
        };
        assert_eq!(values.to_options().index, 2);
    }
}
