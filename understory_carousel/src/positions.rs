// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide offset table and the clamp-to-overflow resolution rule.

use alloc::vec::Vec;

/// Horizontal offset of every slide relative to the first slide's left edge.
///
/// Offsets are in the host's logical pixels. Slides laid out left to right
/// give a non-decreasing table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionTable {
    offsets: Vec<f64>,
}

/// Where a slide request lands after clamping to the scrollable range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// Index that becomes active.
    pub index: usize,
    /// Leftward translation of the strip, always `>= 0`.
    pub offset: f64,
}

impl PositionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table with offsets built from absolute left edges.
    ///
    /// Each entry becomes `lefts[i] - lefts[0]`. An empty iterator clears the
    /// table.
    pub fn rebuild(&mut self, lefts: impl IntoIterator<Item = f64>) {
        self.offsets.clear();
        let mut lefts = lefts.into_iter();
        let Some(origin) = lefts.next() else {
            return;
        };
        self.offsets.push(0.0);
        self.offsets.extend(lefts.map(|left| left - origin));

        if !self.is_monotonic() {
            log::warn!(
                "slide offsets are not left-to-right: {:?}",
                self.offsets.as_slice()
            );
        }
    }

    /// Number of slides in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the table holds no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of slide `index`, if present.
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    /// All offsets in slide order.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Returns `true` if offsets never decrease with the index.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.offsets.windows(2).all(|w| w[0] <= w[1])
    }

    /// Index of the first slide whose offset is at least `offset`.
    #[must_use]
    pub fn first_at_or_beyond(&self, offset: f64) -> Option<usize> {
        self.offsets.iter().position(|&o| o >= offset)
    }

    /// Resolves a request for slide `to` against the scrollable `overflow`.
    ///
    /// When slide `to` starts inside the scrollable range the strip moves to
    /// it exactly. Otherwise the strip stops at `overflow` and the first slide
    /// that starts at or beyond that point becomes active. Returns `None` if
    /// `to` is not in the table.
    #[must_use]
    pub fn resolve(&self, to: usize, overflow: f64) -> Option<Resolved> {
        let target = self.offset(to)?;
        let overflow = overflow.max(0.0);
        if overflow > target {
            return Some(Resolved {
                index: to,
                offset: target,
            });
        }
        // `target >= overflow` here, so the scan always finds something at or
        // before `to` in a monotonic table.
        let index = self.first_at_or_beyond(overflow).unwrap_or(to);
        Some(Resolved {
            index,
            offset: overflow,
        })
    }
}

/// Maximum leftward translation: how much wider the content is than the
/// viewport, never negative.
#[must_use]
pub fn overflow_width(content_width: f64, viewport_width: f64) -> f64 {
    (content_width - viewport_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{PositionTable, Resolved, overflow_width};

    fn equal_slides(count: usize, width: f64, origin: f64) -> PositionTable {
        let mut table = PositionTable::new();
        table.rebuild((0..count).map(|i| origin + width * i as f64));
        table
    }

    #[test]
    fn rebuild_is_relative_to_first_slide() {
        let table = equal_slides(4, 100.0, 37.0);
        assert_eq!(table.offsets(), &[0.0, 100.0, 200.0, 300.0]);
        assert!(table.is_monotonic());
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut table = equal_slides(5, 100.0, 0.0);
        table.rebuild(vec![10.0, 60.0]);
        assert_eq!(table.offsets(), &[0.0, 50.0]);

        table.rebuild(core::iter::empty());
        assert!(table.is_empty());
    }

    #[test]
    fn uneven_slides_stay_monotonic() {
        let mut table = PositionTable::new();
        table.rebuild(vec![0.0, 80.0, 80.0, 300.0, 310.0]);
        assert!(table.is_monotonic());
        assert_eq!(table.len(), 5);

        table.rebuild(vec![0.0, 100.0, 50.0]);
        assert!(!table.is_monotonic());
    }

    #[test]
    fn overflow_width_never_negative() {
        assert_eq!(overflow_width(500.0, 100.0), 400.0);
        assert_eq!(overflow_width(100.0, 400.0), 0.0);
    }

    #[test]
    fn resolve_inside_overflow_is_exact() {
        let table = equal_slides(5, 100.0, 0.0);
        assert_eq!(
            table.resolve(2, 400.0),
            Some(Resolved {
                index: 2,
                offset: 200.0
            })
        );
    }

    #[test]
    fn resolve_past_overflow_clamps_to_first_reachable_slide() {
        let table = equal_slides(5, 100.0, 0.0);
        // Viewport shows two slides; the last reachable start is slide 3.
        assert_eq!(
            table.resolve(4, 300.0),
            Some(Resolved {
                index: 3,
                offset: 300.0
            })
        );
        // Mid-slide overflow picks the next slide start.
        assert_eq!(
            table.resolve(4, 250.0),
            Some(Resolved {
                index: 3,
                offset: 250.0
            })
        );
    }

    #[test]
    fn resolve_without_overflow_always_lands_on_first_slide() {
        let table = equal_slides(3, 100.0, 0.0);
        assert_eq!(
            table.resolve(2, 0.0),
            Some(Resolved {
                index: 0,
                offset: 0.0
            })
        );
        assert_eq!(
            table.resolve(1, -50.0),
            Some(Resolved {
                index: 0,
                offset: 0.0
            })
        );
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let table = equal_slides(3, 100.0, 0.0);
        assert_eq!(table.resolve(3, 200.0), None);
        assert_eq!(PositionTable::new().resolve(0, 0.0), None);
    }

    #[test]
    fn resolve_stays_in_bounds_for_out_of_order_layouts() {
        let mut table = PositionTable::new();
        table.rebuild(vec![0.0, 400.0, 100.0]);
        assert_eq!(
            table.resolve(1, 500.0),
            Some(Resolved {
                index: 1,
                offset: 400.0
            })
        );
        assert_eq!(
            table.resolve(1, 400.0),
            Some(Resolved {
                index: 1,
                offset: 400.0
            })
        );
    }
}
