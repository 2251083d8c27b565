// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Environment a [`Carousel`](crate::Carousel) runs in.
///
/// The host owns the slide elements and the strip that contains them. It
/// reports live geometry on demand and applies the translation the carousel
/// asks for. All lengths are in the same logical pixel space.
pub trait CarouselHost {
    /// Number of slides in the strip.
    fn slide_count(&self) -> usize;

    /// Left edge of slide `index` in the strip's layout space.
    ///
    /// Only differences between slides are used, so any common origin works.
    fn slide_offset_left(&self, index: usize) -> f64;

    /// Visible width of the container.
    fn viewport_width(&self) -> f64;

    /// Full width of the strip holding all slides.
    fn content_width(&self) -> f64;

    /// Called during setup with each slide's index, for hosts that expose the
    /// index to styling or debugging hooks.
    fn mark_slide_index(&mut self, index: usize) {
        let _ = index;
    }

    /// Moves the strip so that it is shifted horizontally by `offset`
    /// (negative values move content left), animating over `duration_ms`.
    fn translate(&mut self, offset: f64, duration_ms: u32);
}
