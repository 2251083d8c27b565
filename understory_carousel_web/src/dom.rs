// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_carousel::CarouselHost;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::capabilities::TransitionFlavor;
use crate::style::translate_declarations;

/// [`CarouselHost`] over a container element whose first element child is the
/// slide strip.
#[derive(Clone, Debug)]
pub(crate) struct DomHost {
    container: HtmlElement,
    strip: HtmlElement,
    transitions: Option<TransitionFlavor>,
}

impl DomHost {
    /// Returns `None` if the container has no element child to use as strip.
    ///
    /// `transitions` selects the vendor-prefixed properties written on moves.
    pub(crate) fn new(
        container: HtmlElement,
        transitions: Option<TransitionFlavor>,
    ) -> Option<Self> {
        let strip = container
            .first_element_child()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            container,
            strip,
            transitions,
        })
    }

    pub(crate) fn strip(&self) -> &HtmlElement {
        &self.strip
    }

    pub(crate) fn slide_element(&self, index: usize) -> Option<HtmlElement> {
        let index = u32::try_from(index).ok()?;
        self.strip.children().item(index)?.dyn_into().ok()
    }
}

/// Layout width, falling back to `offsetWidth` when the element has no
/// bounding box yet.
fn rendered_width(element: &HtmlElement) -> f64 {
    let width = element.get_bounding_client_rect().width();
    if width > 0.0 {
        width
    } else {
        f64::from(element.offset_width())
    }
}

impl CarouselHost for DomHost {
    fn slide_count(&self) -> usize {
        self.strip.children().length() as usize
    }

    fn slide_offset_left(&self, index: usize) -> f64 {
        self.slide_element(index)
            .map_or(0.0, |slide| f64::from(slide.offset_left()))
    }

    fn viewport_width(&self) -> f64 {
        rendered_width(&self.container)
    }

    fn content_width(&self) -> f64 {
        rendered_width(&self.strip)
    }

    fn mark_slide_index(&mut self, index: usize) {
        let Some(slide) = self.slide_element(index) else {
            return;
        };
        if let Err(err) = slide.set_attribute("data-index", &index.to_string()) {
            log::warn!("could not tag slide {index}: {err:?}");
        }
    }

    fn translate(&mut self, offset: f64, duration_ms: u32) {
        let style = self.strip.style();
        for (property, value) in translate_declarations(offset, duration_ms, self.transitions) {
            if let Err(err) = style.set_property(property, &value) {
                log::warn!("could not set {property}: {err:?}");
            }
        }
    }
}
