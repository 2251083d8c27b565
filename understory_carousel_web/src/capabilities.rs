// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time capability negotiation.
//!
//! The browser is probed once when a carousel is attached. The result picks a
//! single [`Strategy`]; event handlers never re-check what the engine supports.

/// Which transition implementation the engine exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionFlavor {
    /// Unprefixed `transition` support.
    Standard,
    /// WebKit-prefixed transitions.
    Webkit,
    /// Gecko-prefixed transitions.
    Moz,
    /// Presto-prefixed transitions.
    Opera,
    /// Trident-prefixed transitions.
    Ms,
}

impl TransitionFlavor {
    /// Style properties probed in order, with the flavor each one implies.
    pub const STYLE_PROBES: [(&'static str, Self); 5] = [
        ("transitionProperty", Self::Standard),
        ("WebkitTransition", Self::Webkit),
        ("MozTransition", Self::Moz),
        ("OTransition", Self::Opera),
        ("msTransition", Self::Ms),
    ];

    /// Returns the first flavor whose probe property exists on an element's
    /// style object.
    pub fn detect(mut has_style_property: impl FnMut(&str) -> bool) -> Option<Self> {
        Self::STYLE_PROBES
            .iter()
            .find(|&&(property, _)| has_style_property(property))
            .map(|&(_, flavor)| flavor)
    }

    /// Vendor-prefixed `transition-duration` and `transform` properties this
    /// flavor needs, or `None` when the unprefixed ones drive the transition.
    #[must_use]
    pub fn prefixed_properties(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Standard => None,
            Self::Webkit => Some(("-webkit-transition-duration", "-webkit-transform")),
            Self::Moz => Some(("-moz-transition-duration", "-moz-transform")),
            Self::Opera => Some(("-o-transition-duration", "-o-transform")),
            Self::Ms => Some(("-ms-transition-duration", "-ms-transform")),
        }
    }

    /// Event names this flavor fires when a transition finishes.
    ///
    /// Presto changed the casing between releases, so both spellings are
    /// listened for.
    #[must_use]
    pub fn end_events(self) -> &'static [&'static str] {
        match self {
            Self::Standard | Self::Moz => &["transitionend"],
            Self::Webkit => &["webkitTransitionEnd"],
            Self::Opera => &["oTransitionEnd", "otransitionend"],
            Self::Ms => &["msTransitionEnd"],
        }
    }
}

/// What the host environment supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// `addEventListener` is available.
    pub event_listeners: bool,
    /// The window exposes touch events.
    pub touch: bool,
    /// CSS transitions are available.
    pub transitions: Option<TransitionFlavor>,
}

/// How a carousel is wired to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Listen for touch, transition-end and resize events.
    EventDriven {
        /// Attach touch listeners to the strip.
        touch: bool,
        /// Transition-end event names to listen for; empty without transitions.
        transition_end: &'static [&'static str],
    },
    /// No listener registration: only relayout on `window.onresize`.
    ResizeOnly,
}

impl Capabilities {
    /// Picks the wiring strategy for these capabilities.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        if !self.event_listeners {
            return Strategy::ResizeOnly;
        }
        Strategy::EventDriven {
            touch: self.touch,
            transition_end: self
                .transitions
                .map(TransitionFlavor::end_events)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capabilities, Strategy, TransitionFlavor};

    #[test]
    fn detect_prefers_the_unprefixed_property() {
        let flavor = TransitionFlavor::detect(|_| true);
        assert_eq!(flavor, Some(TransitionFlavor::Standard));
    }

    #[test]
    fn detect_falls_through_to_prefixed_properties() {
        let flavor = TransitionFlavor::detect(|p| p == "OTransition" || p == "msTransition");
        assert_eq!(flavor, Some(TransitionFlavor::Opera));
        assert_eq!(TransitionFlavor::detect(|_| false), None);
    }

    #[test]
    fn each_flavor_has_an_end_event() {
        for (_, flavor) in TransitionFlavor::STYLE_PROBES {
            assert!(!flavor.end_events().is_empty());
        }
        assert_eq!(
            TransitionFlavor::Webkit.end_events(),
            &["webkitTransitionEnd"]
        );
    }

    #[test]
    fn prefixed_flavors_name_their_own_properties() {
        assert_eq!(TransitionFlavor::Standard.prefixed_properties(), None);
        assert_eq!(
            TransitionFlavor::Moz.prefixed_properties(),
            Some(("-moz-transition-duration", "-moz-transform"))
        );
        assert_eq!(
            TransitionFlavor::Opera.prefixed_properties(),
            Some(("-o-transition-duration", "-o-transform"))
        );
    }

    #[test]
    fn modern_touch_browser_is_event_driven() {
        let caps = Capabilities {
            event_listeners: true,
            touch: true,
            transitions: Some(TransitionFlavor::Standard),
        };
        assert_eq!(
            caps.strategy(),
            Strategy::EventDriven {
                touch: true,
                transition_end: &["transitionend"],
            }
        );
    }

    #[test]
    fn desktop_without_transitions_still_handles_resize() {
        let caps = Capabilities {
            event_listeners: true,
            touch: false,
            transitions: None,
        };
        assert_eq!(
            caps.strategy(),
            Strategy::EventDriven {
                touch: false,
                transition_end: &[],
            }
        );
    }

    #[test]
    fn no_listener_registration_falls_back_to_resize_only() {
        let caps = Capabilities {
            event_listeners: false,
            touch: true,
            transitions: Some(TransitionFlavor::Webkit),
        };
        assert_eq!(caps.strategy(), Strategy::ResizeOnly);
    }
}
