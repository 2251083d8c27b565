// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style declarations for moving the strip.

use crate::capabilities::TransitionFlavor;

/// CSS declarations that shift the strip horizontally by `offset` pixels over
/// `duration_ms` milliseconds.
///
/// The `-webkit-` and unprefixed properties are always emitted. When the
/// detected `flavor` drives transitions through another vendor prefix, its
/// properties are emitted too, so the transition whose end event is listened
/// for is the one actually running. `translateZ(0)` keeps the strip on its own
/// compositing layer.
#[must_use]
pub fn translate_declarations(
    offset: f64,
    duration_ms: u32,
    flavor: Option<TransitionFlavor>,
) -> Vec<(&'static str, String)> {
    let duration = format!("{duration_ms}ms");
    let transform = format!("translate({offset}px,0) translateZ(0)");

    let webkit = ("-webkit-transition-duration", "-webkit-transform");
    let mut prefixed = vec![webkit];
    prefixed.extend(
        flavor
            .and_then(TransitionFlavor::prefixed_properties)
            .filter(|pair| *pair != webkit),
    );

    let mut decls = Vec::with_capacity(2 * (prefixed.len() + 1));
    for &(duration_property, _) in &prefixed {
        decls.push((duration_property, duration.clone()));
    }
    decls.push(("transition-duration", duration));
    for &(_, transform_property) in &prefixed {
        decls.push((transform_property, transform.clone()));
    }
    decls.push(("transform", transform));
    decls
}

#[cfg(test)]
mod tests {
    use super::translate_declarations;
    use crate::capabilities::TransitionFlavor;

    #[test]
    fn declarations_carry_offset_and_duration() {
        let decls = translate_declarations(-250.0, 300, Some(TransitionFlavor::Standard));
        assert_eq!(
            decls,
            [
                ("-webkit-transition-duration", "300ms".to_string()),
                ("transition-duration", "300ms".to_string()),
                (
                    "-webkit-transform",
                    "translate(-250px,0) translateZ(0)".to_string()
                ),
                ("transform", "translate(-250px,0) translateZ(0)".to_string()),
            ]
        );
    }

    #[test]
    fn webkit_flavor_is_not_duplicated() {
        let decls = translate_declarations(0.0, 300, Some(TransitionFlavor::Webkit));
        assert_eq!(decls.len(), 4);
    }

    #[test]
    fn other_vendor_flavors_drive_their_own_transition() {
        let decls = translate_declarations(-100.0, 200, Some(TransitionFlavor::Moz));
        let names: Vec<_> = decls.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "-webkit-transition-duration",
                "-moz-transition-duration",
                "transition-duration",
                "-webkit-transform",
                "-moz-transform",
                "transform",
            ]
        );
        assert!(
            decls
                .iter()
                .any(|(name, value)| *name == "-moz-transition-duration" && value == "200ms"),
            "the detected flavor's duration must be written"
        );

        for flavor in [TransitionFlavor::Opera, TransitionFlavor::Ms] {
            let decls = translate_declarations(0.0, 0, Some(flavor));
            assert_eq!(decls.len(), 6, "{flavor:?} adds one prefixed pair");
        }
    }

    #[test]
    fn fractional_offsets_are_kept() {
        let decls = translate_declarations(-12.5, 0, None);
        assert_eq!(decls[1].1, "0ms");
        assert_eq!(decls[3].1, "translate(-12.5px,0) translateZ(0)");
    }
}
