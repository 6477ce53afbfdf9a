use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Latch decision for a single observer callback. A block that has already
/// been revealed stays revealed no matter what the viewport reports next.
pub(crate) fn should_reveal(revealed: bool, intersecting: bool, ratio: f64, threshold: f64) -> bool {
    !revealed && intersecting && ratio >= threshold
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Fraction of the block that must be visible before it animates in.
    #[prop_or(0.3)]
    pub threshold: f64,
    /// Length of the entrance transition.
    #[prop_or(800)]
    pub duration_ms: u32,
    /// Vertical offset of the hidden state.
    #[prop_or(30)]
    pub offset_px: i32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a content block and defers its entrance animation until the block
/// first occupies at least `threshold` of its own area inside the viewport.
/// The trigger is one-shot: scrolling away and back does not replay it.
///
/// If the browser has no IntersectionObserver the block is shown right away,
/// so content can never stay hidden.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |node: &NodeRef| {
                let cleanup: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => {
                        let on_intersect = {
                            let visible = visible.clone();
                            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                                move |entries: js_sys::Array, observer: IntersectionObserver| {
                                    for entry in entries.iter() {
                                        let entry: IntersectionObserverEntry =
                                            entry.unchecked_into();
                                        if should_reveal(
                                            *visible,
                                            entry.is_intersecting(),
                                            entry.intersection_ratio(),
                                            threshold,
                                        ) {
                                            visible.set(true);
                                            // Latched; nothing left to watch.
                                            observer.disconnect();
                                            break;
                                        }
                                    }
                                },
                            )
                        };

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(threshold));

                        match IntersectionObserver::new_with_options(
                            on_intersect.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(on_intersect);
                                })
                            }
                            Err(_) => {
                                // No observer available: content must never
                                // stay hidden, so skip the animation.
                                log::warn!(
                                    "IntersectionObserver unavailable, showing block immediately"
                                );
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            node.clone(),
        );
    }

    let style = if *visible {
        format!(
            "opacity: 1; transform: none; \
             transition: opacity {d}ms ease-out, transform {d}ms ease-out;",
            d = props.duration_ms
        )
    } else {
        format!(
            "opacity: 0; transform: translateY({o}px); \
             transition: opacity {d}ms ease-out, transform {d}ms ease-out;",
            o = props.offset_px,
            d = props.duration_ms
        )
    };

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::should_reveal;

    #[test]
    fn fires_once_threshold_is_reached() {
        assert!(should_reveal(false, true, 0.3, 0.3));
        assert!(should_reveal(false, true, 0.9, 0.3));
    }

    #[test]
    fn ignores_blocks_below_threshold() {
        assert!(!should_reveal(false, true, 0.1, 0.3));
        assert!(!should_reveal(false, false, 0.0, 0.3));
    }

    #[test]
    fn revealed_blocks_stay_revealed() {
        assert!(!should_reveal(true, true, 1.0, 0.3));
        assert!(!should_reveal(true, false, 0.0, 0.3));
    }

    #[test]
    fn transition_is_monotonic_over_any_event_sequence() {
        // Scroll in, out, and back in again: the latch must flip exactly once.
        let events = [
            (false, 0.0),
            (true, 0.1),
            (true, 0.45),
            (true, 1.0),
            (false, 0.0),
            (true, 0.8),
            (false, 0.0),
        ];
        let mut revealed = false;
        let mut transitions = 0;
        for (intersecting, ratio) in events {
            if should_reveal(revealed, intersecting, ratio, 0.3) {
                revealed = true;
                transitions += 1;
            }
        }
        assert!(revealed);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn never_sufficiently_visible_block_stays_hidden() {
        let mut revealed = false;
        for _ in 0..100 {
            if should_reveal(revealed, true, 0.29, 0.3) {
                revealed = true;
            }
        }
        assert!(!revealed);
    }
}
