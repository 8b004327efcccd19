use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::timings;

fn current_scroll_top() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[hook]
pub fn use_scroll_top() -> f64 {
    let scroll_top = use_state_eq(current_scroll_top);

    {
        let scroll_top = scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        scroll_top.set(current_scroll_top());
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::debug!("Could not attach scroll listener");
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_top
}

pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > timings::NAV_SCROLL_THRESHOLD
}

/// `background-position` of the hero for the given scroll offset.
pub fn parallax_position(scroll_top: f64) -> String {
    format!("center {}px", scroll_top * timings::PARALLAX_FACTOR)
}
