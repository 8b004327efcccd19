use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::timings;

pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_visible` the first time at least `threshold` of `element` is on
/// screen, then stops observing it.
pub fn watch_first_visible(
    element: &Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityWatch> {
    let on_visible = Cell::new(Some(on_visible));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

pub fn or_now<W>(watch: Option<W>, fallback: impl FnOnce()) -> Option<W> {
    if watch.is_none() {
        fallback();
    }
    watch
}

pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * timings::STAGGER_SECS)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub stagger: Option<usize>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let visible = visible.clone();
                    watch_first_visible(&element, timings::REVEAL_THRESHOLD, move || visible.set(true))
                });
                // no IntersectionObserver, show immediately
                let watch = or_now(watch, || visible.set(true));
                move || drop(watch)
            },
            (),
        );
    }

    let style = props
        .stagger
        .map(|index| format!("transition-delay: {};", stagger_delay(index)))
        .unwrap_or_default();

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), "fade-in-section", (*visible).then(|| "is-visible"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
