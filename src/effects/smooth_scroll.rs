use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::timings;

/// Quadratic ease-in-out: `t` elapsed of `d`, from `b` by a change of `c`.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms >= self.duration_ms {
            return self.to;
        }
        ease_in_out_quad(elapsed_ms.max(0.0), self.from, self.to - self.from, self.duration_ms)
    }

    pub fn finished_at(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollGeneration(Rc<Cell<u64>>);

impl ScrollGeneration {
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }
}

thread_local! {
    static ACTIVE_SCROLL: ScrollGeneration = ScrollGeneration::default();
}

pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Starts an eased scroll of the window to the element with `id`, keeping it
/// clear of the fixed navbar. Returns false when the element does not exist.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };

    let from = window.scroll_y().unwrap_or(0.0);
    let nav_height = document
        .get_element_by_id("mainNav")
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);
    let to = target.get_bounding_client_rect().top() + from - nav_height;

    let animation = ScrollAnimation {
        from,
        to,
        duration_ms: timings::SMOOTH_SCROLL_MS as f64,
    };
    log::debug!("Smooth scrolling to #{} ({} -> {})", id, from, to);

    let active = ACTIVE_SCROLL.with(ScrollGeneration::clone);
    let generation = active.begin();

    spawn_local(async move {
        let started = Date::now();
        loop {
            if !active.is_current(generation) {
                break;
            }
            let elapsed = Date::now() - started;
            window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
            if animation.finished_at(elapsed) {
                break;
            }
            TimeoutFuture::new(timings::FRAME_MS).await;
        }
    });
    true
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                if scroll_to_anchor(id) {
                    e.prevent_default();
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
