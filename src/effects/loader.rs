use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStage {
    Covering,
    Hidden,
    Removed,
}

impl LoaderStage {
    pub fn next(self) -> Self {
        match self {
            LoaderStage::Covering => LoaderStage::Hidden,
            _ => LoaderStage::Removed,
        }
    }
}

fn already_loaded(ready_state: Option<&str>) -> bool {
    ready_state.map_or(true, |state| state == "complete")
}

fn mark_body_loaded() {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let _ = body.class_list().add_1("loaded");
    }
}

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let stage = use_state_eq(|| LoaderStage::Covering);

    {
        let stage = stage.clone();
        use_effect_with_deps(
            move |_| {
                let finish = move || {
                    stage.set(LoaderStage::Covering.next());
                    mark_body_loaded();
                    spawn_local(async move {
                        TimeoutFuture::new(timings::LOADER_REMOVE_MS).await;
                        stage.set(LoaderStage::Hidden.next());
                    });
                };

                let window = web_sys::window();
                let ready_state = window
                    .as_ref()
                    .and_then(|window| window.document())
                    .map(|document| document.ready_state());

                let listener = match window {
                    Some(window) if !already_loaded(ready_state.as_deref()) => {
                        let callback = Closure::once(finish.clone());
                        match window.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref()) {
                            Ok(()) => Some((window, callback)),
                            Err(_) => {
                                log::warn!("Could not wait for page load, dropping loader");
                                finish();
                                None
                            }
                        }
                    }
                    _ => {
                        finish();
                        None
                    }
                };

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window
                            .remove_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    match *stage {
        LoaderStage::Removed => html! {},
        current => html! {
            <div class={classes!("page-loader", (current == LoaderStage::Hidden).then(|| "hidden"))}>
                <div class="loader-paw">{"🐾"}</div>
            </div>
        },
    }
}
