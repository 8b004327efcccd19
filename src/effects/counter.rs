use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::config::timings;
use crate::effects::reveal::{or_now, watch_first_visible, Reveal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn label(self) -> String {
        match self {
            CounterFrame::Running(value) => value.to_string(),
            CounterFrame::Done(target) => format!("{}+", target),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CounterTween {
    target: u64,
    step: f64,
    current: f64,
}

impl CounterTween {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms as f64 / frame_ms.max(1) as f64).max(1.0);
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn advance(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current >= self.target as f64 {
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Running(self.current.floor() as u64)
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: u64,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    target: u64,
    active: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let text = use_state(|| "0".to_string());

    {
        let text = text.clone();
        let target = props.target;
        use_effect_with_deps(
            move |active| {
                let alive = Rc::new(Cell::new(true));
                if *active {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let mut tween = CounterTween::new(
                            target,
                            timings::COUNTER_DURATION_MS,
                            timings::FRAME_MS,
                        );
                        loop {
                            TimeoutFuture::new(timings::FRAME_MS).await;
                            if !alive.get() {
                                break;
                            }
                            let frame = tween.advance();
                            text.set(frame.label());
                            if let CounterFrame::Done(_) = frame {
                                break;
                            }
                        }
                    });
                }
                move || alive.set(false)
            },
            props.active,
        );
    }

    html! { <span class="counter" data-target={props.target.to_string()}>{(*text).clone()}</span> }
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let node = use_node_ref();
    let started = use_state_eq(|| false);

    {
        let node = node.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let started = started.clone();
                    watch_first_visible(&element, timings::STATS_THRESHOLD, move || {
                        log::debug!("Stats section visible, starting counters");
                        started.set(true);
                    })
                });
                let watch = or_now(watch, || started.set(true));
                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <section class="about-stats" ref={node}>
            { for props.stats.iter().map(|stat| html! {
                <Reveal class={classes!("stat-item")}>
                    <StatCounter target={stat.target} active={*started} />
                    <p class="stat-label">{stat.label}</p>
                </Reveal>
            }) }
        </section>
    }
}
