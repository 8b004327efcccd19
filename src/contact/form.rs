use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::timings;
use crate::contact::controller::{FormController, Panel, ShakeToken, SubmitDecision, Ticket};
use crate::contact::errors::SubmissionError;
use crate::contact::rules::Field;
use crate::contact::transport::{send_within, Ack, TransportHandle};
use crate::effects::visibility::Visibility;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub transport: TransportHandle,
}

pub enum ContactFormMsg {
    Input(Field, String),
    Blur(Field),
    Submit,
    ShakeEnded(ShakeToken),
    Delivered(Ticket, Result<Ack, SubmissionError>),
    FadeSettled,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelFades {
    form: Visibility,
    success: Visibility,
}

impl PanelFades {
    fn new() -> Self {
        Self {
            form: Visibility::Shown,
            success: Visibility::Hidden,
        }
    }

    fn submitted(&mut self) {
        self.form = self.form.fade_out();
    }

    /// A fade timer fired. Returns true when it started the success fade-in,
    /// which needs a timer of its own.
    fn fade_elapsed(&mut self, panel: Panel) -> bool {
        if self.form == Visibility::FadingOut && panel == Panel::Success {
            self.form = Visibility::Hidden;
            self.success = self.success.fade_in();
            true
        } else {
            self.form = self.form.settled();
            self.success = self.success.settled();
            false
        }
    }

    fn reset(&mut self) {
        self.success = Visibility::Hidden;
        self.form = self.form.fade_in();
    }
}

pub struct ContactForm {
    controller: FormController,
    fades: PanelFades,
}

impl ContactForm {
    fn schedule_fade(ctx: &Context<Self>) {
        ctx.link().send_future(async {
            TimeoutFuture::new(timings::FADE_MS).await;
            ContactFormMsg::FadeSettled
        });
    }

    fn render_field(&self, ctx: &Context<Self>, field: Field, label: &'static str) -> Html {
        let state = self.controller.field(field);
        let locked = !self.controller.submit_enabled();
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(field));

        let control = match field {
            Field::Message => html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    required=true
                    readonly={locked}
                    class={classes!("form-control", state.is_invalid().then(|| "is-invalid"))}
                    value={state.value.clone()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactFormMsg::Input(field, input.value())
                    })}
                    {onblur}
                />
            },
            _ => html! {
                <input
                    id={field.id()}
                    name={field.id()}
                    type={if field == Field::Email { "email" } else { "text" }}
                    required=true
                    readonly={locked}
                    class={classes!("form-control", state.is_invalid().then(|| "is-invalid"))}
                    value={state.value.clone()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactFormMsg::Input(field, input.value())
                    })}
                    {onblur}
                />
            },
        };

        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                {control}
                <div
                    id={field.error_slot_id()}
                    class="invalid-feedback"
                    style={if state.is_invalid() { "display: block;" } else { "display: none;" }}
                >
                    {state.error_text().unwrap_or_default()}
                </div>
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let mut controller = FormController::new();
        controller.mount();
        Self {
            controller,
            fades: PanelFades::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(field, value) => {
                self.controller.input(field, value);
                true
            }
            ContactFormMsg::Blur(field) => {
                self.controller.blur(field);
                true
            }
            ContactFormMsg::Submit => match self.controller.submit() {
                SubmitDecision::Accepted(ticket, submission) => {
                    let send = ctx.props().transport.0.send(submission);
                    ctx.link().send_future(async move {
                        let timer = TimeoutFuture::new(timings::SUBMIT_TIMEOUT_MS);
                        let result = send_within(send, timer, timings::SUBMIT_TIMEOUT_MS).await;
                        ContactFormMsg::Delivered(ticket, result)
                    });
                    true
                }
                SubmitDecision::Rejected(token) => {
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(timings::SHAKE_MS).await;
                        ContactFormMsg::ShakeEnded(token)
                    });
                    true
                }
                SubmitDecision::Ignored => false,
            },
            ContactFormMsg::ShakeEnded(token) => self.controller.end_shake(token),
            ContactFormMsg::Delivered(ticket, result) => {
                if !self.controller.complete(ticket, result) {
                    return false;
                }
                if self.controller.panel() == Panel::Success {
                    self.fades.submitted();
                    Self::schedule_fade(ctx);
                }
                true
            }
            ContactFormMsg::FadeSettled => {
                if self.fades.fade_elapsed(self.controller.panel()) {
                    Self::schedule_fade(ctx);
                }
                true
            }
            ContactFormMsg::Reset => {
                if !self.controller.reset() {
                    return false;
                }
                self.fades.reset();
                Self::schedule_fade(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_reset = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Reset);
        let loading = self.controller.shows_loader();

        html! {
            <div class="contact-form-wrapper">
                <style>
                {r#"
                    @keyframes shake {
                        0%, 100% { transform: translateX(0); }
                        10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
                        20%, 40%, 60%, 80% { transform: translateX(5px); }
                    }
                    .shake {
                        animation: shake 0.5s ease-in-out;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .form-control.is-invalid {
                        border-color: #c0392b;
                    }
                    .invalid-feedback {
                        color: #c0392b;
                        font-size: 0.85rem;
                        margin-top: 0.25rem;
                    }
                    .form-failure {
                        color: #c0392b;
                        margin-bottom: 1rem;
                    }
                    .d-none {
                        display: none !important;
                    }
                    .spinner {
                        display: inline-block;
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                "#}
                </style>
                <form
                    id="contactForm"
                    novalidate=true
                    class={classes!("contact-form", self.controller.is_shaking().then(|| "shake"))}
                    style={self.fades.form.style(timings::FADE_MS)}
                    data-state={self.controller.state().as_str()}
                    aria-busy={loading.to_string()}
                    {onsubmit}
                >
                    if let Some(failure) = self.controller.failure() {
                        <div class="form-failure">{failure.to_string()}</div>
                    }
                    {self.render_field(ctx, Field::Name, "Your Name")}
                    {self.render_field(ctx, Field::Email, "Email Address")}
                    {self.render_field(ctx, Field::Message, "Message")}
                    <button
                        id="submitBtn"
                        type="submit"
                        class="btn btn-primary"
                        disabled={!self.controller.submit_enabled()}
                    >
                        <span class={classes!("btn-text", loading.then(|| "d-none"))}>{"Send Message"}</span>
                        <span class={classes!("btn-loader", (!loading).then(|| "d-none"))}>
                            <span class="spinner"></span>{" Sending..."}
                        </span>
                    </button>
                </form>
                <div
                    id="successMessage"
                    class={classes!("success-message", self.fades.success.is_rendered().then(|| "show"))}
                    style={self.fades.success.style(timings::FADE_MS)}
                >
                    <h3>{"Thank you!"}</h3>
                    <p>{"Your message has been received. Our keepers will get back to you soon."}</p>
                    if let Some(ack) = self.controller.last_ack() {
                        <p class="ack-reference">{format!("Reference: {}", ack.reference)}</p>
                    }
                    <button id="resetFormBtn" class="btn btn-outline" onclick={on_reset}>
                        {"Submit another response"}
                    </button>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.unmount();
    }
}
