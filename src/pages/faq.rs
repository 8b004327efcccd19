use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let opening = !*is_open;
            log::debug!("Accordion item {}", if opening { "shown" } else { "hidden" });
            is_open.set(opening);
        })
    };

    html! {
        <div class="accordion-item">
            <h2 class="accordion-header">
                <button class={classes!("accordion-button", (*is_open).then(|| "active"))} onclick={toggle}>
                    <span class="question-text">{&props.question}</span>
                    <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
                </button>
            </h2>
            <div class={classes!("accordion-collapse", (*is_open).then(|| "show"))}>
                <div class="accordion-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="page-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before your visit to Zoorld"}</p>
            </section>

            <section class="faq-section accordion">
                <h2>{"Planning Your Visit"}</h2>

                <FaqItem question="What are the opening hours?">
                    <p>{"The park is open every day from 9:00 to 18:00, with last entry at 16:30. Summer evenings run until 21:00 on Fridays and Saturdays."}</p>
                </FaqItem>

                <FaqItem question="Can I buy tickets at the gate?">
                    <p>{"Yes, but online tickets skip the queue and are 10% cheaper. Children under three always enter free."}</p>
                </FaqItem>

                <FaqItem question="Is the park accessible by wheelchair?">
                    <p>{"All main paths are step-free and wheelchairs can be borrowed at the entrance free of charge."}</p>
                </FaqItem>

                <h2>{"Animals & Conservation"}</h2>

                <FaqItem question="When are the feeding times?">
                    <ul>
                        <li><strong>{"Lions:"}</strong>{" 11:30 at the savanna overlook"}</li>
                        <li><strong>{"Penguins:"}</strong>{" 14:00 at the coastal pool"}</li>
                        <li><strong>{"Giraffes:"}</strong>{" 15:30 on the feeding platform"}</li>
                    </ul>
                </FaqItem>

                <FaqItem question="How does my visit support conservation?">
                    <p>{"A fifth of every ticket funds our breeding programmes and field projects protecting habitats in East Africa and Southeast Asia."}</p>
                </FaqItem>

                <FaqItem question="Can I adopt an animal?">
                    <p>{"Symbolic adoptions start at 35€ a year and include a certificate, a photo pack and an invitation to our annual keeper day."}</p>
                </FaqItem>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .accordion-item {
                    border-bottom: 1px solid rgba(93, 64, 55, 0.2);
                }
                .accordion-button {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    padding: 1.2rem 0;
                    font-size: 1.1rem;
                    color: #5d4037;
                    cursor: pointer;
                    text-align: left;
                }
                .accordion-button.active {
                    color: #3d7a5f;
                    font-weight: 600;
                }
                .accordion-collapse {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s ease;
                }
                .accordion-collapse.show {
                    max-height: 600px;
                }
                .accordion-body {
                    padding-bottom: 1.2rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
