use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::effects::reveal::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Send us a message and a member of our team will reply within two working days."}</p>
            </section>

            <section class="contact-section">
                <div class="info-cards">
                    <Reveal class={classes!("info-card")}>
                        <h3>{"Visit"}</h3>
                        <p>{"Zoorld Wildlife Park, 12 Savanna Road"}</p>
                    </Reveal>
                    <Reveal class={classes!("info-card")}>
                        <h3>{"Call"}</h3>
                        <p>{"+1 555 0142 (9:00 - 17:00)"}</p>
                    </Reveal>
                    <Reveal class={classes!("info-card")}>
                        <h3>{"Group Bookings"}</h3>
                        <p>{"Schools and groups of 15 or more get reduced rates."}</p>
                    </Reveal>
                </div>

                <ContactForm />
            </section>

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                }
                .contact-section {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .contact-form .form-group {
                    margin-bottom: 1.2rem;
                    display: flex;
                    flex-direction: column;
                }
                .form-control {
                    padding: 0.7rem;
                    border: 1px solid rgba(93, 64, 55, 0.3);
                    border-radius: 8px;
                }
                .success-message h3 {
                    color: #3d7a5f;
                }
                @media (max-width: 768px) {
                    .contact-section {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
