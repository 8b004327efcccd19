use yew::prelude::*;
use yew_router::prelude::*;

use crate::effects::counter::{Stat, StatsSection};
use crate::effects::reveal::Reveal;
use crate::effects::scroll::{parallax_position, use_scroll_top};
use crate::effects::smooth_scroll::AnchorLink;
use crate::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🦁", "Savanna Safari", "Walk the raised boardwalk over our open savanna and meet lions, zebras and giraffes."),
    ("🐧", "Coastal Pools", "Watch penguins and seals hunt through our underwater viewing tunnel."),
    ("🌿", "Rainforest Dome", "Step into 30°C humidity with free-flying birds, sloths and butterflies."),
    ("🔬", "Conservation Lab", "See our keepers and vets at work caring for endangered species."),
];

#[function_component]
pub fn Home() -> Html {
    let scroll_top = use_scroll_top();

    let stats = vec![
        Stat { target: 450, label: "Animals" },
        Stat { target: 120, label: "Species" },
        Stat { target: 35, label: "Years of Conservation" },
        Stat { target: 2, label: "Million Visitors a Year" },
    ];

    html! {
        <div class="landing-page">
            // Hero Section
            <section
                class="hero-section"
                style={format!("background-position: {};", parallax_position(scroll_top))}
            >
                <h1>{"Zoorld"}</h1>
                <p class="hero-subtitle">{"Premium wildlife experiences, closer than ever."}</p>
                <AnchorLink href="#features" class={classes!("hero-cta")}>
                    {"Explore the Park"}
                </AnchorLink>
            </section>

            // Features Section
            <section class="features-section" id="features">
                <h2>{"Four Worlds, One Day"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, (icon, title, text))| html! {
                        <Reveal class={classes!("feature-card")} stagger={Some(index)}>
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <StatsSection {stats} />

            <section class="footer-cta">
                <h2>{"Plan Your Visit"}</h2>
                <p class="subtitle">{"Questions about tickets, groups or events? Our team is happy to help."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Contact Us"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .hero-section {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    background-image: url('/assets/hero-savanna.jpg');
                    background-size: cover;
                }
                .hero-section h1 {
                    font-size: 4rem;
                    margin-bottom: 1rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 30px;
                    background: #3d7a5f;
                    color: #fff;
                    text-decoration: none;
                }
                .features-section, .footer-cta {
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 2rem auto 0;
                }
                .about-stats {
                    display: flex;
                    justify-content: space-around;
                    flex-wrap: wrap;
                    padding: 4rem 2rem;
                    background: #f5efe6;
                }
                .counter {
                    font-size: 3rem;
                    font-weight: bold;
                    color: #8b7355;
                }
                "#}
            </style>
        </div>
    }
}
