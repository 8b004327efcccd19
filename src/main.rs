use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod contact {
    pub mod controller;
    pub mod errors;
    pub mod form;
    pub mod rules;
    pub mod transport;
}
mod effects {
    pub mod counter;
    pub mod loader;
    pub mod reveal;
    pub mod scroll;
    pub mod smooth_scroll;
    pub mod visibility;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod gallery;
    pub mod home;
}

use effects::loader::PageLoader;
use effects::scroll::{is_scrolled, use_scroll_top};
use pages::{
    contact::Contact,
    faq::Faq,
    gallery::Gallery,
    home::Home,
};

#[derive(Clone, Copy, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/gallery")]
    Gallery,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Gallery, "Gallery"),
    (Route::Faq, "FAQ"),
    (Route::Contact, "Contact"),
];

/// Route whose nav link is highlighted; unknown paths fall back to home.
pub fn highlighted_route(current: Option<Route>) -> Route {
    match current {
        Some(Route::NotFound) | None => Route::Home,
        Some(route) => route,
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <section class="page-hero">
                    <h1>{"This enclosure is empty"}</h1>
                    <Link<Route> to={Route::Home} classes="hero-cta">{"Back to the park"}</Link<Route>>
                </section>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_top = use_scroll_top();
    let active = highlighted_route(use_route::<Route>());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks still navigate; this only collapses the mobile menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav id="mainNav" class={classes!("navbar", is_scrolled(scroll_top).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Zoorld"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("navbar-collapse", (*menu_open).then(|| "show"))}>
                    <div class="navbar-nav">
                        { for NAV_LINKS.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={*route}
                                    classes={classes!("nav-link", (*route == active).then(|| "active"))}
                                >
                                    {*label}
                                </Link<Route>>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <PageLoader />
            <Nav />
            <Switch<Route> render={switch} />
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #3e2c23;
                    background: #fffaf3;
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 1.2rem 0;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(61, 122, 95, 0.95);
                    padding: 0.6rem 0;
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.15);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0 2rem;
                }
                .nav-logo, .nav-link {
                    color: #fff;
                    text-decoration: none;
                }
                .navbar-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link.active {
                    border-bottom: 2px solid #f5d08a;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    flex-direction: column;
                    gap: 4px;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .navbar-collapse {
                        display: none;
                    }
                    .navbar-collapse.show {
                        display: block;
                    }
                    .navbar-nav {
                        flex-direction: column;
                    }
                }
                .page-hero {
                    padding: 4rem 2rem 2rem;
                    text-align: center;
                }
                .fade-in-section {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .fade-in-section.is-visible {
                    opacity: 1;
                    transform: none;
                }
                .page-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fffaf3;
                    transition: opacity 0.5s ease;
                }
                .page-loader.hidden {
                    opacity: 0;
                    pointer-events: none;
                }
                .loader-paw {
                    font-size: 3rem;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn welcome_banner() {
    gloo_console::log!("%c🦁 Welcome to Zoorld! 🦁", "font-size: 24px; color: #8b7355; font-weight: bold;");
    gloo_console::log!("%cPremium Wildlife Experience", "font-size: 14px; color: #3d7a5f;");
    gloo_console::log!("%cBuilt with ❤️ for wildlife conservation", "font-size: 12px; color: #5d4037;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::error!("error initializing log");
    }

    welcome_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
