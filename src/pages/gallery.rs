use yew::prelude::*;

use crate::config::timings;
use crate::effects::reveal::Reveal;

pub fn hover_transform(hovered: bool) -> String {
    let scale = if hovered { timings::GALLERY_HOVER_SCALE } else { 1.0 };
    format!("transform: scale({});", scale)
}

#[derive(Properties, PartialEq)]
struct GalleryItemProps {
    index: usize,
    src: &'static str,
    caption: &'static str,
}

#[function_component(GalleryItem)]
fn gallery_item(props: &GalleryItemProps) -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <Reveal class={classes!("gallery-item")} stagger={Some(props.index)}>
            <div class="gallery-frame" {onmouseenter} {onmouseleave}>
                <img
                    class="gallery-image"
                    src={props.src}
                    alt={props.caption}
                    style={hover_transform(*hovered)}
                />
                <p class="gallery-caption">{props.caption}</p>
            </div>
        </Reveal>
    }
}

const PHOTOS: [(&str, &str); 6] = [
    ("/assets/gallery/lion.jpg", "Kito, our eldest lion"),
    ("/assets/gallery/giraffes.jpg", "Giraffes at the feeding platform"),
    ("/assets/gallery/penguins.jpg", "Humboldt penguins diving"),
    ("/assets/gallery/elephant.jpg", "Morning bath at the elephant pool"),
    ("/assets/gallery/red-panda.jpg", "Red panda in the bamboo grove"),
    ("/assets/gallery/flamingos.jpg", "Flamingo flock at dusk"),
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <div class="gallery-page">
            <section class="page-hero">
                <h1>{"Gallery"}</h1>
                <p>{"Moments captured by our keepers and visitors"}</p>
            </section>
            <section class="gallery-section">
                <div class="gallery-grid">
                    { for PHOTOS.iter().enumerate().map(|(index, (src, caption))| html! {
                        <GalleryItem {index} src={*src} caption={*caption} />
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .gallery-page {
                    padding-top: 74px;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .gallery-frame {
                    overflow: hidden;
                    border-radius: 12px;
                }
                .gallery-image {
                    width: 100%;
                    display: block;
                    transition: transform 0.4s ease;
                }
                .gallery-caption {
                    padding: 0.6rem 0;
                    color: #5d4037;
                }
                "#}
            </style>
        </div>
    }
}
