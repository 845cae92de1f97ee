use content::view::Slide;
use content::Carousel;
use dioxus::prelude::*;

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");

/// Image strip with manual controls and a timed auto-advance.
///
/// The auto-advance loop is owned by this component: it starts on mount and
/// is dropped on unmount, so leaving and re-entering the home page never
/// stacks timers.
#[component]
pub fn CarouselStrip(slides: Vec<Slide>, prev_label: String, next_label: String) -> Element {
    let interval = crate::use_site_config().carousel_interval;
    let total = slides.len();
    let mut carousel = use_signal(|| Carousel::new(total));

    use_future(move || async move {
        loop {
            crate::timer::sleep(interval).await;
            carousel.write().next();
        }
    });

    let transform = carousel.read().transform();

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }

        section { class: "carousel",
            div { class: "slides", style: "transform: {transform}",
                for (i, slide) in slides.iter().enumerate() {
                    img { key: "{i}", src: "{slide.image}", alt: "{slide.alt}" }
                }
            }
            button {
                class: "carousel-button prev",
                "aria-label": "{prev_label}",
                onclick: move |_| carousel.write().prev(),
                "<"
            }
            button {
                class: "carousel-button next",
                "aria-label": "{next_label}",
                onclick: move |_| carousel.write().next(),
                ">"
            }
        }
    }
}
