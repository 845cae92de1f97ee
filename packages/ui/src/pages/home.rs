use content::view::HomeView;
use dioxus::prelude::*;

#[component]
pub fn HomePage(view: HomeView) -> Element {
    let lang = crate::use_lang();
    let translations = crate::use_translations();

    rsx! {
        crate::CarouselStrip {
            slides: view.slides.clone(),
            prev_label: translations.t(lang, "carousel.prev"),
            next_label: translations.t(lang, "carousel.next"),
        }
        section { class: "about-blurb",
            h1 { "{view.about.heading}" }
            p { "{view.about.text}" }
        }
        section { class: "services-section",
            h1 { "{view.services_heading}" }
            super::ServiceGrid { services: view.services.clone() }
        }
        section { class: "quote-section",
            h1 { "{view.quote.heading}" }
            p { "{view.quote.text}" }
            ul {
                for (i, item) in view.quote.items.iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
        section { class: "download-section",
            a {
                class: "pdf-btn",
                role: "button",
                href: "{view.catalogue_url}",
                target: "_blank",
                rel: "noopener",
                "{view.download_label}"
            }
        }
        super::ContactCard { card: view.contact.clone() }
    }
}
