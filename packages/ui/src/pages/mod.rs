use content::view::ListSection;
use content::{PageView, ServiceEntry};
use dioxus::prelude::*;

mod about;
mod contact;
mod faq;
mod home;
mod services;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Renders one page view model.
#[component]
pub fn PageBody(view: PageView) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }

        match view {
            PageView::Home(view) => rsx! { home::HomePage { view } },
            PageView::About(view) => rsx! { about::AboutPage { view } },
            PageView::Services(view) => rsx! { services::ServicesPage { view } },
            PageView::Faq(view) => rsx! { faq::FaqPage { view } },
            PageView::Contact(view) => rsx! { contact::ContactPage { view } },
        }
    }
}

#[component]
fn ServiceGrid(services: Vec<ServiceEntry>) -> Element {
    rsx! {
        div { class: "services-grid",
            for (i, service) in services.iter().enumerate() {
                div { key: "{i}", class: "service-card",
                    h3 { "{service.name}" }
                    p { "{service.description}" }
                }
            }
        }
    }
}

#[component]
fn ContactCard(card: ListSection) -> Element {
    rsx! {
        section { class: "contact-card",
            h1 { "{card.heading}" }
            p { "{card.text}" }
            ul {
                for (i, item) in card.items.iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    }
}
