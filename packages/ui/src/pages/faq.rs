use content::view::FaqView;
use dioxus::prelude::*;

#[component]
pub fn FaqPage(view: FaqView) -> Element {
    rsx! {
        h1 { "{view.heading}" }
        for (i, item) in view.items.iter().enumerate() {
            div { key: "{i}", class: "faq-item",
                h3 { "{item.question}" }
                p { "{item.answer}" }
            }
        }
    }
}
