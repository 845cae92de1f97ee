use content::view::ServicesView;
use dioxus::prelude::*;

/// Service catalogue with a live name filter. Every keystroke refilters.
#[component]
pub fn ServicesPage(view: ServicesView) -> Element {
    let mut query = use_signal(String::new);
    let visible: Vec<_> = view.filtered(&query.read()).into_iter().cloned().collect();

    rsx! {
        h1 { "{view.heading}" }
        input {
            id: "service-search",
            class: "service-search",
            r#type: "text",
            placeholder: "{view.search_placeholder}",
            "aria-label": "{view.search_placeholder}",
            value: "{query}",
            oninput: move |e| query.set(e.value()),
        }
        div { id: "services-grid",
            super::ServiceGrid { services: visible }
        }
    }
}
