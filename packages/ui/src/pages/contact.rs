use content::view::ContactView;
use dioxus::prelude::*;

#[component]
pub fn ContactPage(view: ContactView) -> Element {
    rsx! {
        super::ContactCard { card: view.card.clone() }
    }
}
