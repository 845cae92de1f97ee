use content::view::AboutView;
use dioxus::prelude::*;

#[component]
pub fn AboutPage(view: AboutView) -> Element {
    rsx! {
        article { class: "about-page",
            h1 { "{view.intro.heading}" }
            p { "{view.intro.text}" }
            h2 { "{view.mission.heading}" }
            p { "{view.mission.text}" }
            h2 { "{view.vision.heading}" }
            p { "{view.vision.text}" }
        }
    }
}
