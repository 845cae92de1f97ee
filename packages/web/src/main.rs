use content::{Lang, SiteConfig};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        previous(info);
    }));
}

fn site_config() -> SiteConfig {
    SiteConfig::default()
}

fn log_site_config(config: &SiteConfig) {
    tracing::info!(
        lang = %config.default_lang,
        transition_ms = config.transition_delay.map(|d| d.as_millis() as u64),
        carousel_ms = config.carousel_interval.as_millis() as u64,
        media_base = %config.media_base,
        "startup: site config"
    );

    let languages: Vec<&str> = Lang::ALL.iter().map(|lang| lang.code()).collect();
    tracing::debug!("startup: languages {}", languages.join(", "));
}

#[component]
fn App() -> Element {
    let config = use_context_provider(site_config);
    use_hook(|| log_site_config(&config));

    rsx! {
        // Global app resources
        document::Title { "OmniSyn" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            ui::Site {}
        }
    }
}
