use content::{AppState, SiteConfig};
use dioxus::prelude::*;

use crate::switcher::use_switcher_provider;

/// Site settings from context. Falls back to defaults when the app root
/// provides none.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

/// The whole page: header navigation, swappable content and footer.
/// Must sit inside [`crate::I18nProvider`].
#[component]
pub fn Site() -> Element {
    let config = use_site_config();
    use_switcher_provider(AppState::new(config.default_lang), config.transition_delay);

    rsx! {
        crate::Navbar {}
        crate::ContentArea {}
        crate::Footer {}
    }
}
