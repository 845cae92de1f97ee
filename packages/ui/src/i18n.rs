use std::rc::Rc;

use async_trait::async_trait;
use content::{DictionarySource, Lang, LoadError, TranslationStore};
use dioxus::prelude::*;
use serde::Deserialize;

const EN_DICTIONARY: Asset = asset!("/assets/i18n/en.json");
const ES_DICTIONARY: Asset = asset!("/assets/i18n/es.json");

/// Both dictionaries, shared through context once loaded.
#[derive(Clone)]
pub struct Translations(Rc<TranslationStore>);

impl Translations {
    pub fn new(store: TranslationStore) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &TranslationStore {
        &self.0
    }

    /// Translate a key path; missing keys come back empty.
    pub fn t(&self, lang: Lang, key: &str) -> String {
        self.0.lookup(lang, key)
    }
}

impl PartialEq for Translations {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fetches the dictionaries bundled as assets of this crate.
pub struct BrowserSource {
    en: String,
    es: String,
}

impl BrowserSource {
    pub fn bundled() -> Self {
        Self {
            en: EN_DICTIONARY.to_string(),
            es: ES_DICTIONARY.to_string(),
        }
    }

    fn url(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Es => &self.es,
        }
    }
}

#[derive(Deserialize)]
struct FetchReply {
    ok: bool,
    #[serde(default)]
    body: String,
    #[serde(default)]
    error: String,
}

#[async_trait(?Send)]
impl DictionarySource for BrowserSource {
    async fn fetch(&self, lang: Lang) -> Result<String, LoadError> {
        let fail = |reason: String| LoadError::Fetch { lang, reason };

        let url = serde_json::to_string(self.url(lang)).map_err(|e| fail(e.to_string()))?;
        let js = format!(
            r#"
            try {{
              const res = await fetch({url});
              if (!res.ok) return {{ ok: false, error: "HTTP " + res.status }};
              return {{ ok: true, body: await res.text() }};
            }} catch (e) {{
              return {{ ok: false, error: String(e) }};
            }}
            "#
        );

        let value = document::eval(&js)
            .await
            .map_err(|e| fail(e.to_string()))?;
        let reply: FetchReply =
            serde_json::from_value(value).map_err(|e| fail(e.to_string()))?;

        if reply.ok {
            Ok(reply.body)
        } else {
            Err(fail(reply.error))
        }
    }
}

/// Loads both dictionaries before rendering `children`. Nothing interactive
/// is shown until the load finishes; a failure ends the session.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let dictionaries = use_resource(|| async move {
        let result = TranslationStore::load(&BrowserSource::bundled()).await;
        match &result {
            Ok(_) => tracing::info!("dictionaries loaded"),
            Err(err) => tracing::error!(lang = %err.lang(), "dictionary load failed: {err}"),
        }
        result.map(Translations::new)
    });

    let loaded = match &*dictionaries.read() {
        None => None,
        Some(Ok(translations)) => Some(Ok(translations.clone())),
        Some(Err(err)) => Some(Err(err.to_string())),
    };

    match loaded {
        None => rsx! { div { class: "site_loading", "aria-busy": "true" } },
        Some(Err(message)) => rsx! {
            div { class: "site_error", role: "alert",
                h1 { "Unable to load site content" }
                p { "{message}" }
            }
        },
        Some(Ok(translations)) => rsx! {
            TranslationsProvider { translations, {children} }
        },
    }
}

#[component]
fn TranslationsProvider(translations: Translations, children: Element) -> Element {
    use_context_provider(|| translations);
    rsx! { {children} }
}

pub fn use_translations() -> Translations {
    use_context::<Translations>()
}

/// Active language, read from the page switcher.
pub fn use_lang() -> Lang {
    crate::use_switcher().state().lang
}
