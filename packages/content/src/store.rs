use crate::{Dictionary, DictionarySource, Lang, LoadError};

/// Both language dictionaries. Holding one field per [`Lang`] variant keeps
/// every language lookup total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationStore {
    en: Dictionary,
    es: Dictionary,
}

impl TranslationStore {
    pub fn new(en: Dictionary, es: Dictionary) -> Self {
        Self { en, es }
    }

    /// Fetches and parses every language. The first failure is returned as is.
    pub async fn load(source: &dyn DictionarySource) -> Result<Self, LoadError> {
        let en = Self::load_one(source, Lang::En).await?;
        let es = Self::load_one(source, Lang::Es).await?;
        Ok(Self::new(en, es))
    }

    async fn load_one(source: &dyn DictionarySource, lang: Lang) -> Result<Dictionary, LoadError> {
        let json = source.fetch(lang).await?;
        let dictionary = Dictionary::parse(lang, &json)?;
        tracing::debug!(%lang, bytes = json.len(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn dictionary(&self, lang: Lang) -> &Dictionary {
        match lang {
            Lang::En => &self.en,
            Lang::Es => &self.es,
        }
    }

    /// String at a dot-separated key path, or `""` when anything is missing.
    pub fn lookup(&self, lang: Lang, path: &str) -> String {
        self.dictionary(lang).text(path)
    }
}
