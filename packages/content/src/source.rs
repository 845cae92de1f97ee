use async_trait::async_trait;
use std::collections::HashMap;

use crate::{Lang, LoadError};

/// Where dictionary JSON comes from. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait DictionarySource {
    async fn fetch(&self, lang: Lang) -> Result<String, LoadError>;
}

/// In-memory dictionaries, keyed by language.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<Lang, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: Lang, json: impl Into<String>) -> Self {
        self.documents.insert(lang, json.into());
        self
    }
}

#[async_trait(?Send)]
impl DictionarySource for StaticSource {
    async fn fetch(&self, lang: Lang) -> Result<String, LoadError> {
        self.documents
            .get(&lang)
            .cloned()
            .ok_or_else(|| LoadError::Fetch {
                lang,
                reason: "no document registered".to_string(),
            })
    }
}
