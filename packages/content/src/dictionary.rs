use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{FaqEntry, Lang, LoadError, ServiceEntry};

/// Fields that dictionaries may write as `a|b|c` strings. They are turned
/// into native arrays once, at load time.
pub const LIST_FIELDS: [&str; 2] = ["home.quoteList", "home.contactList"];

pub const LIST_DELIMITER: char = '|';

/// One language's translation tree. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    pub fn parse(lang: Lang, json: &str) -> Result<Self, LoadError> {
        let value =
            serde_json::from_str(json).map_err(|source| LoadError::Parse { lang, source })?;
        Self::from_value(lang, value)
    }

    pub fn from_value(lang: Lang, mut root: Value) -> Result<Self, LoadError> {
        if !root.is_object() {
            return Err(LoadError::NotAnObject { lang });
        }

        for path in LIST_FIELDS {
            if let Some(slot) = value_at_mut(&mut root, path) {
                if let Value::String(raw) = slot {
                    let items = split_list(raw).into_iter().map(Value::String).collect();
                    *slot = Value::Array(items);
                }
            }
        }

        Ok(Self { root })
    }

    /// Raw node at a dot-separated key path.
    pub fn value(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// String at `path`, or `""` when the path is missing or not a string.
    pub fn text(&self, path: &str) -> String {
        self.value(path)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// String list at `path`. Non-string items are skipped; anything other
    /// than an array yields an empty list.
    pub fn list(&self, path: &str) -> Vec<String> {
        match self.value(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Array of records at `path`; entries that do not deserialize are skipped.
    pub fn records<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        match self.value(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn services(&self) -> Vec<ServiceEntry> {
        self.records("servicesList")
    }

    pub fn faq_items(&self) -> Vec<FaqEntry> {
        self.records("faqPage.items")
    }
}

/// Splits a `|`-delimited field. No trimming; an empty field is one empty item.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER).map(str::to_string).collect()
}

fn value_at_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    path.split('.')
        .try_fold(root, |node, segment| node.get_mut(segment))
}
