use serde::{Deserialize, Serialize};

/// A service card, read from `servicesList`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
}

impl ServiceEntry {
    /// Case-insensitive substring match on the name only.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A question/answer pair, read from `faqPage.items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

/// Keeps the entries whose name contains `query`, in their original order.
/// An empty query keeps everything.
pub fn filter_services<'a>(entries: &'a [ServiceEntry], query: &str) -> Vec<&'a ServiceEntry> {
    entries.iter().filter(|entry| entry.matches(query)).collect()
}
