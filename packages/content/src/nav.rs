use crate::{AppState, Page, TranslationStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: String,
    pub active: bool,
}

/// One entry per page, in menu order, labelled from `nav.<id>`.
pub fn nav_entries(store: &TranslationStore, state: AppState) -> Vec<NavEntry> {
    Page::ALL
        .into_iter()
        .map(|page| NavEntry {
            page,
            label: store.lookup(state.lang, &page.nav_key()),
            active: page == state.page,
        })
        .collect()
}
