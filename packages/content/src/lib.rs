//! Framework-free site content: dictionaries, the translation store, page
//! view models and the small state machines the UI drives.

pub mod carousel;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod lang;
pub mod nav;
pub mod page;
pub mod source;
pub mod state;
pub mod store;
pub mod types;
pub mod view;

#[cfg(test)]
mod types_tests;

pub use carousel::Carousel;
pub use config::SiteConfig;
pub use dictionary::Dictionary;
pub use error::LoadError;
pub use lang::Lang;
pub use nav::{nav_entries, NavEntry};
pub use page::Page;
pub use source::{DictionarySource, StaticSource};
pub use state::AppState;
pub use store::TranslationStore;
pub use types::{FaqEntry, ServiceEntry};
pub use view::PageView;
