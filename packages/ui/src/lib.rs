//! This crate contains all shared UI for the workspace.

mod carousel;
pub use carousel::CarouselStrip;

mod footer;
pub use footer::Footer;

mod i18n;
pub use i18n::{use_lang, use_translations, BrowserSource, I18nProvider, Translations};

mod navbar;
pub use navbar::Navbar;

mod pages;
pub use pages::PageBody;

mod remount;
pub use remount::Remount;

mod site;
pub use site::{use_site_config, Site};

mod switcher;
pub use switcher::{use_switcher, ContentArea, Switcher};

mod theme;
pub use theme::SiteTheme;

mod timer;
