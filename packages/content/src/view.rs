//! Page view models. Rendering is a pure function of the page, the active
//! dictionary and the site config; the UI only turns these into markup.

use crate::types::filter_services;
use crate::{Dictionary, FaqEntry, Page, ServiceEntry, SiteConfig};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub heading: String,
    pub text: String,
}

impl Section {
    fn read(dict: &Dictionary, heading: &str, text: &str) -> Self {
        Self {
            heading: dict.text(heading),
            text: dict.text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSection {
    pub heading: String,
    pub text: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub slides: Vec<Slide>,
    pub about: Section,
    pub services_heading: String,
    pub services: Vec<ServiceEntry>,
    pub quote: ListSection,
    pub download_label: String,
    pub catalogue_url: String,
    pub contact: ListSection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub intro: Section,
    pub mission: Section,
    pub vision: Section,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesView {
    pub heading: String,
    pub search_placeholder: String,
    pub services: Vec<ServiceEntry>,
}

impl ServicesView {
    pub fn filtered(&self, query: &str) -> Vec<&ServiceEntry> {
        filter_services(&self.services, query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqView {
    pub heading: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub card: ListSection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Services(ServicesView),
    Faq(FaqView),
    Contact(ContactView),
}

impl PageView {
    pub fn render(page: Page, dict: &Dictionary, config: &SiteConfig) -> Self {
        match page {
            Page::Home => PageView::Home(home(dict, config)),
            Page::About => PageView::About(about(dict)),
            Page::Services => PageView::Services(services(dict)),
            Page::Faq => PageView::Faq(faq(dict)),
            Page::Contact => PageView::Contact(contact(dict)),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageView::Home(_) => Page::Home,
            PageView::About(_) => Page::About,
            PageView::Services(_) => Page::Services,
            PageView::Faq(_) => Page::Faq,
            PageView::Contact(_) => Page::Contact,
        }
    }
}

fn home(dict: &Dictionary, config: &SiteConfig) -> HomeView {
    let slides = dict
        .list("carousel.alt")
        .into_iter()
        .enumerate()
        .map(|(i, alt)| Slide {
            image: config.slide_image(i),
            alt,
        })
        .collect();

    HomeView {
        slides,
        about: Section::read(dict, "home.aboutHeading", "home.aboutText"),
        services_heading: dict.text("home.servicesHeading"),
        services: dict.services(),
        quote: ListSection {
            heading: dict.text("home.quoteHeading"),
            text: dict.text("home.quoteText"),
            // Absent field: no items. An empty string was already
            // normalized to one blank item at load.
            items: dict.list("home.quoteList"),
        },
        download_label: dict.text("home.downloadButton"),
        catalogue_url: config.catalogue_url(),
        contact: contact_card(dict),
    }
}

fn about(dict: &Dictionary) -> AboutView {
    AboutView {
        intro: Section::read(dict, "about.heading", "about.text"),
        mission: Section::read(dict, "about.missionHeading", "about.missionText"),
        vision: Section::read(dict, "about.visionHeading", "about.visionText"),
    }
}

fn services(dict: &Dictionary) -> ServicesView {
    ServicesView {
        heading: dict.text("servicesPage.heading"),
        search_placeholder: dict.text("servicesPage.searchPlaceholder"),
        services: dict.services(),
    }
}

fn faq(dict: &Dictionary) -> FaqView {
    FaqView {
        heading: dict.text("faqPage.heading"),
        items: dict.faq_items(),
    }
}

fn contact(dict: &Dictionary) -> ContactView {
    ContactView {
        card: contact_card(dict),
    }
}

// Home and contact share one source; list fields are normalized at load.
fn contact_card(dict: &Dictionary) -> ListSection {
    ListSection {
        heading: dict.text("home.contactHeading"),
        text: dict.text("home.contactText"),
        items: dict.list("home.contactList"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lang;
    use serde_json::json;

    #[test]
    fn empty_dictionary_renders_blank_pages() {
        let dict = Dictionary::from_value(Lang::En, json!({})).unwrap();
        let cfg = SiteConfig::default();
        for page in Page::ALL {
            let view = PageView::render(page, &dict, &cfg);
            assert_eq!(view.page(), page);
        }
        let PageView::Home(home) = PageView::render(Page::Home, &dict, &cfg) else {
            panic!("expected home");
        };
        assert!(home.slides.is_empty());
        assert!(home.quote.items.is_empty());
        assert_eq!(home.about.heading, "");
    }

    #[test]
    fn slides_pair_images_with_captions() {
        let dict = Dictionary::from_value(
            Lang::En,
            json!({ "carousel": { "alt": ["Team", "Office"] } }),
        )
        .unwrap();
        let PageView::Home(home) = PageView::render(Page::Home, &dict, &SiteConfig::default())
        else {
            panic!("expected home");
        };
        assert_eq!(
            home.slides,
            vec![
                Slide { image: "/photo1.jpg".into(), alt: "Team".into() },
                Slide { image: "/photo2.jpg".into(), alt: "Office".into() },
            ]
        );
    }
}
