/// The five pages the content area can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Faq,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Faq,
        Page::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Faq => "faq",
            Page::Contact => "contact",
        }
    }

    /// Unknown identifiers resolve to the home page.
    pub fn from_id(id: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or(Page::Home)
    }

    pub fn nav_key(self) -> String {
        format!("nav.{}", self.id())
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
