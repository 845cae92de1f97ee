use crate::{Lang, Page};

/// The current selection driving every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub lang: Lang,
    pub page: Page,
}

impl AppState {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            page: Page::Home,
        }
    }

    pub fn with_page(self, page: Page) -> Self {
        Self { page, ..self }
    }

    pub fn with_lang(self, lang: Lang) -> Self {
        Self { lang, ..self }
    }
}

/// Handle for one in-flight page swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    target: AppState,
}

impl Ticket {
    pub fn page(&self) -> Page {
        self.target.page
    }

    pub fn target(&self) -> AppState {
        self.target
    }
}

/// Fade-out / render / fade-in bookkeeping for the content area.
///
/// A request hides the content and hands out a ticket; `complete` applies the
/// requested page and language only if no newer request arrived in between.
/// Nothing about the rendered state changes before the fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSwitch {
    state: AppState,
    pending: Option<AppState>,
    visible: bool,
    generation: u64,
}

impl PageSwitch {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            pending: None,
            visible: true,
            generation: 0,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn transitioning(&self) -> bool {
        !self.visible
    }

    pub fn request_page(&mut self, page: Page) -> Ticket {
        let target = self.target().with_page(page);
        self.begin(target)
    }

    pub fn request_lang(&mut self, lang: Lang) -> Ticket {
        let target = self.target().with_lang(lang);
        self.begin(target)
    }

    /// Returns false for a stale ticket, leaving the switch untouched.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = ticket.target;
        self.pending = None;
        self.visible = true;
        true
    }

    // Requests stack on whatever is already pending.
    fn target(&self) -> AppState {
        self.pending.unwrap_or(self.state)
    }

    fn begin(&mut self, target: AppState) -> Ticket {
        self.generation += 1;
        self.visible = false;
        self.pending = Some(target);
        Ticket {
            generation: self.generation,
            target,
        }
    }
}
