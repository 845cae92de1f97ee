use std::rc::Rc;
use std::time::Duration;

use content::state::{PageSwitch, Ticket};
use content::{AppState, Lang, Page, PageView};
use dioxus::prelude::*;

/// Entry point for every page change: navigation, footer, logo and the
/// language selector all go through here.
#[derive(Clone, Copy, PartialEq)]
pub struct Switcher {
    switch: Signal<PageSwitch>,
    content: Signal<Option<Rc<MountedData>>>,
    delay: Option<Duration>,
}

impl Switcher {
    pub fn state(&self) -> AppState {
        self.switch.read().state()
    }

    pub fn visible(&self) -> bool {
        self.switch.read().visible()
    }

    /// Fade out, wait for the transition, swap in `page`, fade in and focus
    /// the content area. A newer request supersedes a pending one.
    pub fn show(&self, page: Page) {
        let mut switch = self.switch;
        let ticket = switch.write().request_page(page);
        self.finish(ticket);
    }

    /// Same transition as [`Switcher::show`], re-rendering the current page
    /// in `lang` once the content is hidden.
    pub fn set_lang(&self, lang: Lang) {
        let mut switch = self.switch;
        let ticket = switch.write().request_lang(lang);
        tracing::debug!(%lang, "language change requested");
        self.finish(ticket);
    }

    fn finish(&self, ticket: Ticket) {
        let switch = self.switch;
        let content = self.content;
        match self.delay {
            None => land(switch, content, ticket),
            Some(delay) => {
                spawn(async move {
                    crate::timer::sleep(delay).await;
                    land(switch, content, ticket);
                });
            }
        }
    }
}

fn land(
    mut switch: Signal<PageSwitch>,
    content: Signal<Option<Rc<MountedData>>>,
    ticket: Ticket,
) {
    if !switch.write().complete(ticket) {
        tracing::trace!(page = %ticket.page(), "superseded page request dropped");
        return;
    }
    tracing::debug!(page = %ticket.page(), lang = %ticket.target().lang, "page shown");

    if let Some(main) = content() {
        spawn(async move {
            if let Err(err) = main.set_focus(true).await {
                tracing::trace!("content area focus failed: {err}");
            }
        });
    }
}

/// Creates the switcher for a subtree and provides it through context.
pub(crate) fn use_switcher_provider(initial: AppState, delay: Option<Duration>) -> Switcher {
    let switch = use_signal(|| PageSwitch::new(initial));
    let content = use_signal(|| None);
    use_context_provider(|| Switcher {
        switch,
        content,
        delay,
    })
}

pub fn use_switcher() -> Switcher {
    use_context::<Switcher>()
}

/// The swappable `main` region.
#[component]
pub fn ContentArea() -> Element {
    let switcher = use_switcher();
    let mut content = switcher.content;
    let translations = crate::use_translations();
    let config = crate::use_site_config();

    let state = switcher.state();
    let view = PageView::render(state.page, translations.store().dictionary(state.lang), &config);

    rsx! {
        main {
            id: "main-content",
            class: if switcher.visible() { "content visible" } else { "content" },
            tabindex: "-1",
            onmounted: move |e| content.set(Some(e.data())),
            crate::Remount { remount_key: "{state.lang}-{state.page}",
                crate::PageBody { view }
            }
        }
    }
}
