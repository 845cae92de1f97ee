use content::{nav_entries, Lang, NavEntry, Page};
use dioxus::prelude::*;

/// Header with the logo, the page menu and the language selector.
#[component]
pub fn Navbar() -> Element {
    let switcher = crate::use_switcher();
    let translations = crate::use_translations();
    let state = switcher.state();
    let lang = state.lang;
    let entries = nav_entries(translations.store(), state);
    let site_name = translations.t(lang, "site.name");

    rsx! {
        header { class: "site_header",
            div { class: "site_header_inner",
                a {
                    id: "logo-link",
                    class: "brand",
                    href: "#",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        switcher.show(Page::Home);
                    },
                    span { class: "brand_mark" }
                    span { class: "brand_name", "{site_name}" }
                }
                nav { "aria-label": "{site_name}",
                    // A language change mounts a fresh list.
                    crate::Remount { remount_key: "{lang}",
                        NavList { entries }
                    }
                }
                label { class: "lang_select",
                    span { class: "lang_select_label", {translations.t(lang, "site.language")} }
                    select {
                        id: "lang-select",
                        value: "{lang.code()}",
                        onchange: move |e| {
                            if let Some(next) = Lang::from_code(&e.value()) {
                                switcher.set_lang(next);
                            }
                        },
                        for choice in Lang::ALL {
                            option {
                                key: "{choice}",
                                value: "{choice.code()}",
                                selected: choice == lang,
                                {translations.t(lang, &choice.label_key())}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavList(entries: Vec<NavEntry>) -> Element {
    let switcher = crate::use_switcher();

    rsx! {
        ul { id: "nav-list", class: "nav_links",
            for entry in entries {
                li {
                    key: "{entry.page}",
                    class: if entry.active { "nav_link active" } else { "nav_link" },
                    "data-page": entry.page.id(),
                    onclick: move |_| switcher.show(entry.page),
                    "{entry.label}"
                }
            }
        }
    }
}
