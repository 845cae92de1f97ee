use chrono::Datelike;
use content::Page;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let switcher = crate::use_switcher();
    let translations = crate::use_translations();
    let lang = switcher.state().lang;
    let year = chrono::Local::now().year();
    let site_name = translations.t(lang, "site.name");
    let rights = translations.t(lang, "site.rights");

    rsx! {
        footer { class: "site-footer",
            nav { class: "footer_links",
                for page in Page::ALL {
                    a {
                        key: "{page}",
                        href: "#",
                        "data-page": page.id(),
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            switcher.show(page);
                        },
                        {translations.t(lang, &page.nav_key())}
                    }
                }
            }
            p { class: "copyright",
                "© "
                span { id: "year", "{year}" }
                " {site_name}. {rights}"
            }
        }
    }
}
