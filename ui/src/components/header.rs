use dioxus::prelude::*;

use crate::config::SITE;
use crate::i18n::use_i18n;
use crate::router::{resolve, Page, Route};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
/// Reports, on every change, whether the page is scrolled past the top band.
const SCROLL_LISTENER_JS: &str = r#"
let last = null;
const report = () => {
    const scrolled = window.scrollY > 10;
    if (scrolled !== last) {
        last = scrolled;
        dioxus.send(scrolled);
    }
};
window.addEventListener("scroll", report, { passive: true });
report();
await new Promise(() => {});
"#;

const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Site header: wordmark, localized navigation, language picker and the
/// collapsible mobile menu.
///
/// Every label is read through the shared `I18n` handle, so a language switch
/// from the picker re-renders this component and every routed page below it.
#[component]
pub fn Header() -> Element {
    let i18n = use_i18n();
    let route = use_route::<Route>();
    let active = resolve(&route.to_string());

    let mut menu_open = use_signal(|| false);
    let mut picker_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(past_top) = listener.recv::<bool>().await {
            scrolled.set(past_top);
        }
    });

    let current = i18n.language();
    let languages = i18n.available_languages();

    let links: Vec<(Page, String)> = Page::NAV
        .iter()
        .map(|page| (*page, i18n.t(page.nav_key())))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "header", class: header_class(scrolled()),
            div { class: "header__inner",
                Link {
                    class: "header__brand",
                    to: Route::Home {},
                    onclick: move |_| menu_open.set(false),
                    span { class: "header__brand-primary", "{SITE.brand.primary}" }
                    span { class: "header__brand-secondary", "{SITE.brand.secondary}" }
                }

                nav { class: "header__links",
                    for (page, label) in links.iter().cloned() {
                        Link {
                            key: "{page.path()}",
                            class: nav_class(page == active),
                            to: page.route(),
                            "{label}"
                        }
                    }
                }

                div { class: "header__locale",
                    button {
                        r#type: "button",
                        class: "header__locale-toggle",
                        aria_label: i18n.t("language_label"),
                        onclick: move |_| {
                            let open = picker_open();
                            picker_open.set(!open);
                        },
                        span { class: "header__globe", aria_hidden: "true", "🌐" }
                        span { class: "header__locale-tag", "{current.tag()}" }
                        span { class: "header__chevron", aria_hidden: "true", "▾" }
                    }
                    if picker_open() {
                        div { class: "header__locale-menu",
                            for lang in languages {
                                button {
                                    key: "{lang.tag()}",
                                    r#type: "button",
                                    class: option_class(lang == current),
                                    onclick: move |_| {
                                        i18n.set_language(lang);
                                        picker_open.set(false);
                                    },
                                    "{lang.native_name()}"
                                }
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "header__menu-toggle",
                    aria_label: i18n.t("toggle_menu"),
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                nav { class: "header__mobile-menu",
                    for (page, label) in links.into_iter() {
                        Link {
                            key: "{page.path()}",
                            class: nav_class(page == active),
                            to: page.route(),
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "header header--scrolled"
    } else {
        "header"
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "header__link header__link--active"
    } else {
        "header__link"
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "header__locale-option header__locale-option--active"
    } else {
        "header__locale-option"
    }
}
