use dioxus::prelude::*;
use tracing::warn;

use crate::i18n::use_i18n;
use crate::router::{navigate, Page};

/// Rendered for every path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    let path = format!("/{}", segments.join("/"));
    use_effect(use_reactive((&path,), |(path,)| {
        warn!(path = %path, "no route for path");
    }));

    rsx! {
        div { class: "page page-not-found",
            section { class: "not-found",
                div { class: "not-found__blob", aria_hidden: "true" }
                h1 { class: "not-found__code gradient-text", "404" }
                h2 { class: "not-found__title", {i18n.t("page_not_found")} }
                p { class: "not-found__text", {i18n.t("page_not_found_desc")} }
                code { class: "not-found__path", "{path}" }
                div { class: "section__actions",
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| navigate(Page::Home.path()),
                        {i18n.t("return_home")}
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| navigator().go_back(),
                        {i18n.t("go_back")}
                    }
                }
            }
        }
    }
}
