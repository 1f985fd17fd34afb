use dioxus::prelude::*;

use crate::components::Hero;
use crate::content::{filter_conditions, toggle_expanded};
use crate::i18n::use_i18n;
use crate::router::Route;

/// Searchable catalog of treated conditions. One entry is expanded at a time.
#[component]
pub fn Conditions() -> Element {
    let i18n = use_i18n();
    let mut query = use_signal(String::new);
    let mut expanded = use_signal(|| None::<usize>);

    let visible = filter_conditions(&query.read());

    rsx! {
        div { class: "page page-conditions",
            Hero {
                title: i18n.t("conditions_title"),
                subtitle: i18n.t("conditions_subtitle"),
                show_cta: false,
                reversed: true,
            }

            section { class: "section section--white",
                div { class: "search",
                    span { class: "search__icon", aria_hidden: "true", "⌕" }
                    input {
                        class: "search__input",
                        r#type: "search",
                        placeholder: i18n.t("search_conditions"),
                        value: "{query}",
                        oninput: move |evt| {
                            query.set(evt.value());
                            expanded.set(None);
                        },
                    }
                }

                if visible.is_empty() {
                    p { class: "search__empty", {i18n.t("no_conditions_found")} }
                } else {
                    div { class: "accordion",
                        for (index, condition) in visible.into_iter().enumerate() {
                            div {
                                key: "{condition.title}",
                                class: if expanded() == Some(index) { "accordion__item accordion__item--open" } else { "accordion__item" },
                                button {
                                    class: "accordion__header",
                                    r#type: "button",
                                    aria_expanded: expanded() == Some(index),
                                    onclick: move |_| {
                                        let current = expanded();
                                        expanded.set(toggle_expanded(current, index));
                                    },
                                    div {
                                        h3 { class: "accordion__title", "{condition.title}" }
                                        p { class: "accordion__summary", "{condition.short_description}" }
                                    }
                                    span { class: "accordion__chevron", aria_hidden: "true", "⌄" }
                                }
                                if expanded() == Some(index) {
                                    div { class: "accordion__body",
                                        p { "{condition.description}" }
                                        h4 { {i18n.t("common_symptoms")} }
                                        ul { class: "bullet-list",
                                            for symptom in condition.symptoms {
                                                li { key: "{symptom}", "{symptom}" }
                                            }
                                        }
                                        h4 { {i18n.t("treatment_options")} }
                                        p { "{condition.treatment}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section--cta",
                h2 { {i18n.t("ready_schedule")} }
                p { {i18n.t("highest_quality")} }
                div { class: "section__actions",
                    Link { class: "button button--light", to: Route::Contact {},
                        {i18n.t("cta_button")}
                    }
                }
            }
        }
    }
}
