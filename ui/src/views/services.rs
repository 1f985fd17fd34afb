use dioxus::prelude::*;

use crate::components::Hero;
use crate::content::{PROCESS_STEPS, REASONS, SERVICES};
use crate::i18n::use_i18n;
use crate::router::Route;

#[component]
pub fn Services() -> Element {
    let i18n = use_i18n();

    rsx! {
        div { class: "page page-services",
            Hero {
                title: i18n.t("services_title"),
                subtitle: i18n.t("services_subtitle"),
                show_cta: false,
            }

            section { class: "section section--white",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("services_specialized")} }
                    p { {i18n.t("services_specialized_desc")} }
                }
                div { class: "card-grid card-grid--three",
                    for service in SERVICES.iter() {
                        div { key: "{service.title}", class: "card card--lift reveal",
                            div { class: "card__icon", aria_hidden: "true", "{service.icon}" }
                            h3 { class: "card__title", "{service.title}" }
                            p { class: "card__text", "{service.description}" }
                            ul { class: "card__details",
                                for detail in service.details {
                                    li { key: "{detail}",
                                        span { class: "card__tick", aria_hidden: "true", "✓" }
                                        "{detail}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("why_choose_title")} }
                    p { {i18n.t("why_choose_desc")} }
                }
                div { class: "card-grid card-grid--three",
                    for (icon, title, description) in REASONS {
                        div { key: "{title}", class: "glass-card reason reveal",
                            div { class: "reason__icon", aria_hidden: "true", "{icon}" }
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { class: "section section--white",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("process_title")} }
                    p { {i18n.t("process_desc")} }
                }
                ol { class: "steps",
                    for (index, (title, description)) in PROCESS_STEPS.iter().enumerate() {
                        li { key: "{index}", class: "steps__item reveal",
                            span { class: "steps__number", {(index + 1).to_string()} }
                            h3 { "{title}" }
                            p { "{description}" }
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
