use dioxus::prelude::*;

use crate::components::Hero;
use crate::config::SITE;
use crate::content::{CONDITION_KEYS, SERVICE_HIGHLIGHTS, STATS};
use crate::i18n::use_i18n;
use crate::router::Route;

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();

    rsx! {
        div { class: "page page-home",
            Hero {
                title: i18n.t("hero_title"),
                subtitle: i18n.t("hero_subtitle"),
            }

            section { class: "section section--white",
                div { class: "stats",
                    for (index, stat) in STATS.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "stats-card reveal",
                            div { class: "stats-card__icon", aria_hidden: "true", "{stat.icon}" }
                            h3 { class: "stats-card__number", "{stat.number}" }
                            p { class: "stats-card__label", {i18n.t(stat.label_key)} }
                        }
                    }
                }
            }

            section { class: "section section--muted",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("services_title")} }
                    p { {i18n.t("info_description")} }
                }
                div { class: "card-grid card-grid--three",
                    for (title, description, icon) in SERVICE_HIGHLIGHTS {
                        div { key: "{title}", class: "card card--lift reveal",
                            div { class: "card__icon", aria_hidden: "true", "{icon}" }
                            h3 { class: "card__title", {i18n.t(title)} }
                            p { class: "card__text", {i18n.t(description)} }
                            Link { class: "card__link", to: Route::Services {},
                                {i18n.t("view_all_services")}
                                " →"
                            }
                        }
                    }
                }
                div { class: "section__actions",
                    Link { class: "button button--primary", to: Route::Services {},
                        {i18n.t("view_all_services")}
                    }
                }
            }

            section { class: "section section--white",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("conditions_title")} }
                    p { {i18n.t("info_description")} }
                }
                div { class: "chip-grid",
                    for key in CONDITION_KEYS {
                        div { key: "{key}", class: "chip reveal",
                            span { class: "chip__check", aria_hidden: "true", "✓" }
                            span { {i18n.t(key)} }
                        }
                    }
                }
                div { class: "section__actions",
                    Link { class: "button button--primary", to: Route::Conditions {},
                        {i18n.t("view_all_conditions")}
                    }
                }
            }

            section { class: "section section--cta",
                h2 { {i18n.t("ready_schedule")} }
                p { {i18n.t("highest_quality")} }
                div { class: "section__actions",
                    Link { class: "button button--light", to: Route::Contact {},
                        "📅 "
                        {i18n.t("cta_button")}
                    }
                    a { class: "button button--outline", href: "{SITE.contact.call_href}",
                        "☎ "
                        {i18n.t("call_now")}
                    }
                }
            }
        }
    }
}
