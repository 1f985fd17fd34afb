use dioxus::prelude::*;

use crate::config::SITE;
use crate::core::visit::register_visit;
use crate::i18n::use_i18n;
use crate::router::Route;

use super::Preferences;

/// Banner at the top of every content page.
///
/// The staggered intro animation plays only on the visitor's first hero of
/// all time; afterwards the banner fades in quickly.
#[component]
pub fn Hero(
    title: String,
    subtitle: String,
    #[props(default = true)] show_cta: bool,
    #[props(default = false)] reversed: bool,
) -> Element {
    let i18n = use_i18n();
    let prefs = use_context::<Preferences>();
    let first_visit = use_hook(move || register_visit(&*prefs.0, &SITE.storage.visit_key));

    let mut class = String::from("hero");
    if first_visit {
        class.push_str(" hero--intro");
    }
    if reversed {
        class.push_str(" hero--reversed");
    }

    rsx! {
        section { class: "{class}",
            div { class: "hero__backdrop" }
            div { class: "hero__blob hero__blob--one", aria_hidden: "true" }
            div { class: "hero__blob hero__blob--two", aria_hidden: "true" }

            div { class: "hero__inner",
                div { class: "hero__text",
                    span { class: "hero__badge", {i18n.t("doctor_specialty")} }
                    h1 { class: "hero__title", "{title}" }
                    p { class: "hero__subtitle", "{subtitle}" }
                    if show_cta {
                        div { class: "hero__actions",
                            Link { class: "button button--primary", to: Route::Contact {},
                                {i18n.t("cta_button")}
                            }
                            Link { class: "button button--ghost", to: Route::Services {},
                                {i18n.t("services")}
                            }
                        }
                    }
                }

                div { class: "hero__card",
                    div { class: "hero__portrait", aria_hidden: "true", "⚕" }
                    div { class: "hero__card-body",
                        p { class: "hero__card-name", {i18n.t("doctor_name")} }
                        p { class: "hero__card-role", {i18n.t("doctor_specialty")} }
                        p { class: "hero__card-text", {i18n.t("doctor_description")} }
                    }
                }
            }

            div { class: "hero__wave", aria_hidden: "true" }
        }
    }
}
