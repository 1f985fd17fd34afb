use dioxus::prelude::*;

use crate::components::Hero;
use crate::content::{TimelineEntry, APPROACH, CERTIFICATIONS, EDUCATION, EXPERIENCE};
use crate::i18n::{use_i18n, I18n};

#[component]
pub fn About() -> Element {
    let i18n = use_i18n();

    rsx! {
        div { class: "page page-about",
            Hero {
                title: i18n.t("about_title"),
                subtitle: i18n.t("about_subtitle"),
                show_cta: false,
                reversed: true,
            }

            section { class: "section section--white",
                div { class: "split",
                    div { class: "profile reveal",
                        h2 { class: "gradient-text", {i18n.t("doctor_name")} }
                        p { class: "profile__specialty", {i18n.t("doctor_specialty")} }
                        div { class: "profile__bio",
                            p { {i18n.t("doctor_description_1")} }
                            p { {i18n.t("doctor_description_2")} }
                            p { {i18n.t("doctor_description_3")} }
                        }
                        div { class: "profile__badges",
                            div { class: "badge badge--medical", "♥ " {i18n.t("compassionate_care")} }
                            div { class: "badge badge--teal", "🏅 " {i18n.t("award_winning")} }
                            div { class: "badge badge--plain",
                                span { class: "badge__stars", aria_hidden: "true", "★★★★★" }
                                "200+ "
                                {i18n.t("patient_reviews")}
                            }
                        }
                    }

                    div { class: "profile-side reveal",
                        h2 { class: "section-title", {i18n.t("certifications")} }
                        ul { class: "bullet-list",
                            for key in CERTIFICATIONS {
                                li { key: "{key}", {i18n.t(key)} }
                            }
                        }

                        h2 { class: "section-title", {i18n.t("my_approach")} }
                        div { class: "approach",
                            for (title, description) in APPROACH {
                                div { key: "{title}", class: "glass-card",
                                    h3 { {i18n.t(title)} }
                                    p { {i18n.t(description)} }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted",
                div { class: "split",
                    div { class: "reveal",
                        h2 { class: "section-title", {i18n.t("education")} }
                        {timeline(i18n, &EDUCATION)}
                    }
                    div { class: "reveal",
                        h2 { class: "section-title", {i18n.t("experience_title")} }
                        {timeline(i18n, &EXPERIENCE)}
                    }
                }
            }
        }
    }
}

fn timeline(i18n: I18n, entries: &[TimelineEntry]) -> Element {
    let present = i18n.t("present");

    rsx! {
        div { class: "timeline",
            for entry in entries {
                div { key: "{entry.title_key}", class: "timeline__item glass-card",
                    span { class: "timeline__years",
                        if entry.until_present {
                            "{entry.years} - {present}"
                        } else {
                            "{entry.years}"
                        }
                    }
                    h3 { {i18n.t(entry.title_key)} }
                    p { {i18n.t(entry.institution_key)} }
                }
            }
        }
    }
}
