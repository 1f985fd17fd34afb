use dioxus::prelude::*;

use crate::config::SITE;
use crate::core::timing::current_year;
use crate::i18n::{use_i18n, FluentArgs};
use crate::router::{Page, Route};

/// Footer quick links (the conditions page is reachable from the header only).
const QUICK_LINKS: [Page; 4] = [Page::Home, Page::About, Page::Services, Page::Contact];

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let contact = &SITE.contact;

    let mut args = FluentArgs::new();
    args.set("year", current_year());
    args.set("brand", SITE.brand.name.as_str());
    let copyright = i18n.t_with("copyright", &args);

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__column",
                    Link { class: "footer__brand", to: Route::Home {},
                        span { class: "footer__brand-primary", "{SITE.brand.primary}" }
                        span { class: "footer__brand-secondary", "{SITE.brand.secondary}" }
                    }
                    p { class: "footer__text", {i18n.t("footer_description")} }
                    p { class: "footer__text", "{copyright}" }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {i18n.t("quick_links")} }
                    for page in QUICK_LINKS {
                        Link {
                            key: "{page.path()}",
                            class: "footer__link",
                            to: page.route(),
                            {i18n.t(page.nav_key())}
                        }
                    }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {i18n.t("contact_info")} }
                    div { class: "footer__contact",
                        span { class: "footer__icon", aria_hidden: "true", "☎" }
                        span { "{contact.primary_phone()}" }
                    }
                    div { class: "footer__contact",
                        span { class: "footer__icon", aria_hidden: "true", "✉" }
                        span { "{contact.primary_email()}" }
                    }
                    for line in contact.address.iter().take(1) {
                        div { class: "footer__contact",
                            span { class: "footer__icon", aria_hidden: "true", "⌖" }
                            span { "{line}" }
                        }
                    }
                    for line in contact.hours.iter().take(1) {
                        div { class: "footer__contact",
                            span { class: "footer__icon", aria_hidden: "true", "◷" }
                            span { "{line}" }
                        }
                    }
                }
            }
        }
    }
}
