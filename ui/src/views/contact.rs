use dioxus::prelude::*;
use tracing::info;

use crate::components::Hero;
use crate::config::SITE;
use crate::content::{toggle_expanded, FAQS};
use crate::core::timing::sleep_ms;
use crate::i18n::use_i18n;

/// Simulated delivery time before the confirmation shows.
const SEND_DELAY_MS: u32 = 1_000;
/// How long the confirmation stays before the form is usable again.
const CONFIRMATION_MS: u32 = 5_000;

/// Lifecycle of the contact form. Nothing leaves the browser; delivery is
/// simulated with timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl FormStatus {
    /// State after a submit click, or `None` while a send is in flight.
    pub fn submit(self) -> Option<FormStatus> {
        match self {
            FormStatus::Sending => None,
            FormStatus::Idle | FormStatus::Sent => Some(FormStatus::Sending),
        }
    }

    pub fn delivered(self) -> FormStatus {
        match self {
            FormStatus::Sending => FormStatus::Sent,
            other => other,
        }
    }

    pub fn dismissed(self) -> FormStatus {
        match self {
            FormStatus::Sent => FormStatus::Idle,
            other => other,
        }
    }

    pub fn is_sending(self) -> bool {
        self == FormStatus::Sending
    }

    pub fn button_key(self) -> &'static str {
        match self {
            FormStatus::Sending => "sending",
            FormStatus::Idle | FormStatus::Sent => "send_message",
        }
    }
}

/// A [`FormStatus`] plus the ticket of the send it belongs to. Timers from
/// an earlier send carry a stale ticket and change nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    status: FormStatus,
    ticket: u64,
}

impl Submission {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Start a send and return its ticket, or `None` while one is in flight.
    pub fn submit(&mut self) -> Option<u64> {
        self.status = self.status.submit()?;
        self.ticket += 1;
        Some(self.ticket)
    }

    /// Mark `ticket`'s send delivered. False when a newer send superseded it.
    pub fn deliver(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.status = self.status.delivered();
        true
    }

    pub fn dismiss(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.status = self.status.dismissed();
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let i18n = use_i18n();
    let contact = &SITE.contact;

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut form = use_signal(Submission::default);
    let mut open_faq = use_signal(|| None::<usize>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(ticket) = form.write().submit() else {
            return;
        };
        info!(ticket, "contact form submitted");
        spawn(async move {
            sleep_ms(SEND_DELAY_MS).await;
            if !form.write().deliver(ticket) {
                return;
            }
            for mut field in [name, email, phone, subject, message] {
                field.set(String::new());
            }
            sleep_ms(CONFIRMATION_MS).await;
            form.write().dismiss(ticket);
        });
    };

    let status = form.read().status();

    rsx! {
        div { class: "page page-contact",
            Hero {
                title: i18n.t("contact_title"),
                subtitle: i18n.t("contact_subtitle"),
                show_cta: false,
            }

            section { class: "section section--white",
                div { class: "split",
                    div { class: "contact-info reveal",
                        h2 { class: "section-title", {i18n.t("contact_info")} }
                        {info_block("☎", i18n.t("phone"), &contact.phones)}
                        {info_block("✉", i18n.t("email"), &contact.emails)}
                        {info_block("⌂", i18n.t("address"), &contact.address)}
                        {info_block("◷", i18n.t("working_hours"), &contact.hours)}
                        p { class: "contact-info__note", {i18n.t("consultation_hours")} }
                    }

                    div { class: "glass-card contact-form reveal",
                        h2 { class: "section-title", {i18n.t("send_message")} }
                        if status == FormStatus::Sent {
                            div { class: "notice notice--success", role: "status",
                                strong { {i18n.t("message_sent")} }
                                p { {i18n.t("message_sent_description")} }
                            }
                        }
                        form { class: "form", onsubmit: on_submit,
                            div { class: "form__row",
                                label { class: "form__field",
                                    span { {i18n.t("name")} }
                                    input {
                                        r#type: "text",
                                        required: true,
                                        value: "{name}",
                                        oninput: move |evt| name.set(evt.value()),
                                    }
                                }
                                label { class: "form__field",
                                    span { {i18n.t("email")} }
                                    input {
                                        r#type: "email",
                                        required: true,
                                        value: "{email}",
                                        oninput: move |evt| email.set(evt.value()),
                                    }
                                }
                            }
                            div { class: "form__row",
                                label { class: "form__field",
                                    span { {i18n.t("phone")} }
                                    input {
                                        r#type: "tel",
                                        value: "{phone}",
                                        oninput: move |evt| phone.set(evt.value()),
                                    }
                                }
                                label { class: "form__field",
                                    span { {i18n.t("subject")} }
                                    input {
                                        r#type: "text",
                                        required: true,
                                        value: "{subject}",
                                        oninput: move |evt| subject.set(evt.value()),
                                    }
                                }
                            }
                            label { class: "form__field",
                                span { {i18n.t("message")} }
                                textarea {
                                    rows: "5",
                                    required: true,
                                    value: "{message}",
                                    oninput: move |evt| message.set(evt.value()),
                                }
                            }
                            button {
                                class: "button button--primary button--block",
                                r#type: "submit",
                                disabled: status.is_sending(),
                                {i18n.t(status.button_key())}
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted",
                div { class: "section__heading",
                    h2 { class: "gradient-text", {i18n.t("faq_title")} }
                    p { {i18n.t("faq_description")} }
                }
                div { class: "accordion",
                    for (index, faq) in FAQS.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if open_faq() == Some(index) { "accordion__item accordion__item--open" } else { "accordion__item" },
                            button {
                                class: "accordion__header",
                                r#type: "button",
                                aria_expanded: open_faq() == Some(index),
                                onclick: move |_| {
                                    let current = open_faq();
                                    open_faq.set(toggle_expanded(current, index));
                                },
                                h3 { class: "accordion__title", "{faq.question}" }
                                span { class: "accordion__chevron", aria_hidden: "true", "⌄" }
                            }
                            if open_faq() == Some(index) {
                                div { class: "accordion__body",
                                    p { "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn info_block(icon: &str, title: String, lines: &[String]) -> Element {
    rsx! {
        div { class: "contact-info__block",
            span { class: "contact-info__icon", aria_hidden: "true", "{icon}" }
            div {
                h3 { "{title}" }
                for line in lines {
                    p { key: "{line}", "{line}" }
                }
            }
        }
    }
}
