//! Internationalization (i18n) support for `medcare-ui`.
//!
//! This module wires together:
//! - `fluent` (message formatting, one bundle per language)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - a [`PreferenceStore`] that remembers the visitor's choice
//! - a Dioxus signal so every component re-renders on a switch
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/medcare-ui.ftl   (reference)
//!   uk/medcare-ui.ftl
//!   ru/medcare-ui.ftl
//! ```
//!
//! Usage in a component (below a `use_i18n_provider` call):
//! ```ignore
//! let i18n = use_i18n();
//! rsx! { h1 { {i18n.t("hero_title")} } }
//! ```
//!
//! Missing messages render as their key, so gaps show up on the page
//! instead of as blank text. There is no fallback to English.

mod catalog;
mod language;
mod localizer;

use std::rc::Rc;

use dioxus::prelude::*;

pub use catalog::{embedded_locales, Catalog, I18nError};
pub use fluent::FluentArgs;
pub use language::{Language, UnsupportedLanguage};
pub use localizer::{Localizer, Phase};

use crate::config::SITE;
use crate::core::storage::PreferenceStore;

/// Copyable handle to the shared [`Localizer`], provided as context.
///
/// Reads subscribe the calling component; `set_language` notifies every
/// subscriber before its next render.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    state: Signal<Localizer>,
}

impl I18n {
    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    pub fn available_languages(&self) -> Vec<Language> {
        self.state.read().available_languages()
    }

    pub fn t(&self, key: &str) -> String {
        self.state.read().translate(key)
    }

    pub fn t_with(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.state.read().translate_with(key, args)
    }

    pub fn set_language(&self, lang: Language) {
        let mut state = self.state;
        state.write().set_language(lang);
    }
}

/// Build the localizer (restoring the saved language from `store`) and
/// provide it to the subtree. Call once, near the root.
pub fn use_i18n_provider(store: Rc<dyn PreferenceStore>) -> I18n {
    let state = use_signal(move || {
        Localizer::new(
            Rc::new(Catalog::embedded()),
            store,
            SITE.storage.language_key.clone(),
            SITE.default_language,
        )
    });
    let i18n = use_context_provider(|| I18n { state });

    // Mirror the active tag onto <html lang>.
    use_effect(move || {
        let tag = i18n.language().tag();
        let _ = document::eval(&format!("document.documentElement.lang = '{tag}';"));
    });

    i18n
}

/// The localization handle provided by [`use_i18n_provider`].
pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}
