//! Active-language state plus translation lookups.

use std::rc::Rc;

use fluent::FluentArgs;
use tracing::{debug, info, warn};

use super::{Catalog, Language};
use crate::core::storage::PreferenceStore;

/// Observable lifecycle of the localizer.
///
/// Construction reads storage synchronously, so callers only ever see
/// `Ready`; the state exists so an asynchronous store can slot in later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready(Language),
}

/// Single owner of the active language. Every write goes through
/// [`Localizer::set_language`].
pub struct Localizer {
    catalog: Rc<Catalog>,
    store: Rc<dyn PreferenceStore>,
    storage_key: String,
    default: Language,
    phase: Phase,
}

impl Localizer {
    /// Build the localizer and restore the persisted language, if any.
    pub fn new(
        catalog: Rc<Catalog>,
        store: Rc<dyn PreferenceStore>,
        storage_key: impl Into<String>,
        default: Language,
    ) -> Self {
        let mut localizer = Self {
            catalog,
            store,
            storage_key: storage_key.into(),
            default,
            phase: Phase::Initializing,
        };
        let restored = localizer.restore();
        localizer.phase = Phase::Ready(restored);
        localizer
    }

    fn restore(&self) -> Language {
        match self.store.load(&self.storage_key) {
            Ok(Some(tag)) => tag.parse().unwrap_or_else(|err| {
                warn!("ignoring persisted language: {err}");
                self.default
            }),
            Ok(None) => self.default,
            Err(err) => {
                warn!("could not read persisted language: {err}");
                self.default
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn language(&self) -> Language {
        match self.phase {
            Phase::Ready(lang) => lang,
            Phase::Initializing => self.default,
        }
    }

    /// Languages offered by the picker: those with a loaded bundle, in
    /// picker order.
    pub fn available_languages(&self) -> Vec<Language> {
        self.catalog.languages().collect()
    }

    /// Persist `lang` and make it active. The in-memory language only changes
    /// after the write succeeds, so state and storage never disagree.
    pub fn set_language(&mut self, lang: Language) {
        if self.phase == Phase::Ready(lang) {
            return;
        }
        if let Err(err) = self.store.save(&self.storage_key, lang.tag()) {
            warn!(language = %lang, "language not changed, could not persist it: {err}");
            return;
        }
        info!(from = %self.language(), to = %lang, "language switched");
        self.phase = Phase::Ready(lang);
    }

    /// Parse `tag` and switch to it; unsupported tags leave state unchanged.
    pub fn select_tag(&mut self, tag: &str) {
        match tag.parse() {
            Ok(lang) => self.set_language(lang),
            Err(err) => warn!("{err}; keeping {}", self.language()),
        }
    }

    /// Message for `key` in the active language, or `key` itself when the
    /// active language has no such message.
    pub fn translate(&self, key: &str) -> String {
        self.translate_inner(key, None)
    }

    pub fn translate_with(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.translate_inner(key, Some(args))
    }

    fn translate_inner(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let lang = self.language();
        self.catalog.lookup(lang, key, args).unwrap_or_else(|| {
            debug!(language = %lang, key, "missing translation");
            key.to_string()
        })
    }
}
