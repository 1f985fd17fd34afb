//! The translation table: one Fluent bundle per [`Language`].
//!
//! Sources are the embedded `i18n/<tag>/medcare-ui.ftl` files. The table is
//! built once at start and only read afterwards.

use std::collections::HashMap;
use std::fmt;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::Embed;
use tracing::{debug, warn};

use super::Language;

/// Fluent "domain" (the per-locale file name, without extension).
const DOMAIN: &str = "medcare-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("no embedded translation file for `{0}`")]
    MissingLocale(Language),
    #[error("translation file for `{0}` is not valid UTF-8")]
    Encoding(Language),
}

pub struct Catalog {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Catalog {
    /// A catalog with no messages; every lookup misses.
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Load every supported language from the embedded `.ftl` files.
    ///
    /// A language whose file is missing or unreadable is left without a
    /// bundle, so its lookups miss instead of failing the whole catalog.
    pub fn embedded() -> Self {
        let mut catalog = Self::empty();
        for lang in Language::ALL {
            match embedded_source(lang) {
                Ok(source) => catalog.add_source(lang, &source),
                Err(err) => warn!(language = %lang, "skipping translations: {err}"),
            }
        }
        catalog
    }

    /// Parse `source` as Fluent and install it as the bundle for `lang`,
    /// replacing any previous one. Malformed entries are skipped.
    pub fn add_source(&mut self, lang: Language, source: &str) {
        let resource = match FluentResource::try_new(source.to_owned()) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!(
                    language = %lang,
                    errors = errors.len(),
                    "ignoring malformed entries in translation file"
                );
                resource
            }
        };

        let mut bundle = FluentBundle::new(vec![lang.identifier()]);
        // Placeables are plain text here; no bidi isolation marks.
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            warn!(
                language = %lang,
                errors = errors.len(),
                "duplicate message ids in translation file"
            );
        }
        self.bundles.insert(lang, bundle);
    }

    /// Formatted message for `key` in `lang`, or `None` when that language
    /// has no such message (or the message has no value).
    pub fn lookup(&self, lang: Language, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            debug!(language = %lang, key, ?errors, "message formatted with errors");
        }
        Some(text.into_owned())
    }

    pub fn contains(&self, lang: Language, key: &str) -> bool {
        self.bundles
            .get(&lang)
            .and_then(|bundle| bundle.get_message(key))
            .is_some_and(|message| message.value().is_some())
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|lang| self.bundles.contains_key(lang))
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("languages", &self.languages().collect::<Vec<_>>())
            .finish()
    }
}

fn embedded_source(lang: Language) -> Result<String, I18nError> {
    let path = format!("{}/{DOMAIN}.ftl", lang.tag());
    let file = Localizations::get(&path).ok_or(I18nError::MissingLocale(lang))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| I18nError::Encoding(lang))
}

/// Locale folder names present in the embedded assets.
pub fn embedded_locales() -> Vec<String> {
    let mut locales = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_embedded_folder() {
        let locales = embedded_locales();
        for lang in Language::ALL {
            assert!(locales.iter().any(|l| l == lang.tag()), "missing {lang}");
        }
        assert_eq!(locales.len(), Language::ALL.len());
    }

    #[test]
    fn embedded_catalog_loads_all_languages() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.languages().count(), Language::ALL.len());
    }

    #[test]
    fn lookup_is_per_language_without_cross_fallback() {
        let mut catalog = Catalog::empty();
        catalog.add_source(Language::En, "greeting = Hello\nonly-en = English only\n");
        catalog.add_source(Language::Uk, "greeting = Привіт\n");

        assert_eq!(catalog.lookup(Language::En, "greeting", None).as_deref(), Some("Hello"));
        assert_eq!(catalog.lookup(Language::Uk, "greeting", None).as_deref(), Some("Привіт"));
        assert_eq!(catalog.lookup(Language::Uk, "only-en", None), None);
        assert_eq!(catalog.lookup(Language::Ru, "greeting", None), None);
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        let mut catalog = Catalog::empty();
        catalog.add_source(Language::En, "copyright = © { $year } { $brand }.\n");

        let mut args = FluentArgs::new();
        args.set("year", 2026);
        args.set("brand", "MedCare");
        assert_eq!(
            catalog.lookup(Language::En, "copyright", Some(&args)).as_deref(),
            Some("© 2026 MedCare.")
        );
    }

    #[test]
    fn malformed_entries_do_not_hide_valid_ones() {
        let mut catalog = Catalog::empty();
        catalog.add_source(Language::En, "good = Fine\n!!! not fluent\nalso-good = Also fine\n");

        assert!(catalog.contains(Language::En, "good"));
        assert!(catalog.contains(Language::En, "also-good"));
    }

    #[test]
    fn attribute_only_messages_count_as_missing() {
        let mut catalog = Catalog::empty();
        catalog.add_source(Language::En, "button =\n    .title = Press\n");

        assert!(!catalog.contains(Language::En, "button"));
        assert_eq!(catalog.lookup(Language::En, "button", None), None);
    }
}
