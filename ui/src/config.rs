//! Site configuration embedded from `site.toml`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::error;

use crate::i18n::Language;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parsed once on first access; a broken file falls back to defaults.
pub static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::parse(SITE_TOML).unwrap_or_else(|err| {
        error!("invalid site.toml, using built-in defaults: {err}");
        SiteConfig::default()
    })
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_language: Language,
    pub brand: Brand,
    pub storage: StorageKeys,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    /// Wordmark halves, rendered in two colours.
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub language_key: String,
    pub visit_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub address: Vec<String>,
    pub hours: Vec<String>,
    pub call_href: String,
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            brand: Brand::default(),
            storage: StorageKeys::default(),
            contact: ContactDetails::default(),
        }
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "MedCare".into(),
            primary: "Med".into(),
            secondary: "Care".into(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            language_key: "language".into(),
            visit_key: "hasVisited".into(),
        }
    }
}

impl ContactDetails {
    pub fn primary_phone(&self) -> &str {
        self.phones.first().map(String::as_str).unwrap_or_default()
    }

    pub fn primary_email(&self) -> &str {
        self.emails.first().map(String::as_str).unwrap_or_default()
    }
}
