//! The closed set of languages the site is translated into.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
    Ru,
}

impl Language {
    /// Picker order (Ukrainian first, matching the practice's audience).
    pub const ALL: [Language; 3] = [Language::Uk, Language::En, Language::Ru];

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
            Language::Ru => "ru",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Uk => "Українська",
            Language::Ru => "Русский",
        }
    }

    pub fn identifier(self) -> LanguageIdentifier {
        self.tag().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts bare tags (`uk`) and region forms (`uk-UA`, `en_US`), any case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match base.as_str() {
            "en" => Ok(Language::En),
            "uk" => Ok(Language::Uk),
            "ru" => Ok(Language::Ru),
            _ => Err(UnsupportedLanguage(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", Language::En)]
    #[case("uk", Language::Uk)]
    #[case("ru", Language::Ru)]
    #[case("EN", Language::En)]
    #[case(" uk ", Language::Uk)]
    #[case("uk-UA", Language::Uk)]
    #[case("en_US", Language::En)]
    fn parses_supported_tags(#[case] raw: &str, #[case] expected: Language) {
        assert_eq!(raw.parse::<Language>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("de")]
    #[case("english")]
    #[case("zz-ZZ")]
    fn rejects_unknown_tags(#[case] raw: &str) {
        assert!(raw.parse::<Language>().is_err());
    }

    #[test]
    fn tag_round_trips_through_display() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn identifiers_carry_the_base_tag() {
        assert_eq!(Language::Uk.identifier().to_string(), "uk");
        assert_eq!(Language::Ru.identifier().to_string(), "ru");
    }
}
