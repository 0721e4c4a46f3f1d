//! Locale map: locale tags to languages, with a default for everything else.
//!
//! The web layer hands over whatever locale the client asked for
//! (`hu-HU`, `en_US.UTF-8`, ...). This map is the only place such tags are
//! turned into a [`Language`]; there is no process-wide culture involved.

use crate::i18n::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from locale tags to languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMap {
    /// Language used for unmapped locales
    default: Language,

    /// Locale tag (e.g. "hu-HU") to language
    #[serde(default)]
    locales: BTreeMap<String, Language>,
}

impl LocaleMap {
    /// Create an empty map that resolves everything to `default`.
    pub fn new(default: Language) -> Self {
        Self {
            default,
            locales: BTreeMap::new(),
        }
    }

    /// Add or replace a locale mapping.
    pub fn with_locale(mut self, locale: &str, language: Language) -> Self {
        self.locales.insert(normalize_locale(locale), language);
        self
    }

    /// Parse a map from JSON.
    ///
    /// ```json
    /// { "default": "English", "locales": { "hu-HU": "Hungarian" } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: LocaleMap =
            serde_json::from_str(json).context("Failed to parse locale map JSON")?;

        // Keys written by hand may use any casing or separator
        let mut map = LocaleMap::new(parsed.default);
        for (locale, language) in parsed.locales {
            map = map.with_locale(&locale, language);
        }
        Ok(map)
    }

    pub fn default_language(&self) -> &Language {
        &self.default
    }

    pub fn set_default_language(&mut self, language: Language) {
        self.default = language;
    }

    /// Language mapped to `locale`, if any.
    ///
    /// Matching ignores case, treats `_` like `-` and drops an encoding
    /// suffix such as `.UTF-8`.
    pub fn lookup(&self, locale: &str) -> Option<&Language> {
        self.locales.get(&normalize_locale(locale))
    }

    /// Language for `locale`, falling back to the default.
    pub fn resolve(&self, locale: &str) -> &Language {
        self.lookup(locale).unwrap_or(&self.default)
    }

    /// All mapped locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &Language)> {
        self.locales.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for LocaleMap {
    fn default() -> Self {
        LocaleMap::new(Language::ENGLISH)
            .with_locale("en-US", Language::ENGLISH)
            .with_locale("es-ES", Language::SPANISH)
            .with_locale("hu-HU", Language::HUNGARIAN)
    }
}

fn normalize_locale(locale: &str) -> String {
    let tag = locale.split('.').next().unwrap_or_default();
    tag.trim().replace('_', "-").to_ascii_lowercase()
}
