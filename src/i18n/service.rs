//! Per-consumer translation service.
//!
//! Owns one manager and binds it to an initial language chosen from
//! explicit configuration: the requested locale if it is mapped, otherwise
//! the configured default.

use crate::config::RuntimeConfig;
use crate::error::TranslationError;
use crate::i18n::{Language, LocaleMap, TranslationManager};
use tracing::debug;

/// Owns a manager for one consumer (a request, a session, a window).
#[derive(Debug)]
pub struct TranslationService<M: TranslationManager> {
    manager: M,
    locales: LocaleMap,
}

impl<M: TranslationManager> TranslationService<M> {
    /// Bind a new manager to `language`, using the default locale map.
    pub fn new(language: &Language) -> Result<Self, TranslationError> {
        Ok(Self {
            manager: M::with_language(language)?,
            locales: LocaleMap::default(),
        })
    }

    /// Bind a new manager to the language `locale` maps to, or to the map's
    /// default when no locale is given or it is unmapped.
    pub fn with_locales(locales: LocaleMap, locale: Option<&str>) -> Result<Self, TranslationError> {
        let language = match locale {
            Some(tag) => locales.resolve(tag),
            None => locales.default_language(),
        };
        debug!(component = M::COMPONENT, locale = ?locale, language = %language, "Creating translation service");

        let manager = M::with_language(language)?;
        Ok(Self { manager, locales })
    }

    pub fn from_config(config: &RuntimeConfig, locale: Option<&str>) -> Result<Self, TranslationError> {
        Self::with_locales(config.locales.clone(), locale)
    }

    /// The bound manager application code reads from.
    pub fn translations(&self) -> &M {
        &self.manager
    }

    pub fn language(&self) -> Option<&Language> {
        self.manager.language()
    }

    pub fn locales(&self) -> &LocaleMap {
        &self.locales
    }

    /// Re-bind to `language`. On failure the previous language stays bound.
    pub fn set_language(&mut self, language: &Language) -> Result<(), TranslationError> {
        self.manager.set_language(language)
    }

    /// Re-bind to the language `locale` resolves to and return it.
    pub fn set_locale(&mut self, locale: &str) -> Result<Language, TranslationError> {
        let language = self.locales.resolve(locale).clone();
        self.manager.set_language(&language)?;
        Ok(language)
    }
}
