//! Implementation registry: the explicit replacement for type discovery.
//!
//! Every generated manager builds one of these in its `registry()` function,
//! listing the factory of each language implementation emitted for the
//! component. Lookups go by implementation name,
//! `<Component>Translation<Language>`, so the naming convention is kept as
//! the key without any runtime type scanning.

use crate::error::TranslationError;
use crate::i18n::Language;
use std::collections::BTreeMap;
use std::fmt;

/// Produces a fresh implementation instance behind the contract type `C`.
pub type Factory<C> = fn() -> Box<C>;

struct Registration<C: ?Sized> {
    language: Language,
    factory: Factory<C>,
}

/// Implementations of one component, keyed by implementation name.
pub struct TranslationRegistry<C: ?Sized> {
    component: &'static str,
    implementations: BTreeMap<String, Registration<C>>,
}

/// `<component>Translation<language>`
pub fn implementation_name(component: &str, language: &Language) -> String {
    format!("{}Translation{}", component, language.name())
}

impl<C: ?Sized> TranslationRegistry<C> {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            implementations: BTreeMap::new(),
        }
    }

    /// Register the factory for one language. A second registration for the
    /// same language replaces the first.
    pub fn register(mut self, language: Language, factory: Factory<C>) -> Self {
        let name = implementation_name(self.component, &language);
        self.implementations
            .insert(name, Registration { language, factory });
        self
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn contains(&self, language: &Language) -> bool {
        self.implementations
            .contains_key(&implementation_name(self.component, language))
    }

    /// Registered languages, ordered by implementation name.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.implementations.values().map(|r| &r.language)
    }

    pub fn len(&self) -> usize {
        self.implementations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }

    /// Construct the implementation registered for `language`.
    pub fn instantiate(&self, language: &Language) -> Result<Box<C>, TranslationError> {
        let name = implementation_name(self.component, language);
        match self.implementations.get(&name) {
            Some(registration) => Ok((registration.factory)()),
            None => Err(TranslationError::TranslationNotFound {
                component: self.component.to_string(),
                language: language.name().to_string(),
                implementation: name,
            }),
        }
    }
}

impl<C: ?Sized> fmt::Debug for TranslationRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationRegistry")
            .field("component", &self.component)
            .field(
                "implementations",
                &self.implementations.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
