//! Translation managers and the bind operation.
//!
//! A manager is the single object application code reads translated text
//! from. It starts Unbound; [`bind`] copies one language implementation's
//! values onto it, and is the only way its values change. Values are copied,
//! not referenced, so the implementation is dropped right after the copy.
//!
//! Managers are plain owned values. `bind` writes each property in turn, so
//! a manager shared between threads needs external locking.

use crate::error::TranslationError;
use crate::i18n::{Language, TranslationRegistry};
use tracing::debug;

/// Capability shared by every generated contract.
pub trait Translation {
    /// Name of the component the type was generated for.
    fn component(&self) -> &'static str;
}

/// A bindable holder generated for one component.
///
/// Generated managers implement the component's contract themselves, so
/// [`TranslationManager::translation`] hands out the manager as its own
/// current view.
pub trait TranslationManager: Default {
    /// The component's contract, as a trait object type.
    type Contract: Translation + ?Sized;

    /// Component name shared by the manager and its implementations.
    const COMPONENT: &'static str;

    /// Every language implementation generated for this component.
    fn registry() -> TranslationRegistry<Self::Contract>;

    /// The manager viewed through its contract.
    fn translation(&self) -> &Self::Contract;

    /// Language currently bound, `None` while Unbound.
    fn language(&self) -> Option<&Language>;

    /// Copy every contract property from `source` and record `language`.
    fn apply(&mut self, source: &Self::Contract, language: Language);

    fn is_bound(&self) -> bool {
        self.language().is_some()
    }

    /// Bind this manager to `language`. See [`bind`].
    fn set_language(&mut self, language: &Language) -> Result<(), TranslationError> {
        bind(self, language)
    }

    /// A new manager already bound to `language`.
    fn with_language(language: &Language) -> Result<Self, TranslationError> {
        let mut manager = Self::default();
        manager.set_language(language)?;
        Ok(manager)
    }
}

/// Copy the values of `language`'s implementation onto `manager`.
///
/// The implementation is looked up before anything is written: when the
/// language has no implementation the manager keeps its previous state and
/// the call fails with [`TranslationError::TranslationNotFound`]. Binding the
/// same language again yields the same state.
pub fn bind<M: TranslationManager>(
    manager: &mut M,
    language: &Language,
) -> Result<(), TranslationError> {
    let implementation = M::registry().instantiate(language)?;
    manager.apply(&*implementation, language.clone());

    debug!(component = M::COMPONENT, language = %language, "Bound translation manager");
    Ok(())
}

/// A hand-written component in the shape the emitter produces.
#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    pub trait IGreetingTranslation: Translation {
        fn greeting(&self) -> &str;
        fn farewell(&self) -> &str;
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GreetingTranslationManager {
        bound_language: Option<Language>,
        greeting: String,
        farewell: String,
    }

    impl Translation for GreetingTranslationManager {
        fn component(&self) -> &'static str {
            "Greeting"
        }
    }

    impl IGreetingTranslation for GreetingTranslationManager {
        fn greeting(&self) -> &str {
            &self.greeting
        }

        fn farewell(&self) -> &str {
            &self.farewell
        }
    }

    impl TranslationManager for GreetingTranslationManager {
        type Contract = dyn IGreetingTranslation;

        const COMPONENT: &'static str = "Greeting";

        fn registry() -> TranslationRegistry<Self::Contract> {
            TranslationRegistry::new(Self::COMPONENT)
                .register(Language::new("English"), GreetingTranslationEnglish::create)
                .register(Language::new("Hungarian"), GreetingTranslationHungarian::create)
        }

        fn translation(&self) -> &Self::Contract {
            self
        }

        fn language(&self) -> Option<&Language> {
            self.bound_language.as_ref()
        }

        fn apply(&mut self, source: &Self::Contract, language: Language) {
            self.greeting = source.greeting().to_owned();
            self.farewell = source.farewell().to_owned();
            self.bound_language = Some(language);
        }
    }

    pub struct GreetingTranslationEnglish;

    impl GreetingTranslationEnglish {
        pub fn create() -> Box<dyn IGreetingTranslation> {
            Box::new(Self)
        }
    }

    impl Translation for GreetingTranslationEnglish {
        fn component(&self) -> &'static str {
            "Greeting"
        }
    }

    impl IGreetingTranslation for GreetingTranslationEnglish {
        fn greeting(&self) -> &str {
            "Hello"
        }

        fn farewell(&self) -> &str {
            "Goodbye"
        }
    }

    pub struct GreetingTranslationHungarian;

    impl GreetingTranslationHungarian {
        pub fn create() -> Box<dyn IGreetingTranslation> {
            Box::new(Self)
        }
    }

    impl Translation for GreetingTranslationHungarian {
        fn component(&self) -> &'static str {
            "Greeting"
        }
    }

    impl IGreetingTranslation for GreetingTranslationHungarian {
        fn greeting(&self) -> &str {
            "Szia"
        }

        fn farewell(&self) -> &str {
            "Viszlát"
        }
    }
}
