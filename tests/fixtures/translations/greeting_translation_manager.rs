// Generated by translation-generator from GreetingTranslations.csv. Do not edit by hand.

use translation_generator::i18n::{Language, Translation, TranslationManager, TranslationRegistry};

use crate::translations::i_greeting_translation::IGreetingTranslation;
use crate::translations::greeting_translation_english::GreetingTranslationEnglish;
use crate::translations::greeting_translation_hungarian::GreetingTranslationHungarian;

/// Bindable holder for `Greeting` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingTranslationManager {
    bound_language: Option<Language>,
    greeting: String,
    farewell: String,
    welcome: String,
    quote: String,
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

    fn welcome(&self) -> &str {
        &self.welcome
    }

    fn quote(&self) -> &str {
        &self.quote
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
        self.welcome = source.welcome().to_owned();
        self.quote = source.quote().to_owned();
        self.bound_language = Some(language);
    }
}
