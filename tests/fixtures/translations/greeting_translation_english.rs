// Generated by translation-generator from GreetingTranslations.csv. Do not edit by hand.

use translation_generator::i18n::Translation;

use crate::translations::i_greeting_translation::IGreetingTranslation;

/// `Greeting` text in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreetingTranslationEnglish;

impl GreetingTranslationEnglish {
    /// Boxed instance for the manager's registry.
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

    fn welcome(&self) -> &str {
        "Welcome, {name}!"
    }

    fn quote(&self) -> &str {
        "He said \"hi\"\\now"
    }
}
