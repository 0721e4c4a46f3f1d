// Generated by translation-generator from GreetingTranslations.csv. Do not edit by hand.

use translation_generator::i18n::Translation;

use crate::translations::i_greeting_translation::IGreetingTranslation;

/// `Greeting` text in Hungarian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreetingTranslationHungarian;

impl GreetingTranslationHungarian {
    /// Boxed instance for the manager's registry.
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

    fn welcome(&self) -> &str {
        "Üdv, {name}!"
    }

    fn quote(&self) -> &str {
        "Azt mondta, \"szia\"\\most"
    }
}
