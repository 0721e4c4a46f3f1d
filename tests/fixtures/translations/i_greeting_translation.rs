// Generated by translation-generator from GreetingTranslations.csv. Do not edit by hand.

use translation_generator::i18n::Translation;

/// Property names of [`IGreetingTranslation`] in table order.
pub const PROPERTIES: &[&str] = &["Greeting", "Farewell", "Welcome", "Quote"];

/// Text every `Greeting` translation provides.
pub trait IGreetingTranslation: Translation {
    fn greeting(&self) -> &str;
    fn farewell(&self) -> &str;
    fn welcome(&self) -> &str;
    fn quote(&self) -> &str;
}
