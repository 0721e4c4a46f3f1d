//! Runtime side of generated translations.
//!
//! Generated code depends on this module only. Each generated component
//! consists of a contract trait extending [`Translation`], a manager
//! implementing [`TranslationManager`], and one implementation per language
//! registered in the manager's [`TranslationRegistry`].
//!
//! # Architecture
//!
//! - `language`: Language names as they appear in generated type names
//! - `locale`: Locale tag to language mapping with a default
//! - `registry`: Implementation lookup by `<Component>Translation<Language>`
//! - `manager`: Contract and manager traits plus the `bind` operation
//! - `service`: One bound manager per consumer
//!
//! # Wiring generated files
//!
//! Module paths keep folder casing: a table at
//! `translations/Pages/Counter/CounterTranslations.csv` is generated into
//! `crate::translations::Pages::Counter`. The generator writes no `mod`
//! declarations. Every folder needs a hand-written `mod.rs` that declares
//! its subfolders and the generated files:
//!
//! ```rust,ignore
//! // translations/Pages/Counter/mod.rs
//! pub mod counter_translation_english;
//! pub mod counter_translation_hungarian;
//! pub mod counter_translation_manager;
//! pub mod i_counter_translation;
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use translation_generator::i18n::{Language, TranslationManager};
//! use crate::translations::Pages::Counter::counter_translation_manager::CounterTranslationManager;
//!
//! let mut counter = CounterTranslationManager::with_language(&Language::ENGLISH)?;
//! counter.set_language(&Language::HUNGARIAN)?;
//! println!("{}", counter.page_title());
//! ```

mod language;
mod locale;
mod manager;
mod registry;
mod service;

pub use language::Language;
pub use locale::LocaleMap;
pub use manager::{bind, Translation, TranslationManager};
pub use registry::{implementation_name, Factory, TranslationRegistry};
pub use service::TranslationService;
