//! Language type: the name half of a generated implementation's identity.
//!
//! A language is identified by the display-case name of its table column
//! (`hungarian` -> `Hungarian`). Generated managers register their
//! implementations under these names, so `Language::new("Hungarian")`
//! selects `<Component>TranslationHungarian`.

use crate::identifier::{sanitize, to_display_case};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A language name as used in generated type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    name: Cow<'static, str>,
}

impl Language {
    pub const ENGLISH: Language = Language::new("English");

    pub const SPANISH: Language = Language::new("Spanish");

    pub const HUNGARIAN: Language = Language::new("Hungarian");

    /// Wrap a name exactly as generated code spells it.
    ///
    /// No normalization happens here; generated registries call this with
    /// names the generator already normalized.
    pub const fn new(name: &'static str) -> Language {
        Language {
            name: Cow::Borrowed(name),
        }
    }

    /// Create a Language from free-form text such as a column header.
    ///
    /// The text goes through the same normalization the generator applies
    /// to language columns, so `"hungarian"` and `"HUNGARIAN"` both give
    /// `Hungarian`.
    ///
    /// # Returns
    /// * `Ok(Language)` if an identifier survives normalization
    /// * `Err` if the text has no letters or digits
    pub fn from_name(name: &str) -> Result<Language> {
        sanitize(&to_display_case(name))
            .map(|normalized| Language {
                name: Cow::Owned(normalized),
            })
            .ok_or_else(|| anyhow!("Invalid language name: '{}'", name))
    }

    /// The display-case name (e.g. "English").
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Language::from_name(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.name.into_owned()
    }
}
