//! Translation quality checks run before a component is emitted.
//!
//! Nothing found here stops generation: blank cells become empty string
//! literals and placeholder drift still compiles. The findings are logged so
//! untranslated text does not ship silently.

use crate::component::ComponentModel;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Findings for one component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report is clean (no warnings)
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

// `{name}` style placeholders
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check a component's values.
    ///
    /// - every cell of every language column is filled
    /// - every language uses the same `{placeholder}` tokens as the first
    ///   language column
    pub fn validate(component: &ComponentModel) -> ValidationReport {
        let mut report = ValidationReport::new();

        for language in &component.languages {
            for (property, value) in component.properties.iter().zip(&language.values) {
                if value.trim().is_empty() {
                    report.warnings.push(format!(
                        "Language '{}' has no value for '{}'",
                        language.column, property.key
                    ));
                }
            }
        }

        let Some((reference, others)) = component.languages.split_first() else {
            return report;
        };

        for (index, property) in component.properties.iter().enumerate() {
            let expected = Self::extract_placeholders(&reference.values[index]);

            for language in others {
                let value = &language.values[index];
                if value.trim().is_empty() {
                    continue;
                }

                let found = Self::extract_placeholders(value);
                if found != expected {
                    report.warnings.push(format!(
                        "Placeholder mismatch in '{}': '{}' has {:?}, '{}' has {:?}",
                        property.key, reference.column, expected, language.column, found
                    ));
                }
            }
        }

        report
    }

    /// Extract all `{placeholder}` names from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
