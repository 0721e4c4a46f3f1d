//! Error types for table parsing, code generation and runtime binding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading tables and emitting translation modules.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The table has no header line
    #[error("Table is empty: {}", path.display())]
    EmptyTable { path: PathBuf },

    /// The header does not contain the key column
    #[error("Table {} does not contain a '{column}' column", path.display())]
    MissingKeyColumn { path: PathBuf, column: String },

    /// A line does not match the header shape
    #[error("Table {} is malformed at line {line}: {reason}", path.display())]
    MalformedTable {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Two keys or two language columns normalize to the same identifier
    #[error("Table {} declares {kind} '{name}' more than once", path.display())]
    DuplicateIdentifier {
        path: PathBuf,
        kind: &'static str,
        name: String,
    },

    /// A folder name cannot be used as a module name
    #[error("Folder '{segment}' in {} cannot be used as a module name", path.display())]
    InvalidModuleName { path: PathBuf, segment: String },

    /// The data root does not exist or is not a directory
    #[error("Translations folder not found: {}", path.display())]
    DataRootNotFound { path: PathBuf },

    /// The anchor file is missing
    #[error("Anchor file not found: {}", path.display())]
    AnchorNotFound { path: PathBuf },

    /// The anchor file carries no module directive
    #[error("Could not determine the base module from {}", path.display())]
    NamespaceNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while binding a manager to a language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No implementation is registered for the component and language
    #[error("Translation '{implementation}' not found for component '{component}' and language '{language}'")]
    TranslationNotFound {
        component: String,
        language: String,
        implementation: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_table_names_file_and_line() {
        let err = GeneratorError::MalformedTable {
            path: PathBuf::from("root/HomeTranslations.csv"),
            line: 3,
            reason: "expected 2 fields, found 3".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("HomeTranslations.csv"));
        assert!(message.contains("line 3"));
    }

    #[test]
    fn test_missing_key_column_message() {
        let err = GeneratorError::MissingKeyColumn {
            path: PathBuf::from("a.csv"),
            column: "property_name".to_string(),
        };
        assert!(err.to_string().contains("'property_name'"));
    }

    #[test]
    fn test_translation_not_found_message() {
        let err = TranslationError::TranslationNotFound {
            component: "Counter".to_string(),
            language: "French".to_string(),
            implementation: "CounterTranslationFrench".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Counter"));
        assert!(message.contains("French"));
    }
}
