use crate::i18n::{Language, LocaleMap};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Crate path generated code imports the runtime from.
pub const DEFAULT_RUNTIME_CRATE: &str = "translation_generator";

#[derive(Debug, Clone)]
pub struct Config {
    // Input
    pub data_root: PathBuf,

    // Output
    pub output_root: Option<PathBuf>,
    pub runtime_crate: String,

    // Failure policy
    pub fail_fast: bool,
}

impl Config {
    /// Defaults: artifacts next to their tables, continue past failing tables.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            output_root: None,
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            fail_fast: false,
        }
    }

    pub fn from_env(data_root: impl Into<PathBuf>) -> Result<Self> {
        let runtime_crate = std::env::var("TRANSLATIONS_RUNTIME_CRATE")
            .unwrap_or_else(|_| DEFAULT_RUNTIME_CRATE.to_string());
        validate_crate_path(&runtime_crate)
            .context("TRANSLATIONS_RUNTIME_CRATE is not a valid path")?;

        let fail_fast = match std::env::var("TRANSLATIONS_FAIL_FAST") {
            Ok(value) => parse_flag(&value).context("TRANSLATIONS_FAIL_FAST must be a boolean")?,
            Err(_) => false,
        };

        Ok(Self {
            data_root: data_root.into(),

            // Mirror the data root layout under this directory when set
            output_root: std::env::var("TRANSLATIONS_OUTPUT_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            runtime_crate,

            fail_fast,
        })
    }
}

/// Configuration for applications binding generated managers.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub locales: LocaleMap,
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self> {
        let mut locales = match std::env::var("TRANSLATIONS_LOCALE_MAP") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read locale map {}", path))?;
                LocaleMap::from_json(&json)?
            }
            Err(_) => LocaleMap::default(),
        };

        if let Ok(name) = std::env::var("TRANSLATIONS_DEFAULT_LANGUAGE") {
            let language = Language::from_name(&name)
                .context("TRANSLATIONS_DEFAULT_LANGUAGE is not a valid language")?;
            locales.set_default_language(language);
        }

        Ok(Self { locales })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => bail!("unrecognized value '{}'", other),
    }
}

fn validate_crate_path(path: &str) -> Result<()> {
    let valid_segment = |segment: &str| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    if path.split("::").all(valid_segment) {
        Ok(())
    } else {
        bail!("'{}' is not a Rust path", path)
    }
}
