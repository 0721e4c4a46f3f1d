//! Module path derivation from the folder layout under the data root.
//!
//! The base module is declared once in the anchor file at the data root:
//!
//! ```text
//! //! module crate::translations;
//! ```
//!
//! Each table's module path is the base module followed by the folders
//! between the data root and the table.

use crate::error::GeneratorError;
use crate::identifier::{sanitize, to_module_segment};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};
use std::sync::OnceLock;

/// File at the data root that declares the base module.
pub const ANCHOR_FILE: &str = "mod.rs";

/// Directive that starts the declaration line in the anchor file.
pub const MODULE_DIRECTIVE: &str = "//! module";

/// Module path separator.
pub const SEPARATOR: &str = "::";

static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Read the base module declared in an anchor file.
pub fn base_module(anchor: &Path) -> Result<String, GeneratorError> {
    let content = fs::read_to_string(anchor).map_err(|source| match source.kind() {
        ErrorKind::NotFound => GeneratorError::AnchorNotFound {
            path: anchor.to_path_buf(),
        },
        _ => GeneratorError::ReadFailure {
            path: anchor.to_path_buf(),
            source,
        },
    })?;

    parse_base_module(&content).ok_or_else(|| GeneratorError::NamespaceNotFound {
        path: anchor.to_path_buf(),
    })
}

/// Extract the module declared by the first directive line.
///
/// The name is taken verbatim up to the `;` terminator or the end of the
/// line. Lines that merely start with the same text (`//! modules ...`) are
/// not directives. Only the first directive counts, even when its name is
/// empty.
pub fn parse_base_module(content: &str) -> Option<String> {
    let regex = DIRECTIVE_REGEX.get_or_init(|| {
        Regex::new(&format!(r"^{}(?:\s+([^;]*)|\s*;|\s*$)", regex::escape(MODULE_DIRECTIVE)))
            .unwrap()
    });

    let captures = content.lines().find_map(|line| regex.captures(line.trim()))?;

    let name = captures.get(1).map_or("", |m| m.as_str()).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Module path for tables found in `table_dir`.
///
/// Folder names are reduced to identifier characters; folders with nothing
/// left are dropped. Keyword folders are written as raw identifiers
/// (`r#type`). A table directly in `data_root` gets `base` unchanged.
///
/// Fails for folders that cannot name a module, such as `self` or `_`.
pub fn derive_namespace(
    base: &str,
    data_root: &Path,
    table_dir: &Path,
) -> Result<String, GeneratorError> {
    let relative = table_dir.strip_prefix(data_root).unwrap_or(Path::new(""));

    let mut segments = Vec::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        let Some(ident) = sanitize(&part.to_string_lossy()) else {
            continue;
        };

        let segment =
            to_module_segment(&ident).ok_or_else(|| GeneratorError::InvalidModuleName {
                path: table_dir.to_path_buf(),
                segment: part.to_string_lossy().into_owned(),
            })?;
        segments.push(segment);
    }

    if segments.is_empty() {
        Ok(base.to_string())
    } else {
        Ok(format!("{}{}{}", base, SEPARATOR, segments.join(SEPARATOR)))
    }
}
