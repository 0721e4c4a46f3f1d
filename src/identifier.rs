//! Identifier normalization for table text.
//!
//! Column names, row keys, folder names and file names are free-form text.
//! Everything that ends up in generated Rust source goes through this module
//! first, so generated names are deterministic for a given input. Distinct
//! inputs can still collapse to the same identifier; callers that need
//! uniqueness check for it themselves.

/// Token used when nothing identifier-like survives normalization.
pub const FALLBACK_IDENTIFIER: &str = "_";

/// Names the runtime uses on generated types. Accessors with these names
/// would clash with the manager's own methods and fields.
const RESERVED_NAMES: &[&str] = &[
    "apply",
    "bound_language",
    "component",
    "create",
    "is_bound",
    "language",
    "registry",
    "set_language",
    "translation",
    "with_language",
];

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Strip everything but ASCII letters, digits and underscores.
///
/// Returns `None` when nothing survives. A result starting with a digit is
/// prefixed with an underscore.
pub fn sanitize(text: &str) -> Option<String> {
    let clean: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if clean.is_empty() {
        return None;
    }

    if clean.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("_{}", clean))
    } else {
        Some(clean)
    }
}

/// Convert arbitrary text into a valid identifier fragment.
///
/// Never returns an empty string: text with no identifier characters maps
/// to [`FALLBACK_IDENTIFIER`].
pub fn to_identifier_fragment(text: &str) -> String {
    sanitize(text).unwrap_or_else(|| FALLBACK_IDENTIFIER.to_string())
}

/// Split on underscores and spaces and re-join the words capitalized.
///
/// `"current_count"` becomes `"CurrentCount"`, `"HUNGARIAN"` becomes
/// `"Hungarian"`.
pub fn to_display_case(text: &str) -> String {
    words(text).map(capitalize_word).collect()
}

/// Display case reduced to a valid type-name fragment.
pub fn to_type_fragment(text: &str) -> String {
    to_identifier_fragment(&to_display_case(text))
}

/// Field and accessor name for a property key.
///
/// Words are lower-cased and joined with `_`. Keywords, names the runtime
/// reserves and the bare fallback get a trailing underscore.
pub fn to_field_name(text: &str) -> String {
    let joined = words(text)
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    let field = to_identifier_fragment(&joined);

    if field == FALLBACK_IDENTIFIER
        || RUST_KEYWORDS.contains(&field.as_str())
        || RESERVED_NAMES.contains(&field.as_str())
    {
        format!("{}_", field)
    } else {
        field
    }
}

/// Derive the component name from a table's file stem.
///
/// A trailing `suffix` is removed case-insensitively. Stems written with
/// separators are display-cased; a single-word stem keeps its inner casing
/// and only has its first letter raised, so `NavMenu` stays `NavMenu`.
pub fn component_name(file_stem: &str, suffix: &str) -> String {
    let stem = strip_suffix_ignore_case(file_stem, suffix);

    if stem.contains(['_', ' ']) {
        to_type_fragment(stem)
    } else {
        to_identifier_fragment(&capitalize_first(stem))
    }
}

/// Spell `ident` so it can name a module in a path.
///
/// Keywords become raw identifiers (`type` -> `r#type`), which still map to
/// the folder `type`. Returns `None` for names no module can carry: path
/// keywords (`crate`, `self`, `super`, `Self`) and the bare `_`.
pub fn to_module_segment(ident: &str) -> Option<String> {
    match ident {
        "crate" | "self" | "super" | "Self" | FALLBACK_IDENTIFIER => None,
        _ if RUST_KEYWORDS.contains(&ident) => Some(format!("r#{}", ident)),
        _ => Some(ident.to_string()),
    }
}

/// Convert a PascalCase type name into a snake_case module name.
///
/// `ICounterTranslation` becomes `i_counter_translation`.
pub fn to_snake_case(type_name: &str) -> String {
    let chars: Vec<char> = type_name.chars().collect();
    let mut out = String::with_capacity(type_name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(['_', ' ']).filter(|w| !w.is_empty())
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || text.len() < suffix.len() {
        return text;
    }
    let split = text.len() - suffix.len();
    match (text.get(..split), text.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => head,
        _ => text,
    }
}
