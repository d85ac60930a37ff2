//! Effect name validation and the identifiers derived from it.

use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

/// Whole-string match: every character must be a word character or whitespace.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\s]+$").unwrap());

/// Check that `name` can be used as an effect directory and class name.
///
/// The whole name must consist of word characters and whitespace, at least
/// one of them must be alphanumeric, and the derived class name must not start
/// with a digit, so it is a valid C++ identifier.
pub fn validate_name(name: &str) -> Result<()> {
    if !NAME_RE.is_match(name) {
        return Err(anyhow!(
            "the effect name must be alphanumeric (letters, digits, '_' and spaces), got '{name}'"
        ));
    }
    if !name.chars().any(char::is_alphanumeric) {
        return Err(anyhow!(
            "the effect name must contain at least one letter or digit, got '{name}'"
        ));
    }
    if class_name(name).starts_with(|c: char| c.is_numeric()) {
        return Err(anyhow!(
            "the effect name must not start with a digit (C++ class names cannot), got '{name}'"
        ));
    }
    Ok(())
}

/// Title-case `name`: a cased character is upper-cased when it follows an
/// uncased one and lower-cased otherwise ("2band eq" -> "2Band Eq").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_cased = false;
    for c in name.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// C++ class name for the effect: title-cased, underscores and whitespace removed.
pub fn class_name(name: &str) -> String {
    title_case(name)
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect()
}

/// Lower-cased name with underscores removed.
pub fn canonical_name(name: &str) -> String {
    name.replace('_', "").to_lowercase()
}
