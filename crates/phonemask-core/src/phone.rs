//! Keystroke normalization for international phone number fields.
//!
//! An input widget passes the current field text through [`normalize_input`]
//! on every keystroke and re-renders the field with the returned value. The
//! string helpers take the calling code as `&str` and expect a non-empty
//! digit string; [`CallingCode`] is the checked form of that precondition.

use crate::domain::CallingCode;
use serde::Serialize;

/// Keeps ASCII digits and `+`, in their original order.
pub fn clean_raw_input_value(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect()
}

/// Strips a leading `+<calling_code>` from a cleaned value.
///
/// A bare `+` trims to nothing. Values without a leading `+` are already
/// national numbers and come back unchanged, and so does a `+` prefix that
/// names some other calling code.
pub fn trim_country_calling_code(value: &str, calling_code: &str) -> String {
    if value == "+" {
        return String::new();
    }

    match value
        .strip_prefix('+')
        .and_then(|rest| rest.strip_prefix(calling_code))
    {
        Some(national) => national.to_string(),
        None => value.to_string(),
    }
}

/// Anchors a cleaned value with `+<calling_code>`.
///
/// The result always starts with `+<calling_code>` and carries no other `+`.
pub fn make_partial_value(value: &str, calling_code: &str) -> String {
    let trimmed = trim_country_calling_code(value, calling_code);

    let mut out = String::with_capacity(1 + calling_code.len() + trimmed.len());
    out.push('+');
    out.push_str(calling_code);

    // "+85" while editing "+852": still inside the prefix.
    if let Some(typed) = trimmed.strip_prefix('+') {
        if typed.len() < calling_code.len() && calling_code.starts_with(typed) {
            return out;
        }
    }

    out.extend(trimmed.chars().filter(|ch| ch.is_ascii_digit()));
    out
}

/// Field value after one keystroke, with the national part split out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialInput {
    pub value: String,
    pub national_digits: String,
    pub calling_code: CallingCode,
}

/// Cleans raw field text and anchors it with the calling code.
pub fn normalize_input(raw: &str, calling_code: &CallingCode) -> PartialInput {
    let cleaned = clean_raw_input_value(raw);
    let value = make_partial_value(&cleaned, calling_code.as_str());
    let national_digits = trim_country_calling_code(&value, calling_code.as_str());
    PartialInput {
        value,
        national_digits,
        calling_code: calling_code.clone(),
    }
}
