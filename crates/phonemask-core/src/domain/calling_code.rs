use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_CALLING_CODE_DIGITS: usize = 3;

/// Country calling code without the leading `+`, e.g. `852`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallingCode(String);

impl CallingCode {
    /// Accepts an optional leading `+` and surrounding whitespace.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty()
            || digits.len() > MAX_CALLING_CODE_DIGITS
            || !digits.chars().all(|ch| ch.is_ascii_digit())
            || digits.starts_with('0')
        {
            return Err(CoreError::InvalidCallingCode(raw.to_string()));
        }
        Ok(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `+<code>` anchor every partial value starts with.
    pub fn prefix(&self) -> String {
        format!("+{}", self.0)
    }
}

impl fmt::Display for CallingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CallingCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CallingCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CallingCode> for String {
    fn from(value: CallingCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::CallingCode;
    use crate::error::CoreError;

    #[test]
    fn calling_code_accepts_digits() {
        let code = CallingCode::new("852").unwrap();
        assert_eq!(code.as_str(), "852");
        assert_eq!(code.prefix(), "+852");
    }

    #[test]
    fn calling_code_strips_plus_and_whitespace() {
        let code = CallingCode::new(" +1 ").unwrap();
        assert_eq!(code.as_str(), "1");
        assert_eq!(code.to_string(), "1");
    }

    #[test]
    fn calling_code_rejects_malformed_values() {
        for raw in ["", "+", "85a", "1234", "044", "++1", "8 52"] {
            assert_eq!(
                CallingCode::new(raw),
                Err(CoreError::InvalidCallingCode(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn calling_code_serializes_as_string() {
        let code: CallingCode = serde_json::from_str("\"+44\"").unwrap();
        assert_eq!(code.as_str(), "44");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"44\"");
        assert!(serde_json::from_str::<CallingCode>("\"abc\"").is_err());
    }
}
