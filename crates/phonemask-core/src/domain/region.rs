use crate::domain::calling_code::CallingCode;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// Sorted by region code.
const BUILTIN_REGIONS: &[(&str, &str)] = &[
    ("AE", "971"),
    ("AR", "54"),
    ("AT", "43"),
    ("AU", "61"),
    ("BE", "32"),
    ("BR", "55"),
    ("CA", "1"),
    ("CH", "41"),
    ("CN", "86"),
    ("DE", "49"),
    ("DK", "45"),
    ("ES", "34"),
    ("FI", "358"),
    ("FR", "33"),
    ("GB", "44"),
    ("HK", "852"),
    ("ID", "62"),
    ("IE", "353"),
    ("IN", "91"),
    ("IT", "39"),
    ("JP", "81"),
    ("KR", "82"),
    ("MO", "853"),
    ("MX", "52"),
    ("MY", "60"),
    ("NL", "31"),
    ("NO", "47"),
    ("NZ", "64"),
    ("PH", "63"),
    ("PL", "48"),
    ("PT", "351"),
    ("RU", "7"),
    ("SE", "46"),
    ("SG", "65"),
    ("TH", "66"),
    ("TR", "90"),
    ("TW", "886"),
    ("US", "1"),
    ("VN", "84"),
    ("ZA", "27"),
];

/// ISO 3166-1 alpha-2 region code, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidRegionCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RegionCode> for String {
    fn from(value: RegionCode) -> Self {
        value.0
    }
}

pub fn builtin_regions() -> Vec<(RegionCode, CallingCode)> {
    BUILTIN_REGIONS
        .iter()
        .filter_map(|(region, code)| {
            Some((RegionCode::new(region).ok()?, CallingCode::new(code).ok()?))
        })
        .collect()
}

/// Built-in regions plus any configured overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    entries: BTreeMap<RegionCode, CallingCode>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            entries: builtin_regions().into_iter().collect(),
        }
    }
}

impl RegionTable {
    pub fn with_override(mut self, region: RegionCode, code: CallingCode) -> Self {
        self.entries.insert(region, code);
        self
    }

    pub fn lookup(&self, region: &RegionCode) -> Option<&CallingCode> {
        self.entries.get(region)
    }

    pub fn resolve(&self, raw_region: &str) -> Result<CallingCode, CoreError> {
        let region = RegionCode::new(raw_region)?;
        self.lookup(&region)
            .cloned()
            .ok_or_else(|| CoreError::UnknownRegion(region.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionCode, &CallingCode)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{builtin_regions, RegionCode, RegionTable, BUILTIN_REGIONS};
    use crate::domain::CallingCode;
    use crate::error::CoreError;

    #[test]
    fn builtin_table_is_sorted_and_valid() {
        assert!(BUILTIN_REGIONS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(builtin_regions().len(), BUILTIN_REGIONS.len());
    }

    #[test]
    fn region_code_normalizes_case() {
        let region = RegionCode::new(" hk ").unwrap();
        assert_eq!(region.as_str(), "HK");
    }

    #[test]
    fn region_code_rejects_malformed_values() {
        assert!(RegionCode::new("HKG").is_err());
        assert!(RegionCode::new("H1").is_err());
        assert!(RegionCode::new("").is_err());
    }

    #[test]
    fn default_table_finds_hong_kong() {
        let region = RegionCode::new("HK").unwrap();
        let code = RegionTable::default().lookup(&region).cloned().unwrap();
        assert_eq!(code.as_str(), "852");
    }

    #[test]
    fn default_table_misses_unknown_region() {
        let region = RegionCode::new("XK").unwrap();
        assert!(RegionTable::default().lookup(&region).is_none());
    }

    #[test]
    fn table_override_replaces_and_adds() {
        let table = RegionTable::default()
            .with_override(RegionCode::new("XK").unwrap(), CallingCode::new("383").unwrap())
            .with_override(RegionCode::new("US").unwrap(), CallingCode::new("1").unwrap());
        assert_eq!(table.resolve("xk").unwrap().as_str(), "383");
        assert_eq!(table.iter().count(), BUILTIN_REGIONS.len() + 1);
    }

    #[test]
    fn table_resolve_reports_unknown_region() {
        let table = RegionTable::default();
        assert_eq!(
            table.resolve("zz"),
            Err(CoreError::UnknownRegion("ZZ".to_string()))
        );
    }
}
