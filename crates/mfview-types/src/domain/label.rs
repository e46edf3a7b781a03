use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{Error, Result, orbit_index};

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[a-z]+\.[a-z]+$").expect("valid label regex"));

/// True iff `label` has the shape `level.weight.char_orbit.hecke_orbit`, e.g. `1.12.a.a`
pub fn is_valid_label(label: &str) -> bool {
    LABEL_RE.is_match(label)
}

/// Validated newform label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NewformLabel(String);

impl NewformLabel {
    pub fn parse(label: &str) -> Result<Self> {
        if is_valid_label(label) {
            Ok(Self(label.to_string()))
        } else {
            Err(Error::InvalidLabel(label.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Level N. Labels with absurdly long digit runs saturate rather than fail.
    pub fn level(&self) -> u64 {
        self.parts()
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(u64::MAX)
    }

    pub fn weight(&self) -> u64 {
        self.parts()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(u64::MAX)
    }

    /// 1-based character orbit index decoded from the third part
    pub fn char_orbit(&self) -> Option<u32> {
        self.parts().nth(2).and_then(orbit_index)
    }

    /// Label of the newspace containing this form (first three parts)
    pub fn space_label(&self) -> String {
        self.parts().take(3).collect::<Vec<_>>().join(".")
    }
}

impl fmt::Display for NewformLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewformLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NewformLabel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<NewformLabel> for String {
    fn from(label: NewformLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for NewformLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        assert!(is_valid_label("1.12.a.a"));
        assert!(is_valid_label("23.2.a.a"));
        assert!(is_valid_label("7.3.b.a"));
        assert!(is_valid_label("1000.2.bz.aab"));
    }

    #[test]
    fn test_invalid_labels() {
        assert!(!is_valid_label("1.12.a"));
        assert!(!is_valid_label("abc"));
        assert!(!is_valid_label("1.12.A.a"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label("1.12.a.a.a"));
        assert!(!is_valid_label(" 1.12.a.a"));
        assert!(!is_valid_label("1.12.a.a\n"));
        assert!(!is_valid_label("x.12.a.a"));
    }

    #[test]
    fn test_label_parts() {
        let label = NewformLabel::parse("7.3.b.a").unwrap();
        assert_eq!(label.level(), 7);
        assert_eq!(label.weight(), 3);
        assert_eq!(label.char_orbit(), Some(2));
        assert_eq!(label.space_label(), "7.3.b");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = NewformLabel::parse("1.12.a").unwrap_err();
        assert!(matches!(err, Error::InvalidLabel(ref l) if l == "1.12.a"));
    }

    #[test]
    fn test_serde_validates() {
        let ok: NewformLabel = serde_json::from_str("\"1.12.a.a\"").unwrap();
        assert_eq!(ok.as_str(), "1.12.a.a");
        assert!(serde_json::from_str::<NewformLabel>("\"1.12.a\"").is_err());
    }
}
