//! Validated CURP newtype.
//!
//! The CURP is the 18-character Mexican national identity code carried by
//! every student record. Its shape is fixed: four letters, six birth-date
//! digits, an `H`/`M` sex marker, five letters (federal entity plus inner
//! consonants), an alphanumeric disambiguation character, and a check digit.
//!
//! # Example
//!
//! ```ignore
//! use cobro_models::curp::Curp;
//!
//! let curp: Curp = "GOMC900514HDFMRL09".parse().unwrap();
//! assert_eq!(curp.as_str(), "GOMC900514HDFMRL09");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Error type for CURP parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurpInvalida(pub String);

impl std::error::Error for CurpInvalida {}

impl fmt::Display for CurpInvalida {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid CURP: {}", self.0)
    }
}

/// A validated CURP.
///
/// The contained string is always 18 upper-case characters matching the
/// fixed CURP layout. Construction through [`Curp::new`] validates; data
/// already trusted (rows returned by the billing API) goes through
/// [`Curp::new_unchecked`] so that a single malformed historical record
/// cannot take an entire list view down.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Curp(String);

impl Curp {
    /// Creates a validated CURP, normalizing to upper-case first.
    pub fn new(raw: impl Into<String>) -> Result<Self, CurpInvalida> {
        let normalized = raw.into().trim().to_uppercase();
        if Self::is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(CurpInvalida(normalized))
        }
    }

    /// Creates a CURP without validation.
    ///
    /// For values the server already owns; the console must render whatever
    /// the record holds, even when a legacy row predates CURP validation.
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The CURP as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CURP, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn is_well_formed(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 18
            && bytes[..4].iter().all(|b| b.is_ascii_uppercase())
            && bytes[4..10].iter().all(|b| b.is_ascii_digit())
            && matches!(bytes[10], b'H' | b'M')
            && bytes[11..16].iter().all(|b| b.is_ascii_uppercase())
            && (bytes[16].is_ascii_digit() || bytes[16].is_ascii_uppercase())
            && bytes[17].is_ascii_digit()
    }
}

impl fmt::Display for Curp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Curp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curp({})", self.0)
    }
}

impl FromStr for Curp {
    type Err = CurpInvalida;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Curp {
    type Error = CurpInvalida;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Curp {
    type Error = CurpInvalida;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Curp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Curp> for String {
    fn from(curp: Curp) -> String {
        curp.0
    }
}

impl PartialEq<str> for Curp {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<String> for Curp {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl<'de> Deserialize<'de> for Curp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

/// `validator` rule for create/update DTO fields holding a raw CURP.
pub fn validar_curp(value: &str) -> Result<(), ValidationError> {
    Curp::new(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("curp").with_message("CURP inválida".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDA: &str = "GOMC900514HDFMRL09";

    #[test]
    fn accepts_a_well_formed_curp() {
        let curp = Curp::new(VALIDA).unwrap();
        assert_eq!(curp.as_str(), VALIDA);
    }

    #[test]
    fn normalizes_to_upper_case() {
        let curp = Curp::new("gomc900514hdfmrl09").unwrap();
        assert_eq!(curp, *VALIDA);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let curp = Curp::new(format!("  {VALIDA}  ")).unwrap();
        assert_eq!(curp.as_str(), VALIDA);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Curp::new("GOMC900514HDFMRL0").is_err());
        assert!(Curp::new("GOMC900514HDFMRL099").is_err());
        assert!(Curp::new("").is_err());
    }

    #[test]
    fn rejects_digits_in_the_name_block() {
        assert!(Curp::new("G0MC900514HDFMRL09").is_err());
    }

    #[test]
    fn rejects_letters_in_the_birth_date() {
        assert!(Curp::new("GOMCX00514HDFMRL09").is_err());
    }

    #[test]
    fn rejects_unknown_sex_marker() {
        assert!(Curp::new("GOMC900514XDFMRL09").is_err());
        assert!(Curp::new(VALIDA.replace('H', "M")).is_ok());
    }

    #[test]
    fn rejects_non_digit_check_position() {
        assert!(Curp::new("GOMC900514HDFMRL0X").is_err());
    }

    #[test]
    fn accepts_letter_homoclave() {
        // Post-2000 births use a letter in position 17.
        assert!(Curp::new("GOMC000514HDFMRLA9").is_ok());
    }

    #[test]
    fn new_unchecked_preserves_legacy_values() {
        let curp = Curp::new_unchecked("SIN-CURP");
        assert_eq!(curp.as_str(), "SIN-CURP");
    }

    #[test]
    fn from_str_round_trips() {
        let curp: Curp = VALIDA.parse().unwrap();
        assert_eq!(String::from(curp), VALIDA);
    }

    #[test]
    fn deserialize_validates() {
        let parsed: Result<Curp, _> = serde_json::from_str("\"GOMC900514HDFMRL09\"");
        assert!(parsed.is_ok());

        let rejected: Result<Curp, _> = serde_json::from_str("\"NOPE\"");
        assert!(rejected.is_err());
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let curp = Curp::new(VALIDA).unwrap();
        assert_eq!(serde_json::to_string(&curp).unwrap(), format!("\"{VALIDA}\""));
    }

    #[test]
    fn validator_rule_reports_a_message() {
        assert!(validar_curp(VALIDA).is_ok());
        let err = validar_curp("XYZ").unwrap_err();
        assert_eq!(err.code, "curp");
    }

    #[test]
    fn error_display_includes_the_value() {
        let err = Curp::new("BAD").unwrap_err();
        assert_eq!(err.to_string(), "invalid CURP: BAD");
    }
}
