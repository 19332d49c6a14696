//! Field format constraints
//!
//! Identifier formats issued by Indian registries (PAN, CIN, GSTIN, UDYAM,
//! SEBI) and calendar dates stored as `YYYY-MM-DD` strings. The storage
//! backend checks them on every single-record save.

use crate::contract::FIELD_VIOLATION_PREFIX;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{ActiveValue, DbErr};
use std::fmt;

/// Named format rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    Pan,
    Cin,
    Gstin,
    Udyam,
    SebiRegistration,
    Date,
}

static PAN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{5}[0-9]{4}[A-Z]$"));
static CIN: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Z][0-9]{5}[A-Z]{2}[0-9]{4}[A-Z]{3}[0-9]{6}$"));
static GSTIN: Lazy<Regex> =
    Lazy::new(|| compile(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$"));
static UDYAM: Lazy<Regex> = Lazy::new(|| compile(r"^UDYAM-[A-Z]{2}-[0-9]{2}-[0-9]{7}$"));
static SEBI: Lazy<Regex> = Lazy::new(|| compile(r"^IND\d{9}$"));
static DATE: Lazy<Regex> = Lazy::new(|| compile(r"^\d{4}-\d{2}-\d{2}$"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time literals covered by the tests below
    Regex::new(pattern).expect("format rule pattern must compile")
}

impl FormatRule {
    pub fn pattern(self) -> &'static Regex {
        match self {
            FormatRule::Pan => &PAN,
            FormatRule::Cin => &CIN,
            FormatRule::Gstin => &GSTIN,
            FormatRule::Udyam => &UDYAM,
            FormatRule::SebiRegistration => &SEBI,
            FormatRule::Date => &DATE,
        }
    }

    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatRule::Pan => "PAN",
            FormatRule::Cin => "CIN",
            FormatRule::Gstin => "GSTIN",
            FormatRule::Udyam => "UDYAM",
            FormatRule::SebiRegistration => "SEBI registration",
            FormatRule::Date => "date",
        };
        f.write_str(name)
    }
}

/// A field value that failed its format rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: '{value}' is not a valid {rule}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: FormatRule,
    pub value: String,
}

impl From<FieldViolation> for DbErr {
    fn from(violation: FieldViolation) -> Self {
        DbErr::Custom(format!("{FIELD_VIOLATION_PREFIX}{violation}"))
    }
}

/// Field constraints declared by an entity
///
/// Implemented on each entity's active model; the default declares none.
pub trait FieldConstraints {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        Ok(())
    }
}

/// Check a required string column if the payload sets it
pub fn check(
    field: &'static str,
    rule: FormatRule,
    value: &ActiveValue<String>,
) -> Result<(), FieldViolation> {
    match value {
        ActiveValue::Set(v) => check_str(field, rule, v),
        _ => Ok(()),
    }
}

/// Check a nullable string column if the payload sets it to a value
pub fn check_opt(
    field: &'static str,
    rule: FormatRule,
    value: &ActiveValue<Option<String>>,
) -> Result<(), FieldViolation> {
    match value {
        ActiveValue::Set(Some(v)) => check_str(field, rule, v),
        _ => Ok(()),
    }
}

fn check_str(field: &'static str, rule: FormatRule, value: &str) -> Result<(), FieldViolation> {
    if rule.matches(value) {
        Ok(())
    } else {
        Err(FieldViolation {
            field,
            rule,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::StoreError;
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

    #[test]
    fn test_violation_round_trips_as_validation_error() {
        let violation = FieldViolation {
            field: "pan_number",
            rule: FormatRule::Pan,
            value: "abc".to_string(),
        };
        let err = StoreError::from(DbErr::from(violation.clone()));
        assert!(matches!(err, StoreError::Validation(msg) if msg == violation.to_string()));
    }

    #[test]
    fn test_pan_format() {
        assert!(FormatRule::Pan.matches("ABCDE1234F"));
        assert!(!FormatRule::Pan.matches("abcde1234f"));
        assert!(!FormatRule::Pan.matches("ABCD1234F"));
        assert!(!FormatRule::Pan.matches("ABCDE1234FG"));
    }

    #[test]
    fn test_cin_format() {
        assert!(FormatRule::Cin.matches("U12345MH2020PTC123456"));
        assert!(!FormatRule::Cin.matches("U12345MH2020PT123456"));
        assert!(!FormatRule::Cin.matches("12345MH2020PTC123456U"));
    }

    #[test]
    fn test_gstin_format() {
        assert!(FormatRule::Gstin.matches("27ABCDE1234F1Z5"));
        assert!(FormatRule::Gstin.matches("07AAACB2230MAZD"));
        // 13th character cannot be zero
        assert!(!FormatRule::Gstin.matches("27ABCDE1234F0Z5"));
        // 14th character must be Z
        assert!(!FormatRule::Gstin.matches("27ABCDE1234F1Y5"));
    }

    #[test]
    fn test_udyam_format() {
        assert!(FormatRule::Udyam.matches("UDYAM-MH-12-1234567"));
        assert!(!FormatRule::Udyam.matches("UDYAM-MH-12-123456"));
        assert!(!FormatRule::Udyam.matches("udyam-MH-12-1234567"));
    }

    #[test]
    fn test_sebi_format() {
        assert!(FormatRule::SebiRegistration.matches("IND000000123"));
        assert!(!FormatRule::SebiRegistration.matches("IND00000012"));
        assert!(!FormatRule::SebiRegistration.matches("INZ000000123"));
    }

    #[test]
    fn test_date_format() {
        assert!(FormatRule::Date.matches("2021-04-01"));
        assert!(!FormatRule::Date.matches("01-04-2021"));
        assert!(!FormatRule::Date.matches("2021-4-1"));
    }

    #[test]
    fn test_check_skips_unset_and_unchanged() {
        assert!(check("pan_number", FormatRule::Pan, &NotSet).is_ok());
        assert!(check(
            "pan_number",
            FormatRule::Pan,
            &Unchanged("legacy".to_string())
        )
        .is_ok());
        assert!(check_opt("cin", FormatRule::Cin, &Set(None)).is_ok());
    }

    #[test]
    fn test_check_reports_violation() {
        let err = check_opt(
            "gstin",
            FormatRule::Gstin,
            &Set(Some("not-a-gstin".to_string())),
        )
        .unwrap_err();

        assert_eq!(err.field, "gstin");
        assert_eq!(err.rule, FormatRule::Gstin);
        assert!(err.to_string().contains("not-a-gstin"));
    }
}
