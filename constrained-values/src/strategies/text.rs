//! Text sanitizers, pattern checks and parsers.

use super::types::{type_mismatch, type_mismatch_details};
use super::{Transform, Validate};
use crate::core::{Scalar, ScalarKind, StageResult, StatusResult, DEFAULT_SUCCESS_MESSAGE};
use crate::errors::FailureKind;
use chrono::NaiveDate;
use regex::Regex;
use uuid::Uuid;

/// Date formats tried by [`ParseDate::default`], in order.
pub const DEFAULT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%b-%Y"];

fn not_text<T>(value: &Scalar) -> StageResult<T> {
    StageResult::exception(
        FailureKind::TypeMismatch,
        type_mismatch_details(&[ScalarKind::Text], value.kind()),
    )
}

fn map_text(value: Scalar, details: &str, f: impl FnOnce(&str) -> String) -> StageResult<Scalar> {
    match value {
        Scalar::Text(s) => StageResult::ok(Scalar::Text(f(&s)), details),
        other => not_text(&other),
    }
}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Transform<Scalar> for Trim {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        map_text(value, "trim", |s| s.trim().to_string())
    }
}

/// Lowercases text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Transform<Scalar> for Lowercase {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        map_text(value, "lowercase", str::to_lowercase)
    }
}

/// Uppercases text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Transform<Scalar> for Uppercase {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        map_text(value, "uppercase", str::to_uppercase)
    }
}

/// Passes iff the text matches a regular expression.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: Regex,
}

impl MatchesPattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate<Scalar> for MatchesPattern {
    fn validate(&self, value: &Scalar) -> StatusResult {
        let Some(text) = value.as_text() else {
            return type_mismatch(&[ScalarKind::Text], value.kind());
        };
        if self.pattern.is_match(text) {
            StatusResult::ok(DEFAULT_SUCCESS_MESSAGE)
        } else {
            StatusResult::exception(
                FailureKind::PatternMismatch,
                format!(
                    "Value {} does not match pattern '{}'",
                    value.repr(),
                    self.pattern.as_str()
                ),
            )
        }
    }
}

/// Parses text into a UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseUuid;

impl Transform<Scalar> for ParseUuid {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        let text = match value {
            Scalar::Text(text) => text,
            other => return not_text(&other),
        };
        match Uuid::parse_str(text.trim()) {
            Ok(uuid) => StageResult::ok(Scalar::Uuid(uuid), "uuid"),
            Err(e) => StageResult::exception(FailureKind::CoercionFailure, format!("bad uuid: {e}")),
        }
    }
}

/// Parses text into a date, trying each format in order.
///
/// On success the details name the format that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDate {
    formats: Vec<String>,
}

impl ParseDate {
    /// Creates a parser trying `formats` in order.
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the formats.
    #[must_use]
    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl Default for ParseDate {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS)
    }
}

impl Transform<Scalar> for ParseDate {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        let text = match value {
            Scalar::Text(text) => text,
            other => return not_text(&other),
        };
        let text = text.trim();
        for format in &self.formats {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return StageResult::ok(Scalar::Date(date), format.clone());
            }
        }
        StageResult::exception(
            FailureKind::CoercionFailure,
            format!("no matching formats for '{text}'; tried {:?}", self.formats),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizers() {
        assert_eq!(Trim.transform(Scalar::from("  Apple ")).value(), Some(&Scalar::from("Apple")));
        assert_eq!(Lowercase.transform(Scalar::from("Apple")).value(), Some(&Scalar::from("apple")));
        assert_eq!(Uppercase.transform(Scalar::from("usd")).value(), Some(&Scalar::from("USD")));
    }

    #[test]
    fn test_sanitizer_rejects_non_text() {
        let result = Trim.transform(Scalar::from(5));
        assert_eq!(result.failure(), Some(FailureKind::TypeMismatch));
        assert_eq!(result.details(), "Value must be one of 'text', got 'int'");
    }

    #[test]
    fn test_pattern() {
        let email = MatchesPattern::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        assert!(email.validate(&Scalar::from("alice@example.com")).is_ok());

        let result = email.validate(&Scalar::from("bad@@example"));
        assert_eq!(result.failure(), Some(FailureKind::PatternMismatch));
        assert!(result.details().contains("'bad@@example'"));

        assert_eq!(
            email.validate(&Scalar::from(1)).failure(),
            Some(FailureKind::TypeMismatch)
        );
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(MatchesPattern::new("(unclosed").is_err());
    }

    #[test]
    fn test_parse_uuid() {
        let ok = ParseUuid.transform(Scalar::from("12345678-1234-5678-1234-567812345678"));
        assert!(ok.is_ok());
        assert!(matches!(ok.value(), Some(Scalar::Uuid(_))));

        let bad = ParseUuid.transform(Scalar::from("not-a-uuid"));
        assert_eq!(bad.failure(), Some(FailureKind::CoercionFailure));
        assert!(bad.details().starts_with("bad uuid"));
    }

    #[test]
    fn test_parse_date_tries_formats_in_order() {
        let parser = ParseDate::default();
        let expected = Scalar::from(NaiveDate::from_ymd_opt(2000, 1, 31).unwrap());

        let iso = parser.transform(Scalar::from("2000-01-31"));
        assert_eq!(iso.value(), Some(&expected));
        assert_eq!(iso.details(), "%Y-%m-%d");

        let european = parser.transform(Scalar::from(" 31/01/2000 "));
        assert_eq!(european.value(), Some(&expected));
        assert_eq!(european.details(), "%d/%m/%Y");

        let named = parser.transform(Scalar::from("31-Jan-2000"));
        assert_eq!(named.value(), Some(&expected));
    }

    #[test]
    fn test_parse_date_failure_lists_formats() {
        let result = ParseDate::new(["%Y-%m-%d"]).transform(Scalar::from("yesterday"));
        assert_eq!(result.failure(), Some(FailureKind::CoercionFailure));
        assert!(result.details().contains("yesterday"));
        assert!(result.details().contains("%Y-%m-%d"));
    }
}
