//! The outcome tag shared by every stage and by the pipeline as a whole.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a pipeline stage or a whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The stage accepted the value.
    Ok,
    /// The stage rejected the value; the pipeline stops here.
    Exception,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Exception => write!(f, "EXCEPTION"),
        }
    }
}

impl Outcome {
    /// Returns true for [`Outcome::Ok`].
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true for [`Outcome::Exception`].
    #[must_use]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Self::Exception)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Ok.to_string(), "OK");
        assert_eq!(Outcome::Exception.to_string(), "EXCEPTION");
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(Outcome::Ok.is_ok());
        assert!(!Outcome::Ok.is_exception());
        assert!(Outcome::Exception.is_exception());
    }

    #[test]
    fn test_outcome_serialize() {
        let json = serde_json::to_string(&Outcome::Exception).unwrap();
        assert_eq!(json, r#""EXCEPTION""#);

        let deserialized: Outcome = serde_json::from_str(r#""OK""#).unwrap();
        assert_eq!(deserialized, Outcome::Ok);
    }
}
