//! Test assertions for constrained values.

use crate::core::Kind;
use crate::errors::FailureKind;
use crate::pipeline::ConstrainedValue;

/// Asserts that every stage passed.
pub fn assert_valid<K: Kind>(value: &ConstrainedValue<K>) {
    assert!(
        value.is_ok(),
        "Expected valid {}, got: {}",
        K::NAME,
        value.details()
    );
}

/// Asserts that some stage failed.
pub fn assert_invalid<K: Kind>(value: &ConstrainedValue<K>) {
    assert!(
        !value.is_ok(),
        "Expected invalid {}, got value: {:?}",
        K::NAME,
        value.value()
    );
}

/// Asserts that the pipeline failed with the expected kind.
pub fn assert_failure_kind<K: Kind>(value: &ConstrainedValue<K>, expected: FailureKind) {
    assert_eq!(
        value.failure(),
        Some(expected),
        "Expected failure {:?}, got {:?} ({})",
        expected,
        value.failure(),
        value.details()
    );
}

/// Asserts that the details contain `needle`.
pub fn assert_details_contain<K: Kind>(value: &ConstrainedValue<K>, needle: &str) {
    assert!(
        value.details().contains(needle),
        "Expected details to contain '{}', got '{}'",
        needle,
        value.details()
    );
}

/// Asserts that the value is valid with the expected payload.
pub fn assert_payload<K: Kind>(value: &ConstrainedValue<K>, expected: &K::Value) {
    assert_eq!(
        value.value(),
        Some(expected),
        "Expected payload {:?}, got {:?} ({})",
        expected,
        value.value(),
        value.details()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scalar;
    use crate::kinds::RangeValue;

    #[test]
    fn test_passing_assertions() {
        let ok = RangeValue::new(5, 1, 10);
        assert_valid(&ok);
        assert_payload(&ok, &Scalar::from(5));

        let bad = RangeValue::new(50, 1, 10);
        assert_invalid(&bad);
        assert_failure_kind(&bad, FailureKind::RangeOverflow);
        assert_details_contain(&bad, "10");
    }

    #[test]
    #[should_panic(expected = "Expected valid RangeValue")]
    fn test_assert_valid_panics() {
        assert_valid(&RangeValue::new(0, 1, 10));
    }

    #[test]
    #[should_panic(expected = "Expected details to contain")]
    fn test_assert_details_panics() {
        assert_details_contain(&RangeValue::new(0, 1, 10), "nowhere");
    }
}
