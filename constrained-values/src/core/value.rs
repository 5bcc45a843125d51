//! Concrete kinds and the immutable value wrapper.

use crate::errors::ConstraintError;
use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A concrete kind of value, such as `Age` or `LogLevel`.
///
/// Kinds are zero-sized marker types. Their [`TypeId`] is the identity
/// boundary for equality and ordering: values of different kinds never
/// compare equal and cannot be ordered, even when their payloads match.
pub trait Kind: 'static {
    /// Human-readable name used in messages.
    const NAME: &'static str;

    /// Payload type of the canonical value.
    type Value: Clone
        + PartialEq
        + PartialOrd
        + Hash
        + fmt::Debug
        + fmt::Display
        + Send
        + Sync
        + 'static;
}

/// Declares a zero-sized [`Kind`] marker type.
///
/// ```rust
/// use constrained_values::core::{Kind, Scalar};
///
/// constrained_values::define_kind!(
///     /// Age in whole years.
///     pub Age => Scalar
/// );
///
/// assert_eq!(Age::NAME, "Age");
/// ```
#[macro_export]
macro_rules! define_kind {
    ($(#[$meta:meta])* $vis:vis $name:ident => $value:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::core::Kind for $name {
            const NAME: &'static str = stringify!($name);
            type Value = $value;
        }
    };
}

/// Returns true if `A` and `B` are the same concrete kind.
#[must_use]
pub fn same_kind<A: Kind, B: Kind>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Immutable holder of one payload of kind `K`.
pub struct Value<K: Kind> {
    payload: K::Value,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Kind> Value<K> {
    /// Wraps a payload.
    #[must_use]
    pub const fn new(payload: K::Value) -> Self {
        Self {
            payload,
            _kind: PhantomData,
        }
    }

    /// Returns the payload.
    #[must_use]
    pub const fn get(&self) -> &K::Value {
        &self.payload
    }

    /// Consumes the wrapper, returning the payload.
    #[must_use]
    pub fn into_inner(self) -> K::Value {
        self.payload
    }

    /// Returns the name of the concrete kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        K::NAME
    }

    /// Views `other` as a value of this kind, if it is one.
    fn as_same_kind<K2: Kind>(other: &Value<K2>) -> Option<&Self> {
        (other as &dyn Any).downcast_ref::<Self>()
    }

    /// Orders two values of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::KindMismatch`] when the kinds differ and
    /// [`ConstraintError::Incomparable`] when the payloads have no order.
    pub fn try_cmp<K2: Kind>(&self, other: &Value<K2>) -> Result<Ordering, ConstraintError> {
        let other = Self::as_same_kind(other).ok_or(ConstraintError::KindMismatch {
            left: K::NAME,
            right: K2::NAME,
        })?;
        self.payload
            .partial_cmp(&other.payload)
            .ok_or_else(|| ConstraintError::Incomparable {
                kind: K::NAME,
                left: self.payload.to_string(),
                right: other.payload.to_string(),
            })
    }

    /// `self < other`.
    ///
    /// # Errors
    ///
    /// See [`Value::try_cmp`].
    pub fn try_lt<K2: Kind>(&self, other: &Value<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    /// `self <= other`.
    ///
    /// # Errors
    ///
    /// See [`Value::try_cmp`].
    pub fn try_le<K2: Kind>(&self, other: &Value<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_le())
    }

    /// `self > other`.
    ///
    /// # Errors
    ///
    /// See [`Value::try_cmp`].
    pub fn try_gt<K2: Kind>(&self, other: &Value<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_gt())
    }

    /// `self >= other`.
    ///
    /// # Errors
    ///
    /// See [`Value::try_cmp`].
    pub fn try_ge<K2: Kind>(&self, other: &Value<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_ge())
    }
}

impl<K: Kind> Clone for Value<K> {
    fn clone(&self) -> Self {
        Self::new(self.payload.clone())
    }
}

impl<K: Kind> fmt::Debug for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.payload)
    }
}

impl<K: Kind> fmt::Display for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

impl<K: Kind, K2: Kind> PartialEq<Value<K2>> for Value<K> {
    fn eq(&self, other: &Value<K2>) -> bool {
        Self::as_same_kind(other).is_some_and(|other| self.payload == other.payload)
    }
}

impl<K: Kind> Eq for Value<K> where K::Value: Eq {}

impl<K: Kind> Hash for Value<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<K>().hash(state);
        self.payload.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scalar;
    use std::collections::hash_map::DefaultHasher;

    define_kind!(Meters => Scalar);
    define_kind!(Seconds => Scalar);
    define_kind!(Label => String);

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_same_kind_equality() {
        let a = Value::<Meters>::new(Scalar::from(5));
        let b = Value::<Meters>::new(Scalar::from(5));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_cross_kind_equality_is_false() {
        let a = Value::<Meters>::new(Scalar::from(5));
        let b = Value::<Seconds>::new(Scalar::from(5));
        assert!(a != b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_same_kind_ordering() {
        let a = Value::<Meters>::new(Scalar::from(1));
        let b = Value::<Meters>::new(Scalar::from(2));
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert!(a.try_lt(&b).unwrap());
        assert!(a.try_le(&b).unwrap());
        assert!(b.try_gt(&a).unwrap());
        assert!(b.try_ge(&b.clone()).unwrap());
    }

    #[test]
    fn test_cross_kind_ordering_is_rejected() {
        let a = Value::<Meters>::new(Scalar::from(1));
        let b = Value::<Seconds>::new(Scalar::from(1));
        let err = a.try_lt(&b).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::KindMismatch {
                left: "Meters",
                right: "Seconds"
            }
        );
    }

    #[test]
    fn test_unordered_payloads_are_rejected() {
        let a = Value::<Meters>::new(Scalar::from(f64::NAN));
        let b = Value::<Meters>::new(Scalar::from(1.0));
        assert!(matches!(
            a.try_cmp(&b),
            Err(ConstraintError::Incomparable { kind: "Meters", .. })
        ));
    }

    #[test]
    fn test_display_and_debug() {
        let label = Value::<Label>::new("hello".to_string());
        assert_eq!(label.to_string(), "hello");
        assert_eq!(format!("{label:?}"), "Label(\"hello\")");
        assert_eq!(label.kind_name(), "Label");
        assert_eq!(format!("{:.2}", Value::<Meters>::new(Scalar::from(1.2345))), "1.23");
    }

    #[test]
    fn test_eq_for_eq_payloads() {
        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<Value<Label>>();
        assert!(same_kind::<Label, Label>());
        assert!(!same_kind::<Label, Meters>());
    }
}
