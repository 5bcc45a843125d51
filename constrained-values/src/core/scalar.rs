//! The closed runtime value model used by the built-in strategies.
//!
//! A [`Scalar`] is what flows through range and enum pipelines. Its
//! [`ScalarKind`] is the exact runtime type tag: exact-type checks compare
//! kinds for identity, and coercion converts between kinds through a fixed
//! table. Comparisons are only defined between scalars of the same kind.

use chrono::NaiveDate;
use num_rational::Rational64;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Exact runtime type of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Base-10 decimal.
    Decimal,
    /// Exact rational number.
    Rational,
    /// Text.
    Text,
    /// Calendar date.
    Date,
    /// UUID.
    Uuid,
    /// A member of the named enumeration.
    Member(&'static str),
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Decimal => write!(f, "decimal"),
            Self::Rational => write!(f, "rational"),
            Self::Text => write!(f, "text"),
            Self::Date => write!(f, "date"),
            Self::Uuid => write!(f, "uuid"),
            Self::Member(enumeration) => write!(f, "{enumeration}"),
        }
    }
}

/// An enumeration-like type whose members carry an underlying scalar.
///
/// ```rust
/// use constrained_values::core::{Enumeration, Scalar};
///
/// #[derive(Debug, Clone, Copy)]
/// enum LogLevel {
///     Debug,
///     Info,
/// }
///
/// impl Enumeration for LogLevel {
///     const NAME: &'static str = "LogLevel";
///
///     fn members() -> Vec<Self> {
///         vec![Self::Debug, Self::Info]
///     }
///
///     fn member_name(&self) -> &'static str {
///         match self {
///             Self::Debug => "DEBUG",
///             Self::Info => "INFO",
///         }
///     }
///
///     fn underlying(&self) -> Scalar {
///         match self {
///             Self::Debug => Scalar::from("debug"),
///             Self::Info => Scalar::from("info"),
///         }
///     }
/// }
///
/// assert_eq!(Scalar::member(&LogLevel::Info).to_string(), "LogLevel.INFO");
/// ```
pub trait Enumeration: Sized + 'static {
    /// Name of the enumeration, used as its member kind.
    const NAME: &'static str;

    /// All members in declaration order.
    fn members() -> Vec<Self>;

    /// Name of this member.
    fn member_name(&self) -> &'static str;

    /// Underlying value of this member.
    fn underlying(&self) -> Scalar;

    /// Converts this member into its runtime representation.
    fn to_member(&self) -> Member {
        Member::new(Self::NAME, self.member_name(), self.underlying())
    }
}

/// Runtime representation of an enumeration member.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct Member {
    enumeration: &'static str,
    name: &'static str,
    value: Box<Scalar>,
}

impl Member {
    /// Creates a member of `enumeration` named `name` with underlying `value`.
    #[must_use]
    pub fn new(enumeration: &'static str, name: &'static str, value: Scalar) -> Self {
        Self {
            enumeration,
            name,
            value: Box::new(value),
        }
    }

    /// Returns the enumeration name.
    #[must_use]
    pub const fn enumeration(&self) -> &'static str {
        self.enumeration
    }

    /// Returns the member name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// Consumes the member, returning its underlying value.
    #[must_use]
    pub fn into_value(self) -> Scalar {
        *self.value
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.enumeration, self.name)
    }
}

/// A runtime value flowing through a built-in pipeline.
#[derive(Debug, Clone)]
pub enum Scalar {
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Base-10 decimal.
    Decimal(Decimal),
    /// Exact rational number.
    Rational(Rational64),
    /// Text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// UUID.
    Uuid(Uuid),
    /// Enumeration member.
    Member(Member),
}

impl Scalar {
    /// Returns the exact runtime kind.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Rational(_) => ScalarKind::Rational,
            Self::Text(_) => ScalarKind::Text,
            Self::Date(_) => ScalarKind::Date,
            Self::Uuid(_) => ScalarKind::Uuid,
            Self::Member(m) => ScalarKind::Member(m.enumeration),
        }
    }

    /// Builds a member scalar from an enumeration value.
    #[must_use]
    pub fn member<E: Enumeration>(member: &E) -> Self {
        Self::Member(member.to_member())
    }

    /// Returns the text content, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float content, if this is a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the decimal content, if this is a decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Renders the scalar for diagnostics: text is quoted, the rest as displayed.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

/// Renders a list of scalars as `[a, b, c]` using [`Scalar::repr`].
#[must_use]
pub fn format_scalars(values: &[Scalar]) -> String {
    let items: Vec<String> = values.iter().map(Scalar::repr).collect();
    format!("[{}]", items.join(", "))
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::Member(a), Self::Member(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => a.partial_cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),
            (Self::Uuid(a), Self::Uuid(b)) => a.partial_cmp(b),
            // Members and mixed kinds have no order
            _ => None,
        }
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            // 0.0 == -0.0, so both must hash alike
            Self::Float(x) => {
                let x = if *x == 0.0 { 0.0_f64 } else { *x };
                x.to_bits().hash(state);
            }
            Self::Decimal(d) => d.hash(state),
            Self::Rational(r) => r.hash(state),
            Self::Text(s) => s.hash(state),
            Self::Date(d) => d.hash(state),
            Self::Uuid(u) => u.hash(state),
            Self::Member(m) => m.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Int(i) => fmt::Display::fmt(i, f),
            Self::Float(x) => {
                if f.precision().is_some() {
                    fmt::Display::fmt(x, f)
                } else {
                    f.pad(&format!("{x:?}"))
                }
            }
            Self::Decimal(d) => fmt::Display::fmt(d, f),
            Self::Rational(r) => fmt::Display::fmt(r, f),
            Self::Text(s) => f.pad(s),
            Self::Date(d) => fmt::Display::fmt(d, f),
            Self::Uuid(u) => fmt::Display::fmt(u, f),
            Self::Member(m) => fmt::Display::fmt(m, f),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Rational64> for Scalar {
    fn from(value: Rational64) -> Self {
        Self::Rational(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Uuid> for Scalar {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Member> for Scalar {
    fn from(value: Member) -> Self {
        Self::Member(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &Scalar) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Scalar::from(5).kind(), ScalarKind::Int);
        assert_eq!(Scalar::from(5.0).kind(), ScalarKind::Float);
        assert_eq!(Scalar::from(true).kind(), ScalarKind::Bool);
        assert_eq!(Scalar::from("x").kind(), ScalarKind::Text);
        assert_eq!(Scalar::from(Decimal::from(1)).kind(), ScalarKind::Decimal);
        assert_eq!(
            Scalar::from(Member::new("Color", "RED", Scalar::from(1))).kind(),
            ScalarKind::Member("Color")
        );
    }

    #[test]
    fn test_equality_is_kind_exact() {
        assert_eq!(Scalar::from(1), Scalar::from(1_i64));
        assert_ne!(Scalar::from(1), Scalar::from(1.0));
        assert_ne!(Scalar::from(1), Scalar::from(true));
    }

    #[test]
    fn test_ordering_only_within_kind() {
        assert_eq!(
            Scalar::from(1).partial_cmp(&Scalar::from(2)),
            Some(Ordering::Less)
        );
        assert_eq!(Scalar::from(1).partial_cmp(&Scalar::from(2.0)), None);
        assert_eq!(Scalar::from(f64::NAN).partial_cmp(&Scalar::from(1.0)), None);
    }

    #[test]
    fn test_signed_zero_hashes_alike() {
        assert_eq!(Scalar::from(0.0), Scalar::from(-0.0));
        assert_eq!(hash_of(&Scalar::from(0.0)), hash_of(&Scalar::from(-0.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::from(3.0).to_string(), "3.0");
        assert_eq!(format!("{:.2}", Scalar::from(12.3456)), "12.35");
        assert_eq!(Scalar::from(42).to_string(), "42");
        assert_eq!(Scalar::from("hi").to_string(), "hi");
        assert_eq!(format!("{:>4}", Scalar::from("hi")), "  hi");
    }

    #[test]
    fn test_repr_quotes_text() {
        assert_eq!(Scalar::from("a").repr(), "'a'");
        assert_eq!(Scalar::from(7).repr(), "7");
        assert_eq!(
            format_scalars(&[Scalar::from("a"), Scalar::from("b")]),
            "['a', 'b']"
        );
    }

    #[test]
    fn test_member_accessors() {
        let member = Member::new("Role", "ADMIN", Scalar::from("admin"));
        assert_eq!(member.enumeration(), "Role");
        assert_eq!(member.name(), "ADMIN");
        assert_eq!(member.value(), &Scalar::from("admin"));
        assert_eq!(member.to_string(), "Role.ADMIN");
        assert_eq!(member.into_value(), Scalar::from("admin"));
    }
}
