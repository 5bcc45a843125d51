//! Membership-constrained scalars.

use crate::core::{Enumeration, Kind, Scalar, ScalarKind};
use crate::pipeline::{ConstrainedValue, PipelineConfig};
use crate::strategies::{AlwaysFail, ExactType, MemberToValue, OneOf, Strategy};

/// Reported when an enumeration declares no members.
pub const EMPTY_ENUMERATION: &str = "Enum has no members.";

/// Reported when an explicit set of allowed values is empty.
pub const EMPTY_SEQUENCE: &str = "Must be a non-empty sequence.";

crate::define_kind!(
    /// A scalar restricted to a fixed set of allowed values.
    pub EnumValue => Scalar
);

impl EnumValue {
    /// Validates `raw` against an explicit set of allowed values.
    pub fn new<I, V>(raw: impl Into<Scalar>, allowed: I) -> ConstrainedValue<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        EnumSpec::from_values(allowed).build(raw)
    }

    /// Validates `raw` against the underlying values of enumeration `E`.
    ///
    /// Members of `E` are accepted too and normalize to their value.
    pub fn of_enumeration<E: Enumeration>(raw: impl Into<Scalar>) -> ConstrainedValue<Self> {
        EnumSpec::from_enumeration::<E>().build(raw)
    }
}

/// Distinct kinds of `values`, in first-seen order.
#[must_use]
pub fn kinds_of(values: &[Scalar]) -> Vec<ScalarKind> {
    let mut kinds = Vec::new();
    for value in values {
        let kind = value.kind();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

/// Builder for membership pipelines.
#[derive(Debug, Clone)]
pub struct EnumSpec {
    allowed: Vec<Scalar>,
    normalize_members: bool,
    config_error: Option<&'static str>,
    config: PipelineConfig,
}

impl EnumSpec {
    /// Allows the underlying values of enumeration `E`.
    #[must_use]
    pub fn from_enumeration<E: Enumeration>() -> Self {
        let allowed: Vec<Scalar> = E::members().iter().map(E::underlying).collect();
        let config_error = allowed.is_empty().then_some(EMPTY_ENUMERATION);
        Self {
            allowed,
            normalize_members: config_error.is_none(),
            config_error,
            config: PipelineConfig::default(),
        }
    }

    /// Allows an explicit set of values.
    ///
    /// When every value is an enumeration member, the members' underlying
    /// values are allowed instead and members are normalized before the
    /// check. Mixed sets are used as given.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Self {
                allowed: values,
                normalize_members: false,
                config_error: Some(EMPTY_SEQUENCE),
                config: PipelineConfig::default(),
            };
        }

        let all_members = values.iter().all(|v| matches!(v, Scalar::Member(_)));
        let allowed = if all_members {
            values
                .into_iter()
                .map(|v| match v {
                    Scalar::Member(member) => member.into_value(),
                    other => other,
                })
                .collect()
        } else {
            values
        };
        Self {
            allowed,
            normalize_members: all_members,
            config_error: None,
            config: PipelineConfig::default(),
        }
    }

    /// Sets the details recorded on success.
    #[must_use]
    pub fn with_success_details(mut self, details: impl Into<String>) -> Self {
        self.config = self.config.with_success_details(details);
        self
    }

    /// Replaces the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the canonical allowed values.
    #[must_use]
    pub fn allowed(&self) -> &[Scalar] {
        &self.allowed
    }

    /// Assembles the pipeline.
    #[must_use]
    pub fn into_strategies(self) -> Vec<Strategy<Scalar>> {
        self.into_parts().0
    }

    fn into_parts(self) -> (Vec<Strategy<Scalar>>, PipelineConfig) {
        if let Some(message) = self.config_error {
            return (vec![Strategy::validation(AlwaysFail::new(message))], self.config);
        }
        let mut strategies = Vec::with_capacity(3);
        if self.normalize_members {
            strategies.push(Strategy::transformation(MemberToValue));
        }
        strategies.push(Strategy::validation(ExactType::new(kinds_of(&self.allowed))));
        strategies.push(Strategy::validation(OneOf::new(self.allowed)));
        (strategies, self.config)
    }

    /// Runs `raw` through the pipeline as kind `K`.
    pub fn build<K: Kind<Value = Scalar>>(self, raw: impl Into<Scalar>) -> ConstrainedValue<K> {
        let (strategies, config) = self.into_parts();
        ConstrainedValue::with_config(raw, strategies, &config)
    }
}
