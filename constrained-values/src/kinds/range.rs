//! Bounded, coercing scalars.

use crate::core::{Kind, Scalar, ScalarKind};
use crate::pipeline::{ConstrainedValue, PipelineConfig};
use crate::strategies::{CoerceTo, ExactType, InRange, SameType, Strategy};

crate::define_kind!(
    /// A scalar within an inclusive range, coerced to the type of the lower bound.
    pub RangeValue => Scalar
);

impl RangeValue {
    /// Validates `raw` against `low..=high`.
    ///
    /// ```rust
    /// use constrained_values::core::Scalar;
    /// use constrained_values::kinds::RangeValue;
    ///
    /// let score = RangeValue::new(3, 0.0, 10.0);
    /// assert_eq!(score.value(), Some(&Scalar::from(3.0)));
    ///
    /// let too_big = RangeValue::new(15, 1, 10);
    /// assert!(!too_big.is_ok());
    /// ```
    pub fn new(
        raw: impl Into<Scalar>,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> ConstrainedValue<Self> {
        RangeSpec::new(low, high).build(raw)
    }
}

/// Input kinds accepted for a given lower bound.
///
/// Integers widen into float, decimal and rational bounds; every other
/// kind is accepted only as itself.
#[must_use]
pub fn infer_allowed_kinds(low: &Scalar) -> Vec<ScalarKind> {
    match low.kind() {
        ScalarKind::Int => vec![ScalarKind::Int],
        ScalarKind::Float => vec![ScalarKind::Int, ScalarKind::Float],
        ScalarKind::Decimal => vec![ScalarKind::Int, ScalarKind::Decimal],
        ScalarKind::Rational => vec![ScalarKind::Int, ScalarKind::Rational],
        other => vec![other],
    }
}

/// Builder for range pipelines.
///
/// Stages, in order: bound types agree, input kind allowed, coercion to the
/// lower bound's kind, any extra steps, then the range check.
#[derive(Debug)]
pub struct RangeSpec {
    low: Scalar,
    high: Scalar,
    extra: Vec<Strategy<Scalar>>,
    config: PipelineConfig,
}

impl RangeSpec {
    /// Creates a builder for `low..=high`.
    pub fn new(low: impl Into<Scalar>, high: impl Into<Scalar>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
            extra: Vec::new(),
            config: PipelineConfig::default(),
        }
    }

    /// Adds a step between coercion and the range check.
    #[must_use]
    pub fn with_step(mut self, step: Strategy<Scalar>) -> Self {
        self.extra.push(step);
        self
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

    /// Returns the lower bound.
    #[must_use]
    pub const fn low(&self) -> &Scalar {
        &self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn high(&self) -> &Scalar {
        &self.high
    }

    /// Assembles the pipeline.
    #[must_use]
    pub fn into_strategies(self) -> Vec<Strategy<Scalar>> {
        let (strategies, _) = self.into_parts();
        strategies
    }

    fn into_parts(self) -> (Vec<Strategy<Scalar>>, PipelineConfig) {
        let mut strategies = Vec::with_capacity(self.extra.len() + 4);
        strategies.push(Strategy::validation(SameType::new(
            self.low.clone(),
            self.high.clone(),
        )));
        strategies.push(Strategy::validation(ExactType::new(infer_allowed_kinds(
            &self.low,
        ))));
        strategies.push(Strategy::transformation(CoerceTo::new(self.low.kind())));
        strategies.extend(self.extra);
        strategies.push(Strategy::validation(InRange::new(self.low, self.high)));
        (strategies, self.config)
    }

    /// Runs `raw` through the pipeline as kind `K`.
    pub fn build<K: Kind<Value = Scalar>>(self, raw: impl Into<Scalar>) -> ConstrainedValue<K> {
        let (strategies, config) = self.into_parts();
        ConstrainedValue::with_config(raw, strategies, &config)
    }
}
