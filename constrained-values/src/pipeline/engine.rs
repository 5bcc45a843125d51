//! Sequential, short-circuiting pipeline execution.

use super::PipelineConfig;
use crate::core::StageResult;
use crate::strategies::Strategy;

/// Threads `raw` through `strategies` in order.
///
/// Stops at the first failing stage and returns its result. Later stages
/// are never invoked. When every stage passes, the last value is returned
/// with the configured success details.
pub fn run_pipeline<T>(
    kind: &'static str,
    raw: T,
    strategies: &[Strategy<T>],
    config: &PipelineConfig,
) -> StageResult<T> {
    let span = tracing::debug_span!("pipeline", kind, stages = strategies.len());
    let _guard = span.enter();

    let mut current = raw;
    for (index, strategy) in strategies.iter().enumerate() {
        if config.log_stages {
            tracing::trace!(stage = index, shape = strategy.shape(), "running stage");
        }
        let (status, value) = strategy.apply(current).into_parts();
        match value {
            Some(next) if status.is_ok() => current = next,
            _ => {
                tracing::debug!(
                    stage = index,
                    failure = ?status.failure(),
                    details = status.details(),
                    "pipeline failed"
                );
                return match status.failure() {
                    Some(failure) => StageResult::exception(failure, status.details()),
                    None => StageResult::fail(status.details()),
                };
            }
        }
    }

    tracing::trace!("pipeline succeeded");
    StageResult::ok(current, config.success_details.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatusResult;
    use crate::errors::FailureKind;
    use crate::strategies::{FnTransformation, FnValidation};

    fn add(n: i64) -> Strategy<i64> {
        Strategy::transformation(FnTransformation::new("add", move |v: i64| {
            StageResult::ok(v + n, "added")
        }))
    }

    fn below(limit: i64) -> Strategy<i64> {
        Strategy::validation(FnValidation::new("below", move |v: &i64| {
            if *v < limit {
                StatusResult::ok("below")
            } else {
                StatusResult::exception(FailureKind::RangeOverflow, format!("{v} >= {limit}"))
            }
        }))
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let result = run_pipeline("N", 5, &[], &PipelineConfig::default());
        assert!(result.is_ok());
        assert_eq!(result.value(), Some(&5));
        assert_eq!(result.details(), "validation successful");
    }

    #[test]
    fn test_stages_run_in_order() {
        let strategies = [add(1), below(3), add(10)];
        let result = run_pipeline("N", 1, &strategies, &PipelineConfig::default());
        assert_eq!(result.value(), Some(&12));
    }

    #[test]
    fn test_first_failure_wins() {
        let strategies = [add(5), below(3), below(0)];
        let result = run_pipeline("N", 1, &strategies, &PipelineConfig::default());
        assert_eq!(result.failure(), Some(FailureKind::RangeOverflow));
        assert_eq!(result.details(), "6 >= 3");
        assert!(result.value().is_none());
    }

    #[test]
    fn test_custom_success_details() {
        let config = PipelineConfig::new()
            .with_success_details("fine")
            .with_log_stages(false);
        let result = run_pipeline("N", 0, &[add(1)], &config);
        assert_eq!(result.details(), "fine");
    }
}
