use rust_decimal::Decimal;

use crate::models::{CostQueryResult, EvaluationStatus, ThresholdEvaluation};

/// Classifies a provider result against the budget threshold.
///
/// Spend equal to the threshold counts as exceeded.
pub fn evaluate_spend(result: &CostQueryResult, threshold: Decimal) -> ThresholdEvaluation {
    match result {
        CostQueryResult::Failure { .. } => ThresholdEvaluation::invalid_credentials(threshold),
        CostQueryResult::Success {
            total_amount,
            account_id,
        } => {
            let status = if *total_amount < threshold {
                EvaluationStatus::WithinBudget
            } else {
                EvaluationStatus::Exceeded
            };

            ThresholdEvaluation {
                status,
                account_id: Some(account_id.clone()),
                amount: Some(*total_amount),
                threshold,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_below_threshold_is_within_budget() {
        let result = CostQueryResult::success(dec!(99.99), "A");
        let eval = evaluate_spend(&result, dec!(100));
        assert_eq!(eval.status, EvaluationStatus::WithinBudget);
        assert_eq!(eval.account_id.as_deref(), Some("A"));
        assert_eq!(eval.amount, Some(dec!(99.99)));
        assert_eq!(eval.threshold, dec!(100));
    }

    #[test]
    fn test_equal_to_threshold_is_exceeded() {
        let result = CostQueryResult::success(dec!(100), "A");
        assert_eq!(
            evaluate_spend(&result, dec!(100)).status,
            EvaluationStatus::Exceeded
        );
    }

    #[test]
    fn test_above_threshold_is_exceeded() {
        let result = CostQueryResult::success(dec!(150.25), "A");
        assert_eq!(
            evaluate_spend(&result, dec!(100)).status,
            EvaluationStatus::Exceeded
        );
    }

    #[test]
    fn test_zero_threshold_always_exceeded() {
        let result = CostQueryResult::success(Decimal::ZERO, "A");
        assert_eq!(
            evaluate_spend(&result, Decimal::ZERO).status,
            EvaluationStatus::Exceeded
        );
    }

    #[test]
    fn test_failure_is_invalid_credentials() {
        let result = CostQueryResult::failure("UnrecognizedClientException");
        let eval = evaluate_spend(&result, dec!(100));
        assert_eq!(eval.status, EvaluationStatus::InvalidCredentials);
        assert!(eval.account_id.is_none());
        assert!(eval.amount.is_none());
        assert_eq!(eval.threshold, dec!(100));
    }
}
