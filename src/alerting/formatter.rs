use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{EvaluationStatus, NotificationPayload, NotificationStatus, ThresholdEvaluation};

const INVALID_CREDENTIALS_MESSAGE: &str =
    "🚨 AWS Spend Monitor: Invalid AWS credentials provided. Please check your configuration.";

/// Renders an evaluation into the webhook payload.
///
/// Only a within-budget result reports `success`; an exceeded budget and a
/// failed lookup both report `error` and differ in message text only.
pub fn format_alert(evaluation: &ThresholdEvaluation) -> NotificationPayload {
    match (
        evaluation.status,
        evaluation.account_id.as_deref(),
        evaluation.amount,
    ) {
        (EvaluationStatus::WithinBudget, Some(account), Some(amount)) => NotificationPayload::new(
            spend_message("✅", account, amount, evaluation.threshold, "🟢", "Within Budget"),
            NotificationStatus::Success,
        ),
        (EvaluationStatus::Exceeded, Some(account), Some(amount)) => NotificationPayload::new(
            spend_message("🔔", account, amount, evaluation.threshold, "🔴", "Exceeded Budget"),
            NotificationStatus::Error,
        ),
        _ => NotificationPayload::new(INVALID_CREDENTIALS_MESSAGE, NotificationStatus::Error),
    }
}

fn spend_message(
    heading: &str,
    account: &str,
    amount: Decimal,
    threshold: Decimal,
    marker: &str,
    label: &str,
) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!(
        "{heading} AWS Spend Alert\n\n\
         🏦 AWS Account: {account}\n\
         💰 Current Spend: ${amount:.2}\n\
         🎯 Threshold: ${threshold}\n\
         {marker} Status: {label}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn evaluation(status: EvaluationStatus) -> ThresholdEvaluation {
        ThresholdEvaluation {
            status,
            account_id: Some("123456789012".to_string()),
            amount: Some(dec!(42.5)),
            threshold: dec!(100),
        }
    }

    #[test]
    fn test_within_budget_message() {
        let payload = format_alert(&evaluation(EvaluationStatus::WithinBudget));
        assert_eq!(payload.status(), NotificationStatus::Success);
        assert_eq!(
            payload.message(),
            "✅ AWS Spend Alert\n\n🏦 AWS Account: 123456789012\n💰 Current Spend: $42.50\n🎯 Threshold: $100\n🟢 Status: Within Budget"
        );
    }

    #[test]
    fn test_exceeded_message() {
        let payload = format_alert(&evaluation(EvaluationStatus::Exceeded));
        assert_eq!(payload.status(), NotificationStatus::Error);
        assert!(payload.message().starts_with("🔔 AWS Spend Alert"));
        assert!(payload.message().contains("🏦 AWS Account: 123456789012"));
        assert!(payload.message().contains("💰 Current Spend: $42.50"));
        assert!(payload.message().contains("🎯 Threshold: $100"));
        assert!(payload.message().ends_with("🔴 Status: Exceeded Budget"));
    }

    #[test]
    fn test_invalid_credentials_message() {
        let payload = format_alert(&ThresholdEvaluation::invalid_credentials(dec!(100)));
        assert_eq!(payload.status(), NotificationStatus::Error);
        assert_eq!(payload.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[test]
    fn test_statuses_per_outcome() {
        let within = format_alert(&evaluation(EvaluationStatus::WithinBudget));
        let exceeded = format_alert(&evaluation(EvaluationStatus::Exceeded));
        let invalid = format_alert(&evaluation(EvaluationStatus::InvalidCredentials));

        assert_eq!(within.status(), NotificationStatus::Success);
        assert_eq!(exceeded.status(), NotificationStatus::Error);
        assert_eq!(invalid.status(), NotificationStatus::Error);
        assert_ne!(exceeded.message(), invalid.message());
    }

    #[test]
    fn test_spend_rounds_to_cents() {
        let eval = ThresholdEvaluation {
            status: EvaluationStatus::Exceeded,
            account_id: Some("1".to_string()),
            amount: Some(dec!(123.4567)),
            threshold: dec!(100),
        };
        assert!(format_alert(&eval).message().contains("$123.46"));
    }

    #[test]
    fn test_source_and_event_are_fixed() {
        let payload = format_alert(&evaluation(EvaluationStatus::WithinBudget));
        assert_eq!(payload.source_label(), "AWS Spend Monitor");
        assert_eq!(payload.event_name(), "Cost Alert");
    }
}
