use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    WithinBudget,
    Exceeded,
    /// The provider could not be queried, or the schedule could not be turned
    /// into a reporting window.
    InvalidCredentials,
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationStatus::WithinBudget => write!(f, "within_budget"),
            EvaluationStatus::Exceeded => write!(f, "exceeded"),
            EvaluationStatus::InvalidCredentials => write!(f, "invalid_credentials"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEvaluation {
    pub status: EvaluationStatus,
    pub account_id: Option<String>,
    pub amount: Option<Decimal>,
    pub threshold: Decimal,
}

impl ThresholdEvaluation {
    pub fn invalid_credentials(threshold: Decimal) -> Self {
        Self {
            status: EvaluationStatus::InvalidCredentials,
            account_id: None,
            amount: None,
            threshold,
        }
    }
}
