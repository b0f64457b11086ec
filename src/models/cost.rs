use rust_decimal::Decimal;

/// Outcome of a single provider query. Built fresh for every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostQueryResult {
    Success {
        total_amount: Decimal,
        account_id: String,
    },
    Failure {
        reason: String,
    },
}

impl CostQueryResult {
    pub fn success(total_amount: Decimal, account_id: impl Into<String>) -> Self {
        CostQueryResult::Success {
            total_amount,
            account_id: account_id.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        CostQueryResult::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CostQueryResult::Success { .. })
    }
}
