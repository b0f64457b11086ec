//! Cost provider port and its AWS implementation.

pub mod aws;
pub mod config;
pub mod sigv4;

pub use aws::AwsCostExplorer;
pub use config::AwsConfig;

use async_trait::async_trait;

use crate::models::{CostQueryResult, Credentials};
use crate::schedule::DateRange;

/// Source of aggregated spend for one account.
///
/// Implementations report every failure as [`CostQueryResult::Failure`];
/// `query` itself never errors.
#[async_trait]
pub trait CostProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn query(&self, credentials: &Credentials, range: &DateRange) -> CostQueryResult;
}
