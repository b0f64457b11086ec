use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Cost Explorer has a single public endpoint, in us-east-1.
pub const COST_EXPLORER_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    /// Overrides both the Cost Explorer and STS endpoints (local stacks, tests).
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl AwsConfig {
    pub fn new(region: String) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cost_explorer_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://ce.{}.amazonaws.com/", COST_EXPLORER_REGION))
    }

    /// Signing region for Cost Explorer requests. Only an endpoint override
    /// lets `region` apply.
    pub fn cost_explorer_region(&self) -> &str {
        match self.endpoint {
            Some(_) => &self.region,
            None => COST_EXPLORER_REGION,
        }
    }

    pub fn sts_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://sts.{}.amazonaws.com/", self.region))
    }
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            timeout_secs: 30,
        }
    }
}
