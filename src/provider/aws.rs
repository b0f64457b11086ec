use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::clock::Clock;
use crate::error::{MonitorError, Result};
use crate::models::{CostQueryResult, Credentials};
use crate::provider::sigv4::{self, RequestToSign};
use crate::provider::{AwsConfig, CostProvider};
use crate::schedule::DateRange;

const COST_METRIC: &str = "AmortizedCost";
const GET_COST_AND_USAGE_TARGET: &str = "AWSInsightsIndexService.GetCostAndUsage";
const CE_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const STS_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const GET_CALLER_IDENTITY_BODY: &str = "Action=GetCallerIdentity&Version=2011-06-15";

/// Upper bound on `NextPageToken` round trips for one query.
const MAX_PAGES: usize = 50;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetCostAndUsageRequest<'a> {
    time_period: TimePeriod,
    granularity: &'a str,
    metrics: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    next_page_token: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TimePeriod {
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetCostAndUsageResponse {
    #[serde(default)]
    results_by_time: Vec<ResultByTime>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResultByTime {
    #[serde(default)]
    total: HashMap<String, MetricValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MetricValue {
    amount: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallerIdentityEnvelope {
    get_caller_identity_response: CallerIdentityResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallerIdentityResponse {
    get_caller_identity_result: CallerIdentity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallerIdentity {
    account: String,
}

/// Cost provider backed by AWS Cost Explorer, with the account id taken
/// from STS `GetCallerIdentity`.
pub struct AwsCostExplorer {
    config: AwsConfig,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl AwsCostExplorer {
    pub fn new(config: AwsConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            config,
            http,
            clock,
        })
    }

    /// Account id and summed amortized cost over `range`.
    pub async fn fetch(&self, credentials: &Credentials, range: &DateRange) -> Result<(Decimal, String)> {
        if !credentials.is_complete() {
            return Err(MonitorError::provider("missing AWS access key id or secret"));
        }

        let account_id = self.caller_account(credentials).await?;
        let total = self.amortized_total(credentials, range).await?;
        Ok((total, account_id))
    }

    async fn caller_account(&self, credentials: &Credentials) -> Result<String> {
        let url = parse_endpoint(&self.config.sts_endpoint())?;
        let body = self
            .signed_post(
                &url,
                &self.config.region,
                "sts",
                &[("content-type", STS_CONTENT_TYPE)],
                GET_CALLER_IDENTITY_BODY.as_bytes().to_vec(),
                credentials,
            )
            .await?;

        let envelope: CallerIdentityEnvelope = serde_json::from_slice(&body)
            .map_err(|e| MonitorError::provider(format!("malformed STS response: {}", e)))?;
        Ok(envelope.get_caller_identity_response.get_caller_identity_result.account)
    }

    async fn amortized_total(&self, credentials: &Credentials, range: &DateRange) -> Result<Decimal> {
        let url = parse_endpoint(&self.config.cost_explorer_endpoint())?;
        let mut total = Decimal::ZERO;
        let mut next_token: Option<String> = None;

        for page in 0..MAX_PAGES {
            let request = GetCostAndUsageRequest {
                time_period: TimePeriod {
                    start: range.start_iso(),
                    end: range.end_iso(),
                },
                granularity: "DAILY",
                metrics: [COST_METRIC],
                next_page_token: next_token.as_deref(),
            };
            let payload = serde_json::to_vec(&request)?;

            let body = self
                .signed_post(
                    &url,
                    self.config.cost_explorer_region(),
                    "ce",
                    &[
                        ("content-type", CE_CONTENT_TYPE),
                        ("x-amz-target", GET_COST_AND_USAGE_TARGET),
                    ],
                    payload,
                    credentials,
                )
                .await?;

            let response: GetCostAndUsageResponse = serde_json::from_slice(&body).map_err(|e| {
                MonitorError::provider(format!("malformed Cost Explorer response: {}", e))
            })?;

            total += sum_amortized(&response.results_by_time)?;
            debug!(page, entries = response.results_by_time.len(), "fetched cost page");

            match response.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => next_token = Some(token),
                None => return Ok(total),
            }
        }

        Err(MonitorError::provider(format!(
            "Cost Explorer pagination exceeded {} pages",
            MAX_PAGES
        )))
    }

    async fn signed_post(
        &self,
        url: &Url,
        region: &str,
        service: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
        credentials: &Credentials,
    ) -> Result<Vec<u8>> {
        let signature = sigv4::sign(
            &RequestToSign {
                method: "POST",
                url,
                headers,
                body: &body,
            },
            credentials,
            region,
            service,
            self.clock.now(),
        )?;

        let mut request = self
            .http
            .post(url.clone())
            .header("accept", "application/json")
            .header("x-amz-date", signature.amz_date)
            .header("authorization", signature.authorization);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let detail = String::from_utf8_lossy(&bytes);
            return Err(MonitorError::provider(format!(
                "{} returned {}: {}",
                service,
                status,
                detail.chars().take(200).collect::<String>()
            )));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl CostProvider for AwsCostExplorer {
    fn name(&self) -> &str {
        "aws"
    }

    async fn query(&self, credentials: &Credentials, range: &DateRange) -> CostQueryResult {
        match self.fetch(credentials, range).await {
            Ok((total, account_id)) => CostQueryResult::success(total, account_id),
            Err(e) => {
                warn!(error = %e, %range, "AWS cost query failed");
                CostQueryResult::failure(e.to_string())
            }
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| MonitorError::config(format!("invalid AWS endpoint '{}': {}", raw, e)))
}

fn sum_amortized(results: &[ResultByTime]) -> Result<Decimal> {
    results.iter().try_fold(Decimal::ZERO, |acc, entry| {
        let metric = entry.total.get(COST_METRIC).ok_or_else(|| {
            MonitorError::provider(format!("result entry missing {} total", COST_METRIC))
        })?;
        Ok(acc + parse_amount(&metric.amount)?)
    })
}

fn parse_amount(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| MonitorError::provider(format!("invalid amount '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_serialization() {
        let request = GetCostAndUsageRequest {
            time_period: TimePeriod {
                start: "2025-02-01".to_string(),
                end: "2025-03-15".to_string(),
            },
            granularity: "DAILY",
            metrics: [COST_METRIC],
            next_page_token: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["TimePeriod"]["Start"], "2025-02-01");
        assert_eq!(json["TimePeriod"]["End"], "2025-03-15");
        assert_eq!(json["Granularity"], "DAILY");
        assert_eq!(json["Metrics"][0], "AmortizedCost");
        assert!(json.get("NextPageToken").is_none());
    }

    #[test]
    fn test_sum_amortized() {
        let response: GetCostAndUsageResponse = serde_json::from_value(serde_json::json!({
            "ResultsByTime": [
                {"TimePeriod": {"Start": "2025-03-13", "End": "2025-03-14"},
                 "Total": {"AmortizedCost": {"Amount": "12.3456", "Unit": "USD"}},
                 "Groups": [], "Estimated": false},
                {"TimePeriod": {"Start": "2025-03-14", "End": "2025-03-15"},
                 "Total": {"AmortizedCost": {"Amount": "0.0044", "Unit": "USD"}},
                 "Groups": [], "Estimated": true}
            ],
            "DimensionValueAttributes": []
        }))
        .unwrap();

        assert_eq!(sum_amortized(&response.results_by_time).unwrap(), dec!(12.35));
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn test_sum_amortized_missing_metric() {
        let response: GetCostAndUsageResponse = serde_json::from_value(serde_json::json!({
            "ResultsByTime": [{"Total": {"UnblendedCost": {"Amount": "1", "Unit": "USD"}}}]
        }))
        .unwrap();

        assert!(sum_amortized(&response.results_by_time).is_err());
    }

    #[test]
    fn test_parse_amount_forms() {
        assert_eq!(parse_amount("50.00").unwrap(), dec!(50.00));
        assert_eq!(parse_amount("-0.01").unwrap(), dec!(-0.01));
        assert_eq!(parse_amount("1.5e-3").unwrap(), dec!(0.0015));
        assert!(parse_amount("fifty").is_err());
    }

    #[test]
    fn test_caller_identity_parsing() {
        let envelope: CallerIdentityEnvelope = serde_json::from_value(serde_json::json!({
            "GetCallerIdentityResponse": {
                "GetCallerIdentityResult": {
                    "Account": "123456789012",
                    "Arn": "arn:aws:iam::123456789012:user/monitor",
                    "UserId": "AIDAEXAMPLE"
                },
                "ResponseMetadata": {"RequestId": "abc"}
            }
        }))
        .unwrap();

        assert_eq!(
            envelope.get_caller_identity_response.get_caller_identity_result.account,
            "123456789012"
        );
    }
}
