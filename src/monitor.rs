//! Tick orchestration.
//!
//! One pass per tick: parse settings, resolve the reporting window, query the
//! provider, classify, render and dispatch. Nothing is kept between ticks.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::alerting::{evaluate_spend, format_alert};
use crate::clock::Clock;
use crate::error::Result;
use crate::models::{
    CostQueryResult, Credentials, MonitorSettings, NotificationPayload, ThresholdEvaluation,
    TickRequest,
};
use crate::notify::NotificationDispatcher;
use crate::provider::CostProvider;
use crate::schedule::{resolve_frequency, DateRange, Frequency};

const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything decided for one tick, before delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub frequency: Frequency,
    /// `None` when the frequency could not be turned into a window.
    pub range: Option<DateRange>,
    pub evaluation: ThresholdEvaluation,
    pub payload: NotificationPayload,
}

#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub report: TickReport,
    pub delivered: bool,
}

pub struct SpendMonitor {
    provider: Arc<dyn CostProvider>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    clock: Arc<dyn Clock>,
    provider_timeout: Duration,
}

impl SpendMonitor {
    pub fn new(
        provider: Arc<dyn CostProvider>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            dispatcher,
            clock,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Decides the notification for `settings` without delivering it.
    ///
    /// Fails only on configuration errors. Schedule and provider problems
    /// become an invalid-credentials evaluation.
    #[instrument(skip_all, fields(provider = self.provider.name()))]
    pub async fn prepare(&self, settings: &MonitorSettings) -> Result<TickReport> {
        let threshold = settings.threshold()?;
        let frequency = resolve_frequency(&settings.schedule());

        let (range, evaluation) = match DateRange::for_frequency(frequency, self.clock.today()) {
            Ok(range) => {
                let result = self.query_provider(&settings.credentials(), &range).await;
                (Some(range), evaluate_spend(&result, threshold))
            }
            Err(e) => {
                warn!(error = %e, %frequency, "cannot compute reporting window");
                (None, ThresholdEvaluation::invalid_credentials(threshold))
            }
        };

        info!(
            %frequency,
            status = %evaluation.status,
            account_id = evaluation.account_id.as_deref().unwrap_or("-"),
            "spend evaluated"
        );

        let payload = format_alert(&evaluation);
        Ok(TickReport {
            frequency,
            range,
            evaluation,
            payload,
        })
    }

    /// Runs a full tick. A delivery failure is logged and reported through
    /// `delivered`, never as an error.
    pub async fn run_tick(&self, request: &TickRequest) -> Result<TickOutcome> {
        let settings = MonitorSettings::from_settings(&request.settings);
        let report = self.prepare(&settings).await?;

        let delivered = match self
            .dispatcher
            .dispatch(&request.return_url, &report.payload)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "notification dispatch failed");
                false
            }
        };

        Ok(TickOutcome { report, delivered })
    }

    async fn query_provider(&self, credentials: &Credentials, range: &DateRange) -> CostQueryResult {
        match tokio::time::timeout(self.provider_timeout, self.provider.query(credentials, range))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.provider_timeout, %range, "cost provider timed out");
                CostQueryResult::failure(format!(
                    "provider timed out after {:?}",
                    self.provider_timeout
                ))
            }
        }
    }
}
