//! Scheduled AWS spend monitor: evaluates an account's amortized cost against
//! a budget threshold and posts the outcome to a webhook.

pub mod alerting;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod integration;
pub mod models;
pub mod monitor;
pub mod notify;
pub mod provider;
pub mod schedule;
pub mod telemetry;

pub use config::Config;
pub use error::{MonitorError, Result};
pub use monitor::{SpendMonitor, TickOutcome, TickReport};
