pub mod cost;
pub mod credentials;
pub mod evaluation;
pub mod notification;
pub mod settings;

pub use cost::CostQueryResult;
pub use credentials::Credentials;
pub use evaluation::{EvaluationStatus, ThresholdEvaluation};
pub use notification::{NotificationPayload, NotificationStatus};
pub use settings::{MonitorSettings, Setting, TickRequest};
