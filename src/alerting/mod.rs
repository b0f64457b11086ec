//! Threshold classification and alert rendering.

pub mod evaluator;
pub mod formatter;

pub use evaluator::evaluate_spend;
pub use formatter::format_alert;
