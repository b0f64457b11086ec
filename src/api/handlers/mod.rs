pub mod health;
pub mod integration;
pub mod tick;

pub use health::health_check;
pub use integration::integration_descriptor;
pub use tick::monitor_spending;
