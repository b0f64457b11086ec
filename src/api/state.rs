use crate::integration::IntegrationDescriptor;
use crate::monitor::SpendMonitor;

pub struct AppState {
    pub monitor: SpendMonitor,
    pub descriptor: IntegrationDescriptor,
    /// Overrides the base URL derived from request headers.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(monitor: SpendMonitor, descriptor: IntegrationDescriptor) -> Self {
        Self {
            monitor,
            descriptor,
            public_base_url: None,
        }
    }

    pub fn with_public_base_url(mut self, base_url: Option<String>) -> Self {
        self.public_base_url = base_url;
        self
    }
}
