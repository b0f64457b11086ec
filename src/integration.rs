//! Static integration descriptor served to the scheduler.
//!
//! The document ships as `assets/integration.json`; only the URLs that point
//! back at this service are filled in per request.

use serde_json::Value;

use crate::error::{MonitorError, Result};

const DESCRIPTOR_JSON: &str = include_str!("../assets/integration.json");

#[derive(Debug, Clone)]
pub struct IntegrationDescriptor {
    document: Value,
}

impl IntegrationDescriptor {
    pub fn load() -> Result<Self> {
        let document: Value = serde_json::from_str(DESCRIPTOR_JSON)?;
        if !document["data"].is_object() {
            return Err(MonitorError::internal("integration descriptor has no data object"));
        }
        Ok(Self { document })
    }

    /// Descriptor with `app_url`, `website` and `tick_url` pointing at
    /// `base_url`.
    pub fn render(&self, base_url: &str) -> Value {
        let base_url = base_url.trim_end_matches('/');
        let mut document = self.document.clone();
        let data = &mut document["data"];

        data["descriptions"]["app_url"] = Value::String(base_url.to_string());
        data["website"] = Value::String(base_url.to_string());
        data["tick_url"] = Value::String(format!("{}/tick", base_url));

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_loads() {
        let descriptor = IntegrationDescriptor::load().unwrap();
        let doc = descriptor.render("http://localhost:8000");
        assert_eq!(doc["data"]["descriptions"]["app_name"], "AWS Spend Monitor");
        assert_eq!(doc["data"]["integration_type"], "interval");
    }

    #[test]
    fn test_render_fills_urls() {
        let descriptor = IntegrationDescriptor::load().unwrap();
        let doc = descriptor.render("https://spend.example.com/");

        assert_eq!(doc["data"]["descriptions"]["app_url"], "https://spend.example.com");
        assert_eq!(doc["data"]["website"], "https://spend.example.com");
        assert_eq!(doc["data"]["tick_url"], "https://spend.example.com/tick");
    }

    #[test]
    fn test_settings_schema_labels() {
        let descriptor = IntegrationDescriptor::load().unwrap();
        let doc = descriptor.render("http://localhost");
        let labels: Vec<&str> = doc["data"]["settings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["label"].as_str().unwrap())
            .collect();

        assert_eq!(
            labels,
            vec![
                "aws_access_key_id",
                "aws_secret_access_key",
                "threshold",
                "frequency",
                "interval"
            ]
        );
    }
}
