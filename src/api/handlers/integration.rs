use axum::{
    extract::State,
    http::{header::HOST, HeaderMap},
    Json,
};
use std::sync::Arc;

use crate::api::state::AppState;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

pub async fn integration_descriptor(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let base_url = state
        .public_base_url
        .clone()
        .unwrap_or_else(|| base_url_from_headers(&headers));

    Json(state.descriptor.render(&base_url))
}

fn base_url_from_headers(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let scheme = header(FORWARDED_PROTO).unwrap_or("http");
    let host = header(HOST.as_str()).unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_base_url_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("monitor.example.com:8000"));
        assert_eq!(base_url_from_headers(&headers), "http://monitor.example.com:8000");
    }

    #[test]
    fn test_base_url_honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("monitor.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));
        assert_eq!(base_url_from_headers(&headers), "https://monitor.example.com");
    }

    #[test]
    fn test_base_url_without_host() {
        assert_eq!(base_url_from_headers(&HeaderMap::new()), "http://localhost");
    }
}
