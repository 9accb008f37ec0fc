//! Live metadata provider backed by the Hugging Face Hub model API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{FetchError, Metadata, MetadataProvider};
use crate::error::{Result, ScoreError};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct HubProvider {
    client: Client,
    base_url: String,
}

impl HubProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("modelscore/{}", VERSION))
            .timeout(timeout)
            .build()
            .map_err(|e| ScoreError::Registry(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn model_url(&self, full_name: &str) -> String {
        format!("{}/api/models/{}", self.base_url, full_name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfoResponse {
    #[serde(default)]
    tags: Vec<String>,
    last_modified: Option<String>,
    card_data: Option<Value>,
}

impl From<ModelInfoResponse> for Metadata {
    fn from(info: ModelInfoResponse) -> Self {
        let has_card = match &info.card_data {
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };
        let license = info
            .card_data
            .as_ref()
            .and_then(|card| card.get("license"))
            .and_then(license_text);
        let last_modified = info
            .last_modified
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Metadata {
            tags: info.tags.into_iter().collect(),
            license,
            last_modified,
            has_card,
        }
    }
}

// Card licenses come either as a single id or a list of ids.
fn license_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let ids = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>();
            (!ids.is_empty()).then(|| ids.join(","))
        }
        _ => None,
    }
}

#[async_trait]
impl MetadataProvider for HubProvider {
    fn name(&self) -> &str {
        "huggingface-hub"
    }

    async fn fetch_metadata(&self, full_name: &str) -> std::result::Result<Metadata, FetchError> {
        let response = self
            .client
            .get(self.model_url(full_name))
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        let status = response.status();
        // The hub answers 401 for repositories that do not exist or are gated.
        if matches!(
            status,
            StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Unavailable(format!(
                "registry returned status {}",
                status
            )));
        }

        let info: ModelInfoResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Unavailable(format!("invalid registry response: {}", e)))?;
        Ok(info.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_and_maps_model_info() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models/google/gemma-3-270m"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "google/gemma-3-270m",
                "tags": ["transformers", "text-generation"],
                "lastModified": "2025-08-14T07:35:01.000Z",
                "cardData": { "license": "gemma", "library_name": "transformers" }
            })))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let metadata = provider.fetch_metadata("google/gemma-3-270m").await.unwrap();

        assert_eq!(metadata.tags.len(), 2);
        assert!(metadata.tags.contains("text-generation"));
        assert_eq!(metadata.license.as_deref(), Some("gemma"));
        assert!(metadata.last_modified.is_some());
        assert!(metadata.has_card);
    }

    #[tokio::test]
    async fn missing_card_and_dates_are_absent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models/org/bare"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "org/bare" })),
            )
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let metadata = provider.fetch_metadata("org/bare").await.unwrap();

        assert_eq!(metadata, Metadata::default());
    }

    #[tokio::test]
    async fn license_lists_are_joined() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models/org/dual"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cardData": { "license": ["apache-2.0", "mit"] }
            })))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let metadata = provider.fetch_metadata("org/dual").await.unwrap();

        assert_eq!(metadata.license.as_deref(), Some("apache-2.0,mit"));
    }

    #[tokio::test]
    async fn not_found_status_maps_to_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = provider.fetch_metadata("org/missing").await.unwrap_err();
        assert_eq!(err, FetchError::NotFound);
    }

    #[tokio::test]
    async fn server_error_maps_to_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = provider.fetch_metadata("org/name").await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(ref reason) if reason.contains("503")));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = provider.fetch_metadata("org/name").await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(_)));
    }

    #[tokio::test]
    async fn slow_registry_hits_client_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let provider = HubProvider::new(&mock_server.uri(), Duration::from_millis(100)).unwrap();
        let err = provider.fetch_metadata("org/name").await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(_)));
    }
}
