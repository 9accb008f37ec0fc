use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use super::{FetchError, Metadata, MetadataProvider};
use crate::error::Result;

/// Offline provider backed by a JSON object keyed by `org/name`.
///
/// A `null` entry simulates a registry outage for that model; names missing
/// from the file are reported as not found.
#[derive(Debug, Default)]
pub struct FixtureProvider {
    entries: HashMap<String, Option<Metadata>>,
}

impl FixtureProvider {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries = serde_json::from_str(content)?;
        Ok(Self { entries })
    }
}

#[async_trait]
impl MetadataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_metadata(&self, full_name: &str) -> std::result::Result<Metadata, FetchError> {
        match self.entries.get(full_name) {
            Some(Some(metadata)) => Ok(metadata.clone()),
            Some(None) => Err(FetchError::Unavailable(format!(
                "fixture marks {} as unavailable",
                full_name
            ))),
            None => Err(FetchError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"
{
  "google/gemma-3-270m": {
    "tags": ["text-generation"],
    "license": "apache-2.0",
    "last_modified": "2025-08-14T07:35:01Z",
    "has_card": true
  },
  "org/bare": {},
  "org/down": null
}
"#;

    #[tokio::test]
    async fn serves_entries_from_json() {
        let provider = FixtureProvider::from_json(FIXTURE).expect("fixture should parse");

        let gemma = provider.fetch_metadata("google/gemma-3-270m").await.unwrap();
        assert_eq!(gemma.license.as_deref(), Some("apache-2.0"));
        assert!(gemma.has_card);
        assert!(gemma.last_modified.is_some());

        let bare = provider.fetch_metadata("org/bare").await.unwrap();
        assert_eq!(bare, Metadata::default());
    }

    #[tokio::test]
    async fn null_and_missing_entries_fail_differently() {
        let provider = FixtureProvider::from_json(FIXTURE).expect("fixture should parse");

        assert!(matches!(
            provider.fetch_metadata("org/down").await,
            Err(FetchError::Unavailable(_))
        ));
        assert_eq!(
            provider.fetch_metadata("org/other").await,
            Err(FetchError::NotFound)
        );
    }

    #[test]
    fn from_path_reports_missing_and_malformed_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(FixtureProvider::from_path(&dir.path().join("absent.json")).is_err());

        let malformed = dir.path().join("bad.json");
        fs::write(&malformed, "[1, 2").expect("fixture should write");
        let err = FixtureProvider::from_path(&malformed).expect_err("malformed fixture");
        assert!(err.to_string().contains("json error"));
    }
}
