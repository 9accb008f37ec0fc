use crate::error::ScoreError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "https://huggingface.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const MAX_CONCURRENCY: usize = 64;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub registry: Option<RegistryConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub fixture: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub concurrency: Option<usize>,
}

/// Registry settings with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySettings {
    pub enabled: bool,
    pub base_url: String,
    pub timeout: Duration,
    pub fixture: Option<PathBuf>,
}

impl ScoreConfig {
    pub fn registry_settings(&self) -> RegistrySettings {
        match &self.registry {
            Some(registry) => RegistrySettings {
                enabled: registry.enabled,
                base_url: registry
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
                timeout: Duration::from_secs(
                    registry.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
                ),
                fixture: registry.fixture.clone(),
            },
            None => RegistrySettings {
                enabled: true,
                base_url: DEFAULT_REGISTRY_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                fixture: None,
            },
        }
    }

    pub fn concurrency(&self) -> usize {
        self.batch
            .as_ref()
            .and_then(|batch| batch.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(registry) = &self.registry {
            if registry.timeout_secs == Some(0) {
                return Err(ScoreError::ConfigParse(
                    "registry.timeout_secs must be greater than 0".to_string(),
                ));
            }
            if let Some(base_url) = &registry.base_url {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(ScoreError::ConfigParse(format!(
                        "registry.base_url must be an http(s) URL: {}",
                        base_url
                    )));
                }
            }
        }

        validate_concurrency(self.concurrency())
    }
}

pub fn validate_concurrency(concurrency: usize) -> Result<(), ScoreError> {
    if !(1..=MAX_CONCURRENCY).contains(&concurrency) {
        return Err(ScoreError::ConfigParse(format!(
            "batch.concurrency must be between 1 and {} (found {})",
            MAX_CONCURRENCY, concurrency
        )));
    }
    Ok(())
}
