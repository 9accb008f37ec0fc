//! Registry metadata lookup.
//!
//! A [`Registry`] is the explicit context every evaluation receives: it holds
//! the configured [`MetadataProvider`] (or none at all) and the timeout bound
//! applied to every fetch. Fetch failures never surface as errors here; they
//! become a [`Lookup`] that the metric rules turn into fallback scores.

pub mod fixture;
pub mod hub;

use crate::error::Result;
use crate::locator::ModelIdentity;
use crate::types::config::RegistrySettings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_card: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    NotFound,
    Unavailable(String),
}

#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_metadata(&self, full_name: &str) -> std::result::Result<Metadata, FetchError>;
}

/// Outcome of one metadata lookup as seen by the metric rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Metadata),
    Unconfigured,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub lookup: Lookup,
    pub elapsed: Duration,
}

#[derive(Clone)]
pub struct Registry {
    provider: Option<Arc<dyn MetadataProvider>>,
    timeout: Duration,
}

impl Registry {
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn new(provider: Arc<dyn MetadataProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    pub fn from_settings(settings: &RegistrySettings, offline: bool) -> Result<Self> {
        if offline || !settings.enabled {
            info!("metadata registry disabled; metrics use unconfigured fallbacks");
            return Ok(Self::unconfigured());
        }

        let provider: Arc<dyn MetadataProvider> = match &settings.fixture {
            Some(path) => Arc::new(fixture::FixtureProvider::from_path(path)?),
            None => Arc::new(hub::HubProvider::new(&settings.base_url, settings.timeout)?),
        };
        info!(provider = provider.name(), "metadata registry configured");
        Ok(Self::new(provider, settings.timeout))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn lookup(&self, identity: &ModelIdentity) -> Fetched {
        let started = Instant::now();
        let Some(provider) = &self.provider else {
            return Fetched {
                lookup: Lookup::Unconfigured,
                elapsed: started.elapsed(),
            };
        };

        let full_name = identity.full_name.as_str();
        let lookup = match tokio::time::timeout(self.timeout, provider.fetch_metadata(full_name))
            .await
        {
            Ok(Ok(metadata)) => {
                debug!(model = full_name, "metadata found");
                Lookup::Found(metadata)
            }
            Ok(Err(FetchError::NotFound)) => {
                debug!(model = full_name, "model not found in registry");
                Lookup::Unavailable
            }
            Ok(Err(FetchError::Unavailable(reason))) => {
                warn!(model = full_name, %reason, "metadata fetch failed");
                Lookup::Unavailable
            }
            Err(_) => {
                warn!(
                    model = full_name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "metadata fetch timed out"
                );
                Lookup::Unavailable
            }
        };

        Fetched {
            lookup,
            elapsed: started.elapsed(),
        }
    }
}
