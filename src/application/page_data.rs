//! Page-level aggregation: load several content sources in parallel and
//! keep whatever succeeded, with one combined error for the rest.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::error::Result;

/// A named producer of one page section's data.
#[async_trait]
pub trait PageSource: Send + Sync {
    fn name(&self) -> &str;

    async fn load(&self) -> Result<serde_json::Value>;

    /// Cache-bypassing variant; defaults to a plain load for sources
    /// that do not cache.
    async fn refresh(&self) -> Result<serde_json::Value> {
        self.load().await
    }
}

/// Outcome of loading a page: every section that succeeded, plus one
/// combined message when any failed. Partial data is a terminal state,
/// not a retry trigger.
#[derive(Debug, Clone)]
pub struct PageData {
    pub data: HashMap<String, serde_json::Value>,
    pub error: Option<String>,
}

impl PageData {
    /// Deserializes one section back into its typed config.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.data
            .get(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Runs a fixed set of page sources concurrently.
pub struct PageLoader {
    sources: Vec<Arc<dyn PageSource>>,
}

impl PageLoader {
    pub fn new(sources: Vec<Arc<dyn PageSource>>) -> Self {
        Self { sources }
    }

    /// Loads every source in parallel. A failing source contributes its
    /// name and error to the combined message instead of sinking the
    /// whole page.
    pub async fn load(&self) -> PageData {
        self.run(false).await
    }

    /// Re-runs every source through its cache-bypassing path.
    pub async fn refresh(&self) -> PageData {
        self.run(true).await
    }

    async fn run(&self, bypass_caches: bool) -> PageData {
        let mut handles = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let name = source.name().to_string();
            let source = Arc::clone(source);
            handles.push((
                name,
                tokio::spawn(async move {
                    if bypass_caches {
                        source.refresh().await
                    } else {
                        source.load().await
                    }
                }),
            ));
        }

        let mut data = HashMap::new();
        let mut errors = Vec::new();

        for (name, handle) in handles {
            match handle.await {
                Ok(Ok(value)) => {
                    data.insert(name, value);
                }
                Ok(Err(e)) => {
                    tracing::warn!("Failed to load {} data: {}", name, e);
                    errors.push(format!("{}: {}", name, e));
                }
                Err(e) => {
                    tracing::warn!("Loader task for {} aborted: {}", name, e);
                    errors.push(format!("{}: {}", name, e));
                }
            }
        }

        let error = if errors.is_empty() {
            None
        } else {
            Some(format!("Some data failed to load: {}", errors.join(", ")))
        };

        PageData { data, error }
    }
}
