//! Catalog source adapters: HTTP endpoint and local JSON file.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::model::CatalogData;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Fetches the catalog JSON from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CatalogData> {
        tracing::debug!("Fetching catalog from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let data = response.json::<CatalogData>().await?;
        Ok(data)
    }
}

/// Reads the catalog JSON from a local file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<CatalogData> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }
}

/// Always yields the full built-in catalog. Used when no external source is
/// configured.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn fetch(&self) -> Result<CatalogData> {
        Ok(CatalogData::builtin())
    }
}
