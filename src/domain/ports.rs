use crate::domain::model::CatalogData;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the keyword catalog comes from (HTTP endpoint, local file, ...).
///
/// Fetched once before the engine is constructed; a failed fetch is
/// recovered by the loader with the built-in fallback catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<CatalogData>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_url(&self) -> Option<&str>;
    fn catalog_file(&self) -> Option<&str>;
    fn min_job_length(&self) -> usize;
    fn highlight(&self) -> bool;
}
