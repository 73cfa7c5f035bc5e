pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::{BuiltinCatalogSource, FileCatalogSource, HttpCatalogSource};
pub use core::{load_catalog, Catalog, DomainClassifier, MatchEngine};
pub use domain::model::{AnalysisReport, CatalogData, Domain, JobMetadata, MatchResult};
pub use domain::ports::{CatalogSource, ConfigProvider};
pub use utils::error::{MatchError, Result};
