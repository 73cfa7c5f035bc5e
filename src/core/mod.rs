pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod highlighter;
pub mod matcher;
pub mod normalizer;
pub mod scorer;

pub use catalog::{load_catalog, Catalog};
pub use classifier::DomainClassifier;
pub use engine::MatchEngine;
