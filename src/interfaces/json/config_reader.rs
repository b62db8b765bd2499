use crate::domain::merchant::{CategoryCode, Taxonomy};
use crate::domain::rule::{Catalog, RewardRule};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// A caller-substituted engine configuration: the recognized category set,
/// the designated catch-all, and the ordered rule catalog.
#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    pub categories: Vec<String>,
    pub catch_all: String,
    pub rules: Vec<RewardRule>,
}

/// Reads an engine configuration from JSON and validates it into the domain
/// types. Catalog violations (most importantly a missing leftover rule)
/// surface as configuration errors here, before the engine is built.
pub struct ConfigReader<R: Read> {
    source: R,
}

impl<R: Read> ConfigReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn config(self) -> Result<(Taxonomy, Catalog)> {
        let config: EngineConfig = serde_json::from_reader(self.source)?;
        let taxonomy = Taxonomy::new(
            config.categories.into_iter().map(CategoryCode::new),
            CategoryCode::new(config.catch_all),
        );
        let catalog = Catalog::new(config.rules, &taxonomy)?;
        Ok((taxonomy, catalog))
    }
}
