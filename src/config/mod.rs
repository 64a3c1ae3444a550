#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_dataset_id, validate_range, validate_required, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://data.culture.gouv.fr/";
pub const DEFAULT_DATASET: &str = "festivals-global-festivals-_-pl";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// The explore API refuses larger pages.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Effective settings after defaults, the config file and CLI flags are layered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub dataset: String,
    pub page_size: usize,
    pub timeout_seconds: u64,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            format: OutputFormat::Text,
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn dataset(&self) -> &str {
        &self.dataset
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_required("base_url", &self.base_url)?;
        validate_required("dataset", &self.dataset)?;
        validate_url("base_url", &self.base_url)?;
        validate_dataset_id("dataset", &self.dataset)?;
        validate_range("page_size", self.page_size, 1, MAX_PAGE_SIZE)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        Ok(())
    }
}
