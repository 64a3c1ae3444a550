use crate::config::{OutputFormat, Settings};
use crate::utils::error::{FestError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub dataset: Option<String>,
    pub page_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FestError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(api) = &self.api {
            if let Some(base_url) = &api.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(dataset) = &api.dataset {
                settings.dataset = dataset.clone();
            }
            if let Some(page_size) = api.page_size {
                settings.page_size = page_size;
            }
            if let Some(timeout) = api.timeout_seconds {
                settings.timeout_seconds = timeout;
            }
        }
        if let Some(format) = self.output.as_ref().and_then(|o| o.format) {
            settings.format = format;
        }
    }
}
