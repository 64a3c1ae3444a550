use crate::domain::model::FestivalResponse;
use crate::domain::ports::{ConfigProvider, FestivalSource};
use crate::domain::query::PageQuery;
use crate::utils::endpoint::portal_base;
use crate::utils::error::{FestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Opendatasoft explore v2.1 records endpoint for one dataset.
pub fn records_url(base_url: &str, dataset: &str) -> Result<Url> {
    portal_base(base_url)?
        .join(&format!("api/explore/v2.1/catalog/datasets/{}/records", dataset))
        .map_err(|e| FestError::ConfigError {
            message: format!("Cannot build records URL for dataset {}: {}", dataset, e),
        })
}

#[derive(Debug, Clone)]
pub struct HttpFestivalSource {
    client: Client,
    endpoint: Url,
}

impl HttpFestivalSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        let endpoint = records_url(config.base_url(), config.dataset())?;
        tracing::debug!("Festival records endpoint: {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn get(&self, params: &[(&str, String)]) -> Result<FestivalResponse> {
        tracing::debug!("Making API request to: {} {:?}", self.endpoint, params);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FestError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: FestivalResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            "API returned {} records (total_count: {:?})",
            parsed.results.len(),
            parsed.total_count
        );
        Ok(parsed)
    }
}

#[async_trait]
impl FestivalSource for HttpFestivalSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<FestivalResponse> {
        self.get(&query.to_query_pairs()).await
    }

    async fn find_where(&self, where_clause: &str, limit: usize) -> Result<FestivalResponse> {
        self.get(&[
            ("where", where_clause.to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }
}
