use crate::domain::model::FestivalResponse;
use crate::domain::query::PageQuery;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn dataset(&self) -> &str;
    fn page_size(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
}

/// Read access to the festivals dataset records endpoint.
#[async_trait]
pub trait FestivalSource: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Result<FestivalResponse>;
    async fn find_where(&self, where_clause: &str, limit: usize) -> Result<FestivalResponse>;
}
