use crate::core::options::FilterOptions;
use crate::core::pagination::Paginator;
use crate::domain::model::Festival;
use crate::domain::ports::FestivalSource;
use crate::domain::query::{FilterKind, RefineFilter};
use crate::utils::error::Result;

/// Incrementally loaded, filterable festival list.
pub struct FestivalListing<S: FestivalSource> {
    source: S,
    filter: RefineFilter,
    paginator: Paginator,
    festivals: Vec<Festival>,
    options: FilterOptions,
}

impl<S: FestivalSource> FestivalListing<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self::with_filter(source, page_size, RefineFilter::default())
    }

    pub fn with_filter(source: S, page_size: usize, filter: RefineFilter) -> Self {
        Self {
            source,
            filter,
            paginator: Paginator::new(page_size),
            festivals: Vec::new(),
            options: FilterOptions::default(),
        }
    }

    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    pub fn filter(&self) -> &RefineFilter {
        &self.filter
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn total(&self) -> usize {
        self.festivals.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.paginator.is_exhausted()
    }

    pub fn offset(&self) -> usize {
        self.paginator.offset()
    }

    /// First page plus the filter option lists derived from it.
    pub async fn load_initial(&mut self) -> Result<usize> {
        let start = self.festivals.len();
        let received = self.load_more().await?;
        self.options = FilterOptions::from_festivals(&self.festivals[start..]);
        tracing::debug!(
            "Filter options: {} departements, {} cities, {} disciplines",
            self.options.departements.len(),
            self.options.cities.len(),
            self.options.disciplines.len()
        );
        Ok(received)
    }

    /// Appends the next page and returns how many festivals it held.
    pub async fn load_more(&mut self) -> Result<usize> {
        if self.paginator.is_exhausted() {
            tracing::debug!("No more festivals to load at offset {}", self.paginator.offset());
            return Ok(0);
        }

        // The claim releases the window if this future is dropped mid-request.
        let claim = self.paginator.claim(self.filter.refine_expression())?;
        let query = claim.query().clone();
        tracing::debug!(
            "Loading festivals: limit={}, offset={}, refine={:?}",
            query.limit,
            query.offset,
            query.refine
        );

        match self.source.fetch_page(&query).await {
            Ok(response) => {
                let received = response.results.len();
                claim.complete(received);
                self.festivals.extend(response.results);
                tracing::info!("Loaded {} festivals (total: {})", received, self.total());
                Ok(received)
            }
            Err(e) => {
                claim.fail();
                tracing::error!("Failed to load festivals at offset {}: {}", query.offset, e);
                Err(e)
            }
        }
    }

    /// Replaces the active filter and reloads from offset zero.
    pub async fn select_filter(&mut self, kind: FilterKind, value: &str) -> Result<usize> {
        tracing::info!("Filtering on {} = {}", kind, value);
        self.filter.select(kind, value);
        self.restart().await
    }

    pub async fn reset_filters(&mut self) -> Result<usize> {
        tracing::info!("Clearing filters");
        self.filter.clear();
        self.restart().await
    }

    /// Loads up to `pages` further pages, folding their values into the option lists.
    pub async fn extend_options(&mut self, pages: usize) -> Result<()> {
        for _ in 0..pages {
            if self.paginator.is_exhausted() {
                break;
            }
            let start = self.festivals.len();
            self.load_more().await?;
            self.options.merge(&self.festivals[start..]);
        }
        Ok(())
    }

    async fn restart(&mut self) -> Result<usize> {
        self.paginator.reset();
        self.festivals.clear();
        self.load_more().await
    }
}
