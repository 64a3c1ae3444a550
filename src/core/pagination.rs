use crate::domain::query::PageQuery;
use crate::utils::error::{FestError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Offset/limit cursor over the records endpoint. Only one page may be
/// outstanding at a time.
#[derive(Debug, Clone)]
pub struct Paginator {
    limit: usize,
    offset: usize,
    loaded: usize,
    loading: bool,
    exhausted: bool,
}

impl Paginator {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
            loaded: 0,
            loading: false,
            exhausted: false,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Claims the next window.
    pub fn begin(&mut self, refine: Option<String>) -> Result<PageQuery> {
        if self.loading {
            return Err(FestError::RequestInFlight);
        }
        self.loading = true;
        Ok(PageQuery {
            limit: self.limit,
            offset: self.offset,
            refine,
        })
    }

    /// The offset always moves by a full page, whatever came back.
    pub fn complete(&mut self, received: usize) {
        self.loading = false;
        self.offset += self.limit;
        self.loaded += received;
        if received < self.limit {
            self.exhausted = true;
        }
    }

    /// Releases the window without moving, so a retry asks for the same page.
    pub fn fail(&mut self) {
        self.loading = false;
    }

    /// Claims the next window behind a guard. Dropping the guard without
    /// settling it releases the window as a failure would.
    pub fn claim(&mut self, refine: Option<String>) -> Result<PageClaim<'_>> {
        let query = self.begin(refine)?;
        Ok(PageClaim {
            paginator: self,
            query,
            settled: false,
        })
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.loaded = 0;
        self.loading = false;
        self.exhausted = false;
    }
}

/// An outstanding page request. Released on drop unless completed.
#[derive(Debug)]
pub struct PageClaim<'a> {
    paginator: &'a mut Paginator,
    query: PageQuery,
    settled: bool,
}

impl PageClaim<'_> {
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn complete(mut self, received: usize) {
        self.settled = true;
        self.paginator.complete(received);
    }

    pub fn fail(mut self) {
        self.settled = true;
        self.paginator.fail();
    }
}

impl Drop for PageClaim<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.paginator.fail();
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
