use crate::app::render;
use crate::config::OutputFormat;
use crate::core::details::{fetch_festival, DetailView, MapMarker};
use crate::core::listing::FestivalListing;
use crate::core::map::embed_map_url;
use crate::domain::ports::FestivalSource;
use crate::domain::query::{FilterKind, RefineFilter};
use crate::utils::error::Result;
use std::io::Write;

/// How far `list` scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSpan {
    Pages(usize),
    All,
}

#[derive(Debug, Clone)]
pub struct ListRequest {
    pub filter: RefineFilter,
    pub span: PageSpan,
}

/// Loads the requested pages and prints them. Returns the number of festivals shown.
///
/// If a later page fails, the festivals already loaded are still printed
/// before the error is returned.
pub async fn list<S: FestivalSource, W: Write>(
    source: S,
    page_size: usize,
    request: ListRequest,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let mut listing = FestivalListing::with_filter(source, page_size, request.filter);
    listing.load_initial().await?;

    let scrolled = scroll(&mut listing, request.span).await;
    render::write_list(out, listing.festivals(), format)?;

    match scrolled {
        Ok(()) => Ok(listing.total()),
        Err(e) => {
            tracing::warn!("Listing stopped early after {} festivals", listing.total());
            Err(e)
        }
    }
}

async fn scroll<S: FestivalSource>(listing: &mut FestivalListing<S>, span: PageSpan) -> Result<()> {
    match span {
        PageSpan::Pages(pages) => {
            for _ in 1..pages {
                if listing.is_exhausted() {
                    break;
                }
                listing.load_more().await?;
            }
        }
        PageSpan::All => {
            while !listing.is_exhausted() {
                listing.load_more().await?;
            }
        }
    }
    Ok(())
}

/// Prints the values available for each refine field, gathered from `pages` pages.
pub async fn filters<S: FestivalSource, W: Write>(
    source: S,
    page_size: usize,
    kind: Option<FilterKind>,
    pages: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let mut listing = FestivalListing::new(source, page_size);
    listing.load_initial().await?;
    listing.extend_options(pages.saturating_sub(1)).await?;
    tracing::debug!("Options gathered from {} festivals", listing.total());

    render::write_options(out, listing.options(), kind, format)
}

pub async fn show<S: FestivalSource, W: Write>(
    source: &S,
    id: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let festival = fetch_festival(source, id).await?;
    let view = DetailView::from(&festival);
    let marker = MapMarker::from(&festival);
    render::write_details(out, &view, &marker, format)
}

pub fn map<W: Write>(base_url: &str, dataset: &str, out: &mut W) -> Result<()> {
    let url = embed_map_url(base_url, dataset)?;
    writeln!(out, "{}", url)?;
    Ok(())
}
