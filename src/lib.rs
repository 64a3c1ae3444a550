pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpFestivalSource;
pub use config::{OutputFormat, Settings};
pub use core::{details::fetch_festival, listing::FestivalListing};
pub use domain::model::{Festival, FestivalResponse, GeoPoint};
pub use domain::query::{FilterKind, RefineFilter};
pub use utils::error::{FestError, Result};
