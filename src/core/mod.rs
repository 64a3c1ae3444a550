pub mod details;
pub mod listing;
pub mod map;
pub mod options;
pub mod pagination;

pub use crate::domain::model::{Festival, FestivalResponse, GeoPoint};
pub use crate::domain::ports::{ConfigProvider, FestivalSource};
pub use crate::domain::query::{FilterKind, PageQuery, RefineFilter};
pub use crate::utils::error::Result;
