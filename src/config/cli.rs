use crate::app::commands::{ListRequest, PageSpan};
use crate::config::toml_config::FileConfig;
use crate::config::{OutputFormat, Settings};
use crate::domain::query::{FilterKind, RefineFilter};
use crate::utils::error::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gofest")]
#[command(about = "Browse French festivals from the data.culture.gouv.fr open data portal")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Portal base URL [default: https://data.culture.gouv.fr/]")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Dataset identifier on the portal")]
    pub dataset: Option<String>,

    #[arg(long, global = true, help = "Festivals per page (1-100)")]
    pub page_size: Option<usize>,

    #[arg(long, global = true, help = "HTTP request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List festivals, optionally refined by departement, city or discipline
    List(ListArgs),
    /// Show the values available for each filter
    Filters(FiltersArgs),
    /// Show one festival and its location
    Show {
        /// Festival identifier, as printed by `list`
        id: String,
    },
    /// Print the embeddable map of the whole dataset
    Map,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub departement: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub discipline: Option<String>,

    #[arg(
        long,
        default_value = "1",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of pages to load"
    )]
    pub pages: usize,

    #[arg(long, conflicts_with = "pages", help = "Load every page")]
    pub all: bool,
}

#[derive(Debug, Clone, Args)]
pub struct FiltersArgs {
    #[arg(long, value_enum, help = "Only show this filter")]
    pub kind: Option<FilterKind>,

    #[arg(
        long,
        default_value = "1",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of pages to sample"
    )]
    pub pages: usize,
}

impl ListArgs {
    pub fn to_request(&self) -> ListRequest {
        ListRequest {
            filter: RefineFilter::new(
                self.departement.clone(),
                self.city.clone(),
                self.discipline.clone(),
            ),
            span: if self.all {
                PageSpan::All
            } else {
                PageSpan::Pages(self.pages)
            },
        }
    }
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            FileConfig::from_file(path)?.apply(&mut settings);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(dataset) = &self.dataset {
            settings.dataset = dataset.clone();
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        Ok(settings)
    }
}
