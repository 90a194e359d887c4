//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use chrono::NaiveDate;
use clap::Parser;

use crate::config::{Config, ConfigSortOrder};
use crate::core::{SortOrder, TimeWindow, parse_time_range};
use crate::error::AppError;
use crate::utils::parse_date;

#[derive(Parser, Debug)]
#[command(name = "stardate")]
#[command(
    about = "Search Stardate transcription files and output their contents",
    version
)]
pub(crate) struct Cli {
    /// Time range to filter files (e.g., "1d", "7d", "1w")
    #[arg(value_name = "TIME_RANGE")]
    pub(crate) time_range: Option<String>,

    /// Include metadata with file dates
    #[arg(long)]
    pub(crate) metadata: bool,

    /// Output the fully qualified path to the directory
    #[arg(long)]
    pub(crate) path: bool,

    /// List all files in the directory
    #[arg(long)]
    pub(crate) ls: bool,

    /// Sort files in reverse chronological order (newest first)
    #[arg(short, long)]
    pub(crate) reverse: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Pretend today is this date (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, hide = true, value_name = "DATE")]
    pub(crate) today: Option<String>,

    #[arg(skip)]
    order_from_config: Option<SortOrder>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.metadata && config.metadata {
            self.metadata = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if self.time_range.is_none() {
            self.time_range.clone_from(&config.range);
        }

        self.order_from_config = config.order.map(|order| match order {
            ConfigSortOrder::Asc => SortOrder::Asc,
            ConfigSortOrder::Desc => SortOrder::Desc,
        });

        self
    }

    pub(crate) fn sort_order(&self) -> SortOrder {
        if self.reverse {
            return SortOrder::Desc;
        }
        self.order_from_config.unwrap_or_default()
    }

    pub(crate) fn window(&self) -> Result<Option<TimeWindow>, AppError> {
        parse_time_range(self.time_range.as_deref())
    }

    /// Start of the current local day, unless overridden with `--today`
    pub(crate) fn reference_day(&self) -> Result<NaiveDate, AppError> {
        match self.today.as_deref() {
            Some(raw) => parse_date(raw),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }
}
