use clap::Parser;
use std::path::PathBuf;

use crate::summary::SortKey;

/// Command-line arguments for trendview
#[derive(Parser, Debug)]
#[command(version, about = "trendview")]
pub struct Args {
    /// History payload file: one series object or an array of them
    pub path: PathBuf,

    /// Slot id the chart is built for
    #[arg(long = "slot", default_value = "chart")]
    pub slot: String,

    /// Build one combined chart across all groups instead of a chart for
    /// the first series
    #[arg(long = "combined", action)]
    pub combined: bool,

    /// Sort the summary table by this column
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long = "desc", action)]
    pub desc: bool,

    /// Print the chart model as JSON instead of a text report
    #[arg(long = "json", action)]
    pub json: bool,
}
