use std::path::PathBuf;

use clap::Parser;

use crate::analyzer::{AnalyzerConfig, DEFAULT_SIMILARITY_CUTOFF};
use crate::error::{MealError, Result};

/// Meal analyzer: totals the nutrients of a free-text meal and suggests improvements.
#[derive(Parser, Debug)]
#[command(name = "meal-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on.
    #[arg(short, long, env = "MEAL_ANALYZER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: String,

    /// Nutrition table file (.json or .csv). Uses the bundled table when omitted.
    #[arg(short, long, env = "MEAL_ANALYZER_DATA")]
    pub data: Option<PathBuf>,

    /// Directory with index.html and the page's assets.
    #[arg(long, env = "MEAL_ANALYZER_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Minimum similarity (0 to 1) for a misspelled food to be corrected.
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_CUTOFF)]
    pub cutoff: f64,

    /// Ignore empty items from stray commas instead of reporting them as missing.
    #[arg(long)]
    pub skip_empty_items: bool,
}

impl Cli {
    /// Analyzer settings from the command line, validated.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(MealError::InvalidInput(format!(
                "cutoff must be between 0 and 1, got {}",
                self.cutoff
            )));
        }

        Ok(AnalyzerConfig {
            cutoff: self.cutoff,
            skip_empty_items: self.skip_empty_items,
        })
    }
}
