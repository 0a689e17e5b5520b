use std::path::PathBuf;
use std::sync::Arc;

use crate::analyzer::AnalyzerConfig;
use crate::reference::NutritionTable;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<NutritionTable>,
    pub config: Arc<AnalyzerConfig>,
    /// Directory holding `index.html` and the page's assets.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        table: NutritionTable,
        config: AnalyzerConfig,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
            static_dir: static_dir.into(),
        }
    }
}
