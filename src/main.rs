use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meal_analyzer_rs::cli::Cli;
use meal_analyzer_rs::error::Result;
use meal_analyzer_rs::reference::{load_table, NutritionTable};
use meal_analyzer_rs::server::{router, serve, AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meal_analyzer_rs=info,tower_http=info")),
        )
        .init();

    let config = cli.analyzer_config()?;

    let table = match &cli.data {
        Some(path) => {
            info!(path = %path.display(), "loading nutrition table");
            load_table(path)?
        }
        None => NutritionTable::builtin(),
    };
    info!(foods = table.len(), cutoff = config.cutoff, "nutrition table ready");

    let state = AppState::new(table, config, &cli.static_dir);
    let listener = TcpListener::bind(&cli.bind).await?;
    serve(listener, router(state)).await
}
