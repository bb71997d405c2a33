//! Noughts - windowed tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{AppConfig, NoughtsApp};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let app = NoughtsApp::new(&config)?;

    let side = config.window_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side])
            .with_resizable(false)
            .with_title(config.title().as_str()),
        ..Default::default()
    };

    info!(title = %config.title(), side, "Opening window");
    eframe::run_native(
        config.title(),
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {}", e))?;

    info!("Window closed");
    Ok(())
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.seed,
        cli.cell_size,
        cli.human.map(Into::into),
    )?;
    info!(?config, "Configuration ready");
    Ok(config)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,noughts=debug,noughts_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
