mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{
    config::{load_settings, normalize_api_base_url},
    HttpBookStore, StoreCommand,
};
use crossbeam_channel::{bounded, unbounded};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{controller::events::UiEvent, ui::CatalogApp};

#[derive(Parser, Debug)]
#[command(about = "Book catalog desktop screen")]
struct Args {
    /// Catalog API base url; overrides catalog.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let api_base_url =
        normalize_api_base_url(args.api_url.as_deref().unwrap_or(&settings.api_base_url))?;
    tracing::info!(%api_base_url, "starting catalog screen");

    let (cmd_tx, cmd_rx) = bounded::<StoreCommand>(256);
    let (ui_tx, ui_rx) = unbounded::<UiEvent>();
    backend_bridge::runtime::launch(HttpBookStore::new(api_base_url), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Book Catalog")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Book Catalog",
        options,
        Box::new(|_cc| Ok(Box::new(CatalogApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("catalog window failed: {err}"))
}
