use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod settings;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{PortfolioApp, StartupConfig};
use contact::delivery::DeliveryRoute;
use content::domain::Content;

#[derive(Parser, Debug)]
struct Args {
    /// Content file (TOML); the built-in sample content when omitted.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Form relay endpoint URL; submissions fall back to the mail client
    /// when omitted.
    #[arg(long)]
    contact_endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = settings::resolve(args.content, args.contact_endpoint);

    let content = match &settings.content_path {
        Some(path) => content::loader::load_content(path)
            .with_context(|| format!("loading content from '{}'", path.display()))?,
        None => Content::sample(),
    };

    let route = DeliveryRoute::from_endpoint(settings.contact_endpoint.as_deref())
        .context("invalid contact endpoint URL")?;
    match &route {
        DeliveryRoute::Remote(endpoint) => {
            tracing::info!(%endpoint, "contact submissions go to the form endpoint")
        }
        DeliveryRoute::Mailto => {
            tracing::info!("no contact endpoint configured; submissions open the mail client")
        }
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let startup = StartupConfig { content, route };
    let window_title = format!("{} | Portfolio", startup.content.profile.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title)
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "portfolio_desktop_gui",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell exited with an error: {err}"))
}
