mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context as _;
use backend_bridge::commands::ChannelCommand;
use clap::Parser;
use client_core::DEFAULT_CONNECT_DELAY_MS;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;

#[derive(Debug, Parser)]
#[command(
    name = "hypersteer",
    about = "Hypersteering demo: a slider panel driving a simulated inference channel"
)]
struct Cli {
    /// Simulated connect delay in milliseconds.
    #[arg(long, default_value_t = DEFAULT_CONNECT_DELAY_MS)]
    connect_delay_ms: i64,

    /// Start with auto-send disabled (payloads go out only via "Send now").
    #[arg(long)]
    manual_send: bool,

    /// Tracing filter, e.g. "info" or "client_core=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter.clone())
        .init();

    let auto_send = !cli.manual_send;
    let (cmd_tx, cmd_rx) = bounded::<ChannelCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, cli.connect_delay_ms, auto_send);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hypersteer Demo")
            .with_inner_size([980.0, 660.0])
            .with_min_inner_size([760.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Hypersteer Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::SteerPanelApp::new(cmd_tx, ui_rx, auto_send)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("failed to run the desktop shell")
}
