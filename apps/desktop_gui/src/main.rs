mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::BellSimApp;

#[derive(Debug, Parser)]
#[command(about = "Desktop viewer for the Bell-state simulation backend")]
struct Args {
    /// Base URL of the simulation server.
    #[arg(long, default_value = "http://127.0.0.1:8443")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bell-State Simulator")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bell-State Simulator",
        options,
        Box::new(move |_cc| Ok(Box::new(BellSimApp::new(cmd_tx, ui_rx, args.server_url)))),
    )
}
