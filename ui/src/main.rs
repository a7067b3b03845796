#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use agit_business::DashboardConfig;
use agit_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // egui_winit reports unsupported clipboard formats as errors; they are noise here.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = DashboardConfig::init()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 520.0])
            .with_min_inner_size([720.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agit User Dashboard",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(&config);
            let app = agit_ui::DashboardApp::new(state);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the dashboard: {err}"))
}
