mod config;
mod error;
mod network;
mod shell;
mod types;
mod ui;

use config::ShellConfig;
use eframe::egui;
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Build mode and install dir are resolved once, before any window exists.
    let config = ShellConfig::from_env();
    let window = config.window_options();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.as_str())
            .with_inner_size([window.width, window.height]),
        ..Default::default()
    };
    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
