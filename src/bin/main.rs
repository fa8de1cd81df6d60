use std::process::ExitCode;

use fragrance_core::{
    app::App,
    config::{AppConfig, AppMode},
    runner,
};
use fragrance_hal_host::{
    input::key_channel,
    platform::{BrowserLauncher, HostDisplay, SimulatorPresenter, VBlankPacer},
};
use log::{error, info};

#[path = "main/logging.rs"]
mod logging;

fn app_config() -> AppConfig {
    if cfg!(feature = "launcher-mode") {
        AppConfig::default().with_mode(AppMode::Launcher)
    } else {
        AppConfig::default()
    }
}

fn main() -> ExitCode {
    logging::init();

    let config = app_config();
    info!(
        "boot: {} mode={:?} url={}",
        config.title, config.mode, config.url
    );

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(err) => {
            error!("boot: invalid recipe: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (keys, mut input) = key_channel();
    let mut display = HostDisplay::new(SimulatorPresenter::new(config.title, keys));
    let mut pacer = VBlankPacer::new();
    let mut launcher = BrowserLauncher::new();

    match runner::run(&mut app, &mut input, &mut display, &mut pacer, &mut launcher) {
        Ok(summary) => {
            info!(
                "exit: ticks={} input_errors={} present_errors={} overruns={}",
                summary.ticks,
                summary.input_errors,
                summary.present_errors,
                pacer.overruns()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("exit: {}", err);
            ExitCode::FAILURE
        }
    }
}
