//! Vector Pong entry point
//!
//! Sets up logging and settings, then hands over to the SDL2 frontend.
//! Exits non-zero if the window, renderer or font cannot be brought up.

use std::process::ExitCode;

use vector_pong::Settings;
use vector_pong::platform::sdl;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Vector Pong starting...");

    let settings = Settings::load();

    match sdl::run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to initialize: {}", e);
            ExitCode::FAILURE
        }
    }
}
