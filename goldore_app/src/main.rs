//! GoldOre window demo
//!
//! Opens an 800x600 window with an OpenGL 3.3 core context and runs a
//! clear-only render loop until the window is closed with escape or the
//! window's close control.

use gold_engine::prelude::*;

/// Clear-only scene: the engine's clear and present are the whole frame
struct ClearOnlyApp;

impl Application for ClearOnlyApp {
    fn create(_engine: &mut Engine) -> Result<Self, EngineError> {
        Ok(Self)
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting GoldOre window demo");

    if let Err(e) = Engine::run::<ClearOnlyApp>(AppConfig::default()) {
        log::error!("Fatal: {e}");
        std::process::exit(-1);
    }

    log::info!("GoldOre window demo finished");
}
