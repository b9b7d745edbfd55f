mod actor;
mod app;
mod config;
mod debug;
mod ecs;
mod error;
mod game;
mod maze;
mod mode;
mod render;

use config::Tuning;

fn main() {
    env_logger::init();
    log::info!("mazechase starting up");

    let result = Tuning::from_args().and_then(app::run);
    if let Err(e) = result {
        log::error!("Fatal error: {e}");
        eprintln!("mazechase: {e}");
        std::process::exit(1);
    }
}
