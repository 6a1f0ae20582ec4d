use std::env;

use anyhow::Context;
use libgame::{Game, config::LifeConfig};

mod cli;
mod renderer;

fn main() -> anyhow::Result<()> {
    // Info by default, RUST_LOG overrides. GPU backends are noisy.
    let default_filter = "info,wgpu_hal=off,wgpu_core=off,wgpu=off,naga=off";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .try_init();

    let mut headless = false;
    let mut config_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--headless" => headless = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(config_path) => LifeConfig::load(&config_path)
            .with_context(|| format!("Loading config {config_path}"))?,
        None => LifeConfig::default(),
    };

    let game = Game::from_config(&config);
    log::info!(
        "{}x{} board, {} fps, period {}",
        game.board.width(),
        game.board.height(),
        config.target_fps,
        game.scheduler.period()
    );

    if headless {
        cli::run_cli(game, &config)
    } else {
        renderer::run(game, config)
    }
}
