//! KassPong entry point
//!
//! Headless runner: loads a level (and optionally a JSON config), lets the
//! AI drive every paddle and prints the standings once a player runs out of
//! lives or the tick limit is hit.
//!
//! Usage: `kass-pong <level> [config.json] [max-ticks]`

#[cfg(not(target_arch = "wasm32"))]
use kass_pong::sim::{GamePhase, GameState, TickInput, tick};
#[cfg(not(target_arch = "wasm32"))]
use kass_pong::{BrickLayout, GameConfig, Standings};

/// Default tick limit, about ten minutes at 60 ticks per second
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_TICKS: u64 = 36_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("KassPong (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(level_path) = args.first() else {
        eprintln!("usage: kass-pong <level> [config.json] [max-ticks]");
        std::process::exit(2);
    };

    let layout = match BrickLayout::load(level_path) {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Failed to load level {}: {}", level_path, e);
            std::process::exit(1);
        }
    };

    let config = match args.get(1) {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let max_ticks = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid tick limit: {}", e);
            std::process::exit(1);
        }
        None => DEFAULT_MAX_TICKS,
    };

    let mut state = GameState::new(&config, &layout);
    state.ai_players = state.players.iter().map(|p| p.id).collect();

    let input = TickInput::default();
    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        tick(&mut state, &input);
    }
    log::info!(
        "Stopped after {} ticks, {} bricks left",
        state.time_ticks,
        state.grid.remaining()
    );

    let standings = Standings::from_players(&state.players);
    for line in standings.lines() {
        println!("{line}");
    }
    if let Some(winner) = standings.winner() {
        println!("Winner: {}", winner.name);
    }
    match serde_json::to_string_pretty(&standings) {
        Ok(json) => log::debug!("Standings: {}", json),
        Err(e) => log::warn!("Failed to serialize standings: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the wasm surface; there is no browser runner
}
