//! KassPong - a 2 to 4 player Breakout/Pong hybrid
//!
//! Core modules:
//! - `geometry`: Vector/point primitives over `glam::Vec2`
//! - `sim`: Deterministic simulation (entities, collisions, reactions, AI, tick)
//! - `config`: Session configuration (players, arena geometry)
//! - `level`: Brick-type matrix loading
//! - `scoreboard`: End-of-match standings

pub mod config;
pub mod geometry;
pub mod level;
pub mod scoreboard;
pub mod sim;

pub use config::{Arena, ConfigError, GameConfig};
pub use level::{BrickLayout, LevelError};
pub use scoreboard::Standings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;
    /// HUD band reserved on each guarded edge
    pub const HUD_HEIGHT: f32 = 70.0;

    /// Brick cell size
    pub const BRICK_WIDTH: f32 = 62.0;
    pub const BRICK_HEIGHT: f32 = 32.0;
    /// Largest brick matrix accepted from a level file
    pub const MAX_GRID_WIDTH: usize = 15;
    pub const MAX_GRID_HEIGHT: usize = 9;

    /// Paddle thickness and per-tick travel
    pub const BAR_HEIGHT: f32 = 12.0;
    pub const BAR_SPEED: f32 = 4.0;

    pub const BALL_RADIUS: f32 = 7.0;

    /// Lives at session start, and the cap for ADD_LIFE bricks
    pub const START_LIFE: i32 = 3;
    pub const MAX_LIFE: i32 = 9;
    /// Score awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;

    /// Ticks a ball stays frozen after leaving the playfield
    pub const BALL_RESPAWN_TICKS: u32 = 100;
    /// Ticks a speed power-up lasts
    pub const BALL_BONUS_TICKS: u32 = 600;

    pub const MAX_PLAYERS: usize = 4;
}
