//! Session configuration
//!
//! Loaded from a JSON file by the binary; every field has a default so a
//! partial file (or none at all) yields the classic 1080x700 layout.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::state::{Color, Edge};

/// Configuration errors, raised before a session is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("player count must be between 1 and 4, got {0}")]
    PlayerCount(usize),
    #[error("arena dimension `{0}` must be positive")]
    Dimension(&'static str),
}

/// Playfield geometry shared by collision, movement and respawn logic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// HUD band on each guarded edge; paddles and goals sit inside it
    pub hud: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Paddle thickness (the short side of the bar)
    pub bar_thickness: f32,
    pub ball_radius: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            hud: HUD_HEIGHT,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            bar_thickness: BAR_HEIGHT,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl Arena {
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Position of a paddle guarding `edge`, one bar thickness inside the HUD
    pub fn paddle_home(&self, edge: Edge) -> Vec2 {
        let inset = self.hud + self.bar_thickness;
        match edge {
            Edge::Top => Vec2::new(self.center_x(), inset),
            Edge::Bottom => Vec2::new(self.center_x(), self.height - inset),
            Edge::Left => Vec2::new(inset, self.center_y()),
            Edge::Right => Vec2::new(self.width - inset, self.center_y()),
        }
    }

    /// Spawn/respawn point of the ball served toward `edge`'s owner,
    /// three bar thicknesses inside the HUD
    pub fn ball_home(&self, edge: Edge) -> Vec2 {
        let inset = self.hud + 3.0 * self.bar_thickness;
        match edge {
            Edge::Top => Vec2::new(self.center_x(), inset),
            Edge::Bottom => Vec2::new(self.center_x(), self.height - inset),
            Edge::Left => Vec2::new(inset, self.center_y()),
            Edge::Right => Vec2::new(self.width - inset, self.center_y()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("bar_thickness", self.bar_thickness),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in dims {
            if !(value > 0.0) {
                return Err(ConfigError::Dimension(name));
            }
        }
        if self.hud < 0.0 || 2.0 * self.hud >= self.width.min(self.height) {
            return Err(ConfigError::Dimension("hud"));
        }
        Ok(())
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Requested number of players (1 = one human against the AI)
    pub players: usize,
    /// Player names in id order; missing names become "Player N"
    pub names: Vec<String>,
    /// Let the AI drive player 2 in one-player mode
    pub ai_opponent: bool,
    /// Theme tint carried on paddles and balls
    pub theme_color: Color,
    pub arena: Arena,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 2,
            names: Vec::new(),
            ai_opponent: true,
            theme_color: Color::from_rgb8(200, 200, 200),
            arena: Arena::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        self.arena.validate()
    }

    /// Number of player slots in the session (one-player mode seats an opponent)
    pub fn seated_players(&self) -> usize {
        self.players.clamp(2, MAX_PLAYERS)
    }

    /// Whether player 2 is computer-driven
    pub fn ai_enabled(&self) -> bool {
        self.players == 1 && self.ai_opponent
    }

    /// Display name for player `id` (1-based)
    pub fn name_for(&self, id: u8) -> String {
        self.names
            .get(usize::from(id).saturating_sub(1))
            .cloned()
            .unwrap_or_else(|| format!("Player {id}"))
    }
}
