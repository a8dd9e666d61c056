//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Stable iteration order (by player and ball id, bricks row-major)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod reaction;
pub mod state;
pub mod tick;

pub use collision::{
    SegmentContact, Side, ball_grid_collision, ball_line_collision, ball_paddle_collision,
    ball_rect_collision, ball_screen_collision, ball_segment_collision,
};
pub use reaction::{BrickCategory, brick_category, on_ball_out_of_bounds, on_brick_hit};
pub use state::{
    Ball, BarSize, Brick, BrickGrid, BrickKind, BrickStatus, Color, Corners, Edge, GamePhase,
    GameState, Goals, Orientation, Paddle, Player, Speed,
};
pub use tick::{TickInput, advance_ball, move_paddle, tick};
