//! Gameplay side effects of contacts
//!
//! Collision code decides *that* something was hit; this module decides what
//! the hit does to scores, lives, paddles and ball speed.

use super::state::{Ball, Brick, BrickKind, BrickStatus, Edge, Player, Speed};
use crate::config::Arena;
use crate::consts::*;

/// Brick display category, shared with the texture table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickCategory {
    Ordinary,
    Indestructible,
    /// Even-numbered power-ups (wider bar, extra life, slower ball)
    Bonus,
    /// Odd-numbered power-ups (smaller bar, faster ball)
    Malus,
}

impl BrickCategory {
    pub fn texture_index(self) -> usize {
        match self {
            BrickCategory::Ordinary => 0,
            BrickCategory::Indestructible => 1,
            BrickCategory::Bonus => 2,
            BrickCategory::Malus => 3,
        }
    }
}

/// Classify a brick type for display
pub fn brick_category(kind: BrickKind) -> BrickCategory {
    match kind.index() {
        0 => BrickCategory::Ordinary,
        1 => BrickCategory::Indestructible,
        i if i % 2 == 0 => BrickCategory::Bonus,
        _ => BrickCategory::Malus,
    }
}

/// Apply a brick hit by `ball`, crediting `ball.last_player`.
///
/// Destructible bricks are destroyed in one hit and score. Power-up effects
/// apply whether or not the brick breaks.
pub fn on_brick_hit(brick: &mut Brick, ball: &mut Ball, players: &mut [Player]) {
    let mut attacker = players.iter_mut().find(|p| p.id == ball.last_player);
    if attacker.is_none() {
        log::warn!(
            "Ball {} credited to unknown player {}",
            ball.id,
            ball.last_player
        );
    }

    if brick.kind != BrickKind::Indestructible {
        brick.status = BrickStatus::Destroyed;
        if let Some(player) = attacker.as_deref_mut() {
            player.score += BRICK_SCORE;
        }
    }

    match (brick.kind, attacker) {
        (BrickKind::WiderBar, Some(player)) => {
            player.paddle.size = player.paddle.size.grown();
        }
        (BrickKind::SmallerBar, Some(player)) => {
            player.paddle.size = player.paddle.size.shrunk();
        }
        (BrickKind::AddLife, Some(player)) if player.life < MAX_LIFE => {
            player.life += 1;
        }
        (BrickKind::FasterBall, _) => {
            ball.set_speed(Speed::Fast);
            ball.bonus_timer = BALL_BONUS_TICKS;
        }
        (BrickKind::SlowerBall, _) => {
            ball.set_speed(Speed::Slow);
            ball.bonus_timer = BALL_BONUS_TICKS;
        }
        _ => {}
    }
}

/// Respawn a ball that crossed `edge` and charge the guarding player a life
pub fn on_ball_out_of_bounds(ball: &mut Ball, edge: Edge, arena: &Arena, players: &mut [Player]) {
    ball.pos = arena.ball_home(edge);
    ball.vel = -ball.vel;
    ball.respawn_timer = BALL_RESPAWN_TICKS;

    let owner = edge.owner();
    match players.iter_mut().find(|p| p.id == owner) {
        Some(player) => {
            player.life -= 1;
            ball.last_player = owner;
            log::info!(
                "Ball {} out on {:?}: {} has {} lives left",
                ball.id,
                edge,
                player.name,
                player.life
            );
        }
        None => log::warn!("Ball {} out on unguarded edge {:?}", ball.id, edge),
    }
}
