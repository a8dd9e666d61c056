//! Fixed timestep simulation tick
//!
//! One call is one frame: collisions, ball movement and timers, paddles,
//! then the game-over check. Same state plus same inputs gives the same
//! result.

use glam::Vec2;

use super::ai;
use super::collision::{ball_grid_collision, ball_paddle_collision, ball_screen_collision};
use super::reaction::on_ball_out_of_bounds;
use super::state::{Ball, Edge, GamePhase, GameState, Orientation, Paddle, Speed};
use crate::config::Arena;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested paddle direction per player, indexed by `id - 1`
    pub moves: [Option<Edge>; MAX_PLAYERS],
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Input moving a single player's paddle
    pub fn moving(player_id: u8, direction: Edge) -> Self {
        let mut input = Self::default();
        if let Some(slot) = input.moves.get_mut(usize::from(player_id).wrapping_sub(1)) {
            *slot = Some(direction);
        }
        input
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Collisions, for live balls only
    for ball in &mut state.balls {
        if !ball.is_active() {
            continue;
        }
        if let Some(edge) = ball_screen_collision(ball, &state.arena, &state.goals) {
            on_ball_out_of_bounds(ball, edge, &state.arena, &mut state.players);
            continue;
        }
        for player in &state.players {
            ball_paddle_collision(&player.paddle, ball);
        }
        ball_grid_collision(&mut state.grid, ball, &mut state.players);
    }

    // Movement and timers
    for ball in &mut state.balls {
        if ball.is_active() {
            advance_ball(ball);
        } else {
            ball.respawn_timer -= 1;
        }

        if ball.bonus_timer == 0 {
            ball.set_speed(Speed::Normal);
        } else {
            ball.bonus_timer -= 1;
        }
    }

    // Paddles
    for player in &mut state.players {
        if state.ai_players.contains(&player.id) {
            ai::steer(&mut player.paddle, &state.balls, &state.arena);
        } else if let Some(direction) = input
            .moves
            .get(usize::from(player.id).wrapping_sub(1))
            .copied()
            .flatten()
        {
            move_paddle(&mut player.paddle, direction, &state.arena);
        }
        player.paddle.clamp_to(&state.arena);
    }

    if let Some(loser) = state.players.iter().find(|p| !p.is_alive()) {
        log::info!(
            "Game over at tick {}: {} is out of lives",
            state.time_ticks,
            loser.name
        );
        state.phase = GamePhase::GameOver;
    }
}

/// Move a live ball by its velocity
pub fn advance_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Slide a paddle one step toward `direction`.
///
/// Horizontal paddles answer to Left/Right, vertical ones to Top/Bottom;
/// other directions are ignored.
pub fn move_paddle(paddle: &mut Paddle, direction: Edge, arena: &Arena) {
    let step = match (paddle.orientation, direction) {
        (Orientation::Horizontal, Edge::Left) => Vec2::new(-BAR_SPEED, 0.0),
        (Orientation::Horizontal, Edge::Right) => Vec2::new(BAR_SPEED, 0.0),
        (Orientation::Vertical, Edge::Top) => Vec2::new(0.0, -BAR_SPEED),
        (Orientation::Vertical, Edge::Bottom) => Vec2::new(0.0, BAR_SPEED),
        _ => return,
    };
    paddle.center += step;
    paddle.clamp_to(arena);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::level::BrickLayout;
    use crate::sim::state::BrickStatus;

    fn session(players: usize) -> GameState {
        let config = GameConfig {
            players,
            ..Default::default()
        };
        let layout = BrickLayout::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        GameState::new(&config, &layout)
    }

    #[test]
    fn test_tick_pause() {
        let mut state = session(2);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.time_ticks, 0);

        // Paused ticks change nothing
        let before = state.balls[0].respawn_timer;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].respawn_timer, before);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_respawning_ball_is_frozen() {
        let mut state = session(2);
        let start = state.balls[0].pos;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].pos, start);
        assert_eq!(state.balls[0].respawn_timer, BALL_RESPAWN_TICKS - 1);
    }

    #[test]
    fn test_ball_serves_after_respawn_delay() {
        let mut state = session(2);
        let start = state.balls[0].pos;
        for _ in 0..BALL_RESPAWN_TICKS {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.balls[0].is_active());
        assert_eq!(state.balls[0].pos, start);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].pos, start + Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_bonus_decays_to_normal_speed() {
        let mut state = session(2);
        state.balls[0].vel = Vec2::new(-3.0, 3.0);
        state.balls[0].bonus_timer = 2;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].bonus_timer, 1);
        assert_eq!(state.balls[0].vel, Vec2::new(-3.0, 3.0));

        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].bonus_timer, 0);
        assert_eq!(state.balls[0].vel, Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_ball_out_of_top_costs_a_life() {
        let mut state = session(2);
        let ball = &mut state.balls[0];
        ball.respawn_timer = 0;
        ball.pos = Vec2::new(300.0, 75.0);
        ball.vel = Vec2::new(2.0, -2.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.players[0].life, START_LIFE - 1);
        assert_eq!(state.balls[0].pos, state.arena.ball_home(Edge::Top));
        assert_eq!(state.balls[0].respawn_timer, BALL_RESPAWN_TICKS - 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = session(2);
        state.players[1].life = 1;
        let ball = &mut state.balls[1];
        ball.respawn_timer = 0;
        ball.pos = Vec2::new(300.0, 625.0);
        ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.players[1].life, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen from here on, pause included
        let ticks = state.time_ticks;
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut state = session(2);
        let ball = &mut state.balls[0];
        ball.respawn_timer = 0;
        ball.last_player = 2;
        ball.pos = Vec2::new(540.0, 94.0);
        ball.vel = Vec2::new(2.0, -2.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.balls[0].last_player, 1);
        assert_eq!(state.balls[0].pos, Vec2::new(542.0, 96.0));
    }

    #[test]
    fn test_ball_breaks_brick() {
        let mut state = session(2);
        let brick = state.grid.get(0, 0).unwrap().corners;
        let ball = &mut state.balls[0];
        ball.respawn_timer = 0;
        ball.last_player = 1;
        ball.pos = Vec2::new(brick.top_left.x + 20.0, brick.top_left.y - 5.0);
        ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.grid.get(0, 0).unwrap().status, BrickStatus::Destroyed);
        assert_eq!(state.players[0].score, BRICK_SCORE);
        assert_eq!(state.balls[0].vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_move_paddle() {
        let arena = Arena::default();
        let mut top = Paddle::new(1, Edge::Top, &arena);
        move_paddle(&mut top, Edge::Left, &arena);
        assert_eq!(top.center.x, 540.0 - BAR_SPEED);
        move_paddle(&mut top, Edge::Bottom, &arena);
        assert_eq!(top.center, Vec2::new(540.0 - BAR_SPEED, 82.0));

        let mut right = Paddle::new(4, Edge::Right, &arena);
        move_paddle(&mut right, Edge::Bottom, &arena);
        assert_eq!(right.center.y, 350.0 + BAR_SPEED);

        top.center.x = 938.0;
        move_paddle(&mut top, Edge::Right, &arena);
        assert_eq!(top.center.x, 940.0);
    }

    #[test]
    fn test_tick_moves_requested_paddle() {
        let mut state = session(2);
        tick(&mut state, &TickInput::moving(2, Edge::Right));
        assert_eq!(state.players[0].paddle.center.x, 540.0);
        assert_eq!(state.players[1].paddle.center.x, 540.0 + BAR_SPEED);

        // Out-of-range ids are ignored
        let input = TickInput::moving(9, Edge::Right);
        assert!(input.moves.iter().all(Option::is_none));
    }

    #[test]
    fn test_ai_overrides_input() {
        let mut state = session(1);
        assert_eq!(state.ai_players, vec![2]);
        let ball = &mut state.balls[0];
        ball.respawn_timer = 0;
        ball.pos = Vec2::new(800.0, 300.0);
        ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &TickInput::moving(2, Edge::Left));
        assert_eq!(state.players[1].paddle.center.x, 540.0 + BAR_SPEED);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = session(4);
        let mut state2 = session(4);

        let inputs = [
            TickInput::moving(1, Edge::Left),
            TickInput::moving(3, Edge::Bottom),
            TickInput::default(),
            TickInput::moving(2, Edge::Right),
        ];

        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        for (a, b) in state1.balls.iter().zip(&state2.balls) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
        for (a, b) in state1.players.iter().zip(&state2.players) {
            assert_eq!(a.paddle.center, b.paddle.center);
            assert_eq!((a.life, a.score), (b.life, b.score));
        }
    }

    #[test]
    fn test_long_run_invariants() {
        let mut state = session(4);
        state.ai_players = vec![1, 2, 3, 4];

        for _ in 0..5000 {
            tick(&mut state, &TickInput::default());
            for ball in &state.balls {
                for v in [ball.vel.x, ball.vel.y] {
                    assert!([1.0, 2.0, 3.0].contains(&v.abs()), "speed {v}");
                }
            }
            for player in &state.players {
                let half = player.paddle.size.length() / 2.0;
                let (pos, extent) = match player.paddle.orientation {
                    Orientation::Horizontal => (player.paddle.center.x, state.arena.width),
                    Orientation::Vertical => (player.paddle.center.y, state.arena.height),
                };
                assert!(pos >= state.arena.hud + half && pos <= extent - state.arena.hud - half);
                assert!(player.life <= MAX_LIFE);
                assert_eq!(player.score % BRICK_SCORE, 0);
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }
}
