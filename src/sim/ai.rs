//! Computer-driven paddle
//!
//! Follows the most threatening live ball along the paddle's axis at human
//! paddle speed.

use std::cmp::Ordering;

use super::state::{Ball, Edge, Orientation, Paddle};
use crate::config::Arena;
use crate::consts::BAR_SPEED;

/// Threat score of `ball` for the paddle guarding `edge`. Higher is worse.
///
/// A ball heading for the edge scores its progress across the field; a ball
/// heading away scores the negation.
pub fn threat(ball: &Ball, edge: Edge, arena: &Arena) -> f32 {
    let (approaching, progress) = match edge {
        Edge::Top => (ball.vel.y < 0.0, arena.height - ball.pos.y),
        Edge::Bottom => (ball.vel.y > 0.0, ball.pos.y),
        Edge::Left => (ball.vel.x < 0.0, arena.width - ball.pos.x),
        Edge::Right => (ball.vel.x > 0.0, ball.pos.x),
    };
    if approaching { progress } else { -progress }
}

/// Pick the ball the paddle guarding `edge` should follow
pub fn pick_target<'a>(balls: &'a [Ball], edge: Edge, arena: &Arena) -> Option<&'a Ball> {
    balls.iter().filter(|b| b.is_active()).max_by(|a, b| {
        threat(a, edge, arena)
            .partial_cmp(&threat(b, edge, arena))
            .unwrap_or(Ordering::Equal)
    })
}

/// Move `paddle` one step toward the target ball. Idle when no ball is live.
pub fn steer(paddle: &mut Paddle, balls: &[Ball], arena: &Arena) {
    let Some(edge) = Edge::of_player(paddle.player_id) else {
        return;
    };
    let Some(ball) = pick_target(balls, edge, arena) else {
        return;
    };

    let (axis, goal) = match paddle.orientation {
        Orientation::Horizontal => (&mut paddle.center.x, ball.pos.x),
        Orientation::Vertical => (&mut paddle.center.y, ball.pos.y),
    };
    *axis += (goal - *axis).clamp(-BAR_SPEED, BAR_SPEED);
    paddle.clamp_to(arena);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn live_ball(id: u8, pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(id, pos, vel, 7.0);
        ball.respawn_timer = 0;
        ball
    }

    #[test]
    fn test_threat_matches_heading() {
        let arena = Arena::default();
        let incoming = live_ball(1, Vec2::new(100.0, 500.0), Vec2::new(2.0, 2.0));
        let leaving = live_ball(2, Vec2::new(100.0, 500.0), Vec2::new(2.0, -2.0));
        assert_eq!(threat(&incoming, Edge::Bottom, &arena), 500.0);
        assert_eq!(threat(&leaving, Edge::Bottom, &arena), -500.0);
        assert_eq!(threat(&leaving, Edge::Top, &arena), 200.0);
        assert_eq!(threat(&incoming, Edge::Right, &arena), 100.0);
    }

    #[test]
    fn test_pick_target_skips_respawning() {
        let arena = Arena::default();
        let mut frozen = live_ball(1, Vec2::new(300.0, 600.0), Vec2::new(2.0, 2.0));
        frozen.respawn_timer = 10;
        let live = live_ball(2, Vec2::new(800.0, 300.0), Vec2::new(2.0, 2.0));
        let far = live_ball(3, Vec2::new(200.0, 200.0), Vec2::new(2.0, 2.0));
        let balls = [frozen, live, far];

        let target = pick_target(&balls, Edge::Bottom, &arena).unwrap();
        assert_eq!(target.id, 2);
        assert!(pick_target(&balls[..1], Edge::Bottom, &arena).is_none());
    }

    #[test]
    fn test_steer_is_speed_limited() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(2, Edge::Bottom, &arena);
        let balls = [live_ball(1, Vec2::new(700.0, 400.0), Vec2::new(2.0, 2.0))];

        steer(&mut paddle, &balls, &arena);
        assert_eq!(paddle.center.x, 540.0 + BAR_SPEED);

        let balls = [live_ball(1, Vec2::new(545.0, 400.0), Vec2::new(2.0, 2.0))];
        steer(&mut paddle, &balls, &arena);
        assert_eq!(paddle.center.x, 545.0);
    }

    #[test]
    fn test_steer_vertical_paddle() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(3, Edge::Left, &arena);
        let balls = [live_ball(1, Vec2::new(200.0, 100.0), Vec2::new(-2.0, -2.0))];
        steer(&mut paddle, &balls, &arena);
        assert_eq!(paddle.center, Vec2::new(82.0, 350.0 - BAR_SPEED));
    }

    #[test]
    fn test_steer_idle_without_live_ball() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(2, Edge::Bottom, &arena);
        let balls = [Ball::new(1, Vec2::new(100.0, 100.0), Vec2::new(2.0, 2.0), 7.0)];
        steer(&mut paddle, &balls, &arena);
        assert_eq!(paddle.center, arena.paddle_home(Edge::Bottom));
    }

    #[test]
    fn test_steer_respects_bounds() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(2, Edge::Bottom, &arena);
        paddle.center.x = 141.0;
        let balls = [live_ball(1, Vec2::new(10.0, 400.0), Vec2::new(-2.0, 2.0))];
        steer(&mut paddle, &balls, &arena);
        assert_eq!(paddle.center.x, 140.0);
    }
}
