//! Collision detection and response for balls against axis-aligned geometry
//!
//! Every rectangle (brick or paddle) is tested only on the edges the ball is
//! travelling toward: a ball moving up can only strike a bottom edge, a ball
//! moving right only a left edge. A ball moving purely along one axis never
//! tests the edges parallel to its motion, so grazing a corner cannot bounce
//! it twice in one tick.

use glam::Vec2;

use super::reaction;
use super::state::{Ball, Brick, BrickGrid, Corners, Edge, Goals, Paddle, Player};
use crate::config::Arena;
use crate::geometry::{distance, distance_to_line, dot, vector_between};

/// Where along a segment the ball made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentContact {
    /// Between the endpoints: flat bounce
    Segment,
    /// Beyond endpoint A, within a radius of it
    CornerA,
    /// Beyond endpoint B, within a radius of it
    CornerB,
}

/// Side of a rectangle that was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Side {
    /// Velocity after bouncing off this side: flat sides invert one axis,
    /// corners invert both
    pub fn bounce(self, vel: Vec2) -> Vec2 {
        match self {
            Side::Top | Side::Bottom => Vec2::new(vel.x, -vel.y),
            Side::Left | Side::Right => Vec2::new(-vel.x, vel.y),
            _ => -vel,
        }
    }
}

/// Whether the ball overlaps the infinite line through `a` and `b`
pub fn ball_line_collision(ball: &Ball, a: Vec2, b: Vec2) -> bool {
    distance_to_line(ball.pos, a, b) < ball.radius
}

/// Classify contact between the ball and segment `ab`.
///
/// The segment test runs before the corner tests, so a ball whose center
/// projects onto the segment (endpoints included) is always a flat hit even
/// if it also overlaps an endpoint.
pub fn ball_segment_collision(ball: &Ball, a: Vec2, b: Vec2) -> Option<SegmentContact> {
    if !ball_line_collision(ball, a, b) {
        return None;
    }
    let ab = vector_between(a, b);
    let from_a = dot(ab, vector_between(a, ball.pos));
    let from_b = -dot(ab, vector_between(b, ball.pos));

    if from_a >= 0.0 && from_b >= 0.0 {
        Some(SegmentContact::Segment)
    } else if distance(ball.pos, a) < ball.radius {
        Some(SegmentContact::CornerA)
    } else if distance(ball.pos, b) < ball.radius {
        Some(SegmentContact::CornerB)
    } else {
        None
    }
}

/// Test the edges of a rectangle facing the ball's direction of travel.
///
/// Vertical motion is tested before horizontal; the first edge hit wins.
pub fn ball_rect_collision(ball: &Ball, rect: &Corners) -> Option<Side> {
    // (travelling toward it?, endpoint A, endpoint B, flat side, corner at A, corner at B)
    let edges = [
        (
            ball.vel.y < 0.0,
            rect.bottom_right,
            rect.bottom_left,
            Side::Bottom,
            Side::BottomRight,
            Side::BottomLeft,
        ),
        (
            ball.vel.y > 0.0,
            rect.top_right,
            rect.top_left,
            Side::Top,
            Side::TopRight,
            Side::TopLeft,
        ),
        (
            ball.vel.x < 0.0,
            rect.bottom_right,
            rect.top_right,
            Side::Right,
            Side::BottomRight,
            Side::TopRight,
        ),
        (
            ball.vel.x > 0.0,
            rect.top_left,
            rect.bottom_left,
            Side::Left,
            Side::TopLeft,
            Side::BottomLeft,
        ),
    ];

    edges
        .into_iter()
        .filter(|&(facing, ..)| facing)
        .find_map(|(_, a, b, flat, corner_a, corner_b)| {
            ball_segment_collision(ball, a, b).map(|contact| match contact {
                SegmentContact::Segment => flat,
                SegmentContact::CornerA => corner_a,
                SegmentContact::CornerB => corner_b,
            })
        })
}

#[inline]
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> Option<Side> {
    ball_rect_collision(ball, &brick.corners)
}

/// Resolve the ball against the grid.
///
/// Scans row-major and stops at the first standing brick hit: the brick
/// reaction runs, the ball bounces, and no other brick is touched this tick.
pub fn ball_grid_collision(grid: &mut BrickGrid, ball: &mut Ball, players: &mut [Player]) -> bool {
    let hit = grid
        .iter_mut()
        .filter(|brick| !brick.is_destroyed())
        .find_map(|brick| ball_brick_collision(ball, brick).map(|side| (brick, side)));

    match hit {
        Some((brick, side)) => {
            log::debug!(
                "Ball {} hit {:?} brick ({}, {}) on {:?}",
                ball.id,
                brick.kind,
                brick.row,
                brick.col,
                side
            );
            reaction::on_brick_hit(brick, ball, players);
            ball.vel = side.bounce(ball.vel);
            true
        }
        None => false,
    }
}

/// Bounce the ball off a paddle and credit the paddle's owner
pub fn ball_paddle_collision(paddle: &Paddle, ball: &mut Ball) -> Option<Side> {
    let side = ball_rect_collision(ball, &paddle.corners())?;
    ball.vel = side.bounce(ball.vel);
    ball.last_player = paddle.player_id;
    log::debug!(
        "Ball {} deflected by player {} on {:?}",
        ball.id,
        paddle.player_id,
        side
    );
    Some(side)
}

/// Check the ball against the screen boundary.
///
/// Wall edges bounce the ball in place (only while it is still heading
/// into the wall). Returns the goal edge the ball crossed, if any; the
/// caller applies the out-of-bounds reaction.
pub fn ball_screen_collision(ball: &mut Ball, arena: &Arena, goals: &Goals) -> Option<Edge> {
    let r = ball.radius;
    let p = ball.pos;

    if (!goals.left && p.x - r <= 0.0 && ball.vel.x < 0.0)
        || (!goals.right && p.x + r >= arena.width && ball.vel.x > 0.0)
    {
        ball.vel.x = -ball.vel.x;
    }
    if (!goals.top && p.y - r <= 0.0 && ball.vel.y < 0.0)
        || (!goals.bottom && p.y + r >= arena.height && ball.vel.y > 0.0)
    {
        ball.vel.y = -ball.vel.y;
    }

    Edge::ALL.into_iter().find(|&edge| {
        goals.is_goal(edge)
            && match edge {
                Edge::Top => p.y - r <= arena.hud,
                Edge::Bottom => p.y + r >= arena.height - arena.hud,
                Edge::Left => p.x - r <= arena.hud,
                Edge::Right => p.x + r >= arena.width - arena.hud,
            }
    })
}
