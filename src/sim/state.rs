//! Game state and core simulation types
//!
//! The session owns every entity; collision and reaction code borrows them
//! mutably for the duration of a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{Arena, GameConfig};
use crate::consts::*;
use crate::level::BrickLayout;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// A player ran out of lives
    GameOver,
}

/// Signed speed tiers; each velocity axis holds ±tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    /// Pixels per tick
    pub fn value(self) -> f32 {
        match self {
            Speed::Slow => 1.0,
            Speed::Normal => 2.0,
            Speed::Fast => 3.0,
        }
    }
}

/// Screen edges. Each one is guarded by a fixed player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Id of the player guarding this edge
    pub fn owner(self) -> u8 {
        match self {
            Edge::Top => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
            Edge::Right => 4,
        }
    }

    /// Edge guarded by player `id` (1-based)
    pub fn of_player(id: u8) -> Option<Edge> {
        match id {
            1 => Some(Edge::Top),
            2 => Some(Edge::Bottom),
            3 => Some(Edge::Left),
            4 => Some(Edge::Right),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Which screen edges are goals (lose a life) rather than walls (bounce).
///
/// Top and bottom are always guarded; left and right only once a third
/// and fourth player join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Goals {
    pub fn for_players(count: usize) -> Self {
        Self {
            top: true,
            bottom: true,
            left: count >= 3,
            right: count >= 4,
        }
    }

    pub fn is_goal(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

/// Normalized RGB color. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }
}

/// The four corners of an axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Corners {
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            top_left,
            top_right: top_left + Vec2::new(size.x, 0.0),
            bottom_left: top_left + Vec2::new(0.0, size.y),
            bottom_right: top_left + size,
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::from_top_left(center - half_extents, half_extents * 2.0)
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u8,
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left frozen after a respawn (0 = active)
    pub respawn_timer: u32,
    /// Ticks left under a speed power-up (0 = normal speed)
    pub bonus_timer: u32,
    /// Player credited for the next brick hit (1-based)
    pub last_player: u8,
    pub color: Color,
}

impl Ball {
    /// New ball, frozen for one respawn period so players can get ready
    pub fn new(id: u8, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        assert!(radius > 0.0, "ball radius must be positive");
        Self {
            id,
            radius,
            pos,
            vel,
            respawn_timer: BALL_RESPAWN_TICKS,
            bonus_timer: 0,
            last_player: id,
            color: Color::from_rgb8(255, 255, 255),
        }
    }

    /// Movable and collidable
    pub fn is_active(&self) -> bool {
        self.respawn_timer == 0
    }

    /// Set both axes to `speed`, keeping direction. A zero axis becomes positive.
    pub fn set_speed(&mut self, speed: Speed) {
        let s = speed.value();
        self.vel.x = if self.vel.x < 0.0 { -s } else { s };
        self.vel.y = if self.vel.y < 0.0 { -s } else { s };
    }
}

/// Paddle length tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarSize {
    Small,
    Basic,
    Large,
}

impl BarSize {
    /// Paddle length in pixels
    pub fn length(self) -> f32 {
        match self {
            BarSize::Small => 100.0,
            BarSize::Basic => 140.0,
            BarSize::Large => 180.0,
        }
    }

    /// One tier up, saturating at Large
    pub fn grown(self) -> Self {
        match self {
            BarSize::Small => BarSize::Basic,
            BarSize::Basic | BarSize::Large => BarSize::Large,
        }
    }

    /// One tier down, saturating at Small
    pub fn shrunk(self) -> Self {
        match self {
            BarSize::Large => BarSize::Basic,
            BarSize::Basic | BarSize::Small => BarSize::Small,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Guards the top or bottom edge, slides along x
    Horizontal,
    /// Guards the left or right edge, slides along y
    Vertical,
}

/// A player's paddle ("bar")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub player_id: u8,
    pub size: BarSize,
    pub center: Vec2,
    pub orientation: Orientation,
    pub thickness: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(player_id: u8, edge: Edge, arena: &Arena) -> Self {
        let orientation = if edge.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Self {
            player_id,
            size: BarSize::Basic,
            center: arena.paddle_home(edge),
            orientation,
            thickness: arena.bar_thickness,
            color: Color::from_rgb8(255, 255, 255),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        let half_len = self.size.length() / 2.0;
        let half_thick = self.thickness / 2.0;
        match self.orientation {
            Orientation::Horizontal => Vec2::new(half_len, half_thick),
            Orientation::Vertical => Vec2::new(half_thick, half_len),
        }
    }

    pub fn corners(&self) -> Corners {
        Corners::from_center(self.center, self.half_extents())
    }

    /// Keep the paddle inside the playfield, outside the HUD bands
    pub fn clamp_to(&mut self, arena: &Arena) {
        let half_len = self.size.length() / 2.0;
        let (axis, extent) = match self.orientation {
            Orientation::Horizontal => (&mut self.center.x, arena.width),
            Orientation::Vertical => (&mut self.center.y, arena.height),
        };
        let lo = arena.hud + half_len;
        let hi = extent - arena.hud - half_len;
        *axis = if lo > hi { extent / 2.0 } else { (*axis).clamp(lo, hi) };
    }
}

/// Brick types, numbered as in level files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Ordinary,
    Indestructible,
    WiderBar,
    SmallerBar,
    AddLife,
    FasterBall,
    SlowerBall,
}

impl BrickKind {
    pub fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => BrickKind::Ordinary,
            1 => BrickKind::Indestructible,
            2 => BrickKind::WiderBar,
            3 => BrickKind::SmallerBar,
            4 => BrickKind::AddLife,
            5 => BrickKind::FasterBall,
            6 => BrickKind::SlowerBall,
            _ => return None,
        })
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Brick lifecycle. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BrickStatus {
    Pristine,
    /// Reserved; no hit currently produces it
    Damaged,
    Destroyed,
}

/// A brick cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub kind: BrickKind,
    pub status: BrickStatus,
    pub row: usize,
    pub col: usize,
    pub corners: Corners,
}

impl Brick {
    pub fn is_destroyed(&self) -> bool {
        self.status == BrickStatus::Destroyed
    }
}

/// Row-major brick matrix, fixed size for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    width: usize,
    height: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build pristine bricks from a validated layout and place them
    pub fn from_layout(layout: &BrickLayout, arena: &Arena) -> Self {
        let mut bricks = Vec::with_capacity(layout.width * layout.height);
        for row in 0..layout.height {
            for col in 0..layout.width {
                bricks.push(Brick {
                    kind: layout.kind_at(row, col),
                    status: BrickStatus::Pristine,
                    row,
                    col,
                    corners: Corners::from_top_left(Vec2::ZERO, Vec2::ZERO),
                });
            }
        }
        let mut grid = Self {
            width: layout.width,
            height: layout.height,
            bricks,
        };
        grid.relayout(arena);
        grid
    }

    /// Recompute brick corners, centering the grid on the screen
    pub fn relayout(&mut self, arena: &Arena) {
        let size = Vec2::new(arena.brick_width, arena.brick_height);
        let span = size * Vec2::new(self.width as f32, self.height as f32);
        let origin = Vec2::new(arena.center_x(), arena.center_y()) - span / 2.0;
        for brick in &mut self.bricks {
            let top_left = origin + size * Vec2::new(brick.col as f32, brick.row as f32);
            brick.corners = Corners::from_top_left(top_left, size);
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row < self.height && col < self.width {
            self.bricks.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        if row < self.height && col < self.width {
            self.bricks.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// Bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Destructible bricks still standing
    pub fn remaining(&self) -> usize {
        self.iter()
            .filter(|b| !b.is_destroyed() && b.kind != BrickKind::Indestructible)
            .count()
    }
}

/// A player slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// 1-based, also the index of the guarded edge
    pub id: u8,
    pub name: String,
    pub paddle: Paddle,
    pub life: i32,
    /// Reserved; nothing reads it yet
    pub immune: bool,
    pub score: u32,
}

impl Player {
    pub fn new(id: u8, name: String, arena: &Arena) -> Self {
        let edge = Edge::of_player(id).unwrap_or(Edge::Top);
        // Nine lives for the cat
        let life = if name == "cat" { MAX_LIFE } else { START_LIFE };
        Self {
            id,
            name,
            paddle: Paddle::new(id, edge, arena),
            life,
            immune: false,
            score: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Complete session state, owned by the frame driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub goals: Goals,
    pub players: Vec<Player>,
    /// One ball per player slot, sorted by id
    pub balls: Vec<Ball>,
    pub grid: BrickGrid,
    /// Players driven by the AI
    pub ai_players: Vec<u8>,
    pub phase: GamePhase,
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(config: &GameConfig, layout: &BrickLayout) -> Self {
        let arena = config.arena;
        let seats = config.seated_players();
        let normal = Speed::Normal.value();

        let mut players = Vec::with_capacity(seats);
        let mut balls = Vec::with_capacity(seats);
        for id in 1..=seats as u8 {
            let edge = Edge::of_player(id).unwrap_or(Edge::Top);
            let mut player = Player::new(id, config.name_for(id), &arena);
            player.paddle.color = config.theme_color;
            players.push(player);

            // Every ball starts heading away from its owner's edge
            let vel = match edge {
                Edge::Top => Vec2::new(normal, normal),
                Edge::Bottom => Vec2::new(-normal, -normal),
                Edge::Left => Vec2::new(normal, -normal),
                Edge::Right => Vec2::new(-normal, normal),
            };
            let mut ball = Ball::new(id, arena.ball_home(edge), vel, arena.ball_radius);
            ball.color = config.theme_color;
            balls.push(ball);
        }

        let ai_players = if config.ai_enabled() { vec![2] } else { Vec::new() };
        log::info!(
            "New session: {} players, {}x{} grid, ai={:?}",
            seats,
            layout.width,
            layout.height,
            ai_players
        );

        Self {
            arena,
            goals: Goals::for_players(seats),
            players,
            balls,
            grid: BrickGrid::from_layout(layout, &arena),
            ai_players,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }
}
