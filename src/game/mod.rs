//! Brick Breaker simulation
//!
//! Everything here is pure game state: no terminal, no clock. The UI reads
//! it once per frame and the app feeds it input flags once per tick.

pub mod ball;
pub mod breaker;
pub mod bricks;
pub mod geometry;
pub mod paddle;

pub use ball::Ball;
pub use breaker::{BrickBreaker, GameState};
pub use bricks::{Brick, BrickField};
pub use geometry::{GeometryError, Polygon, Vector2};
pub use paddle::Paddle;

/// Field dimensions and starting layout
pub mod consts {
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    pub const PADDLE_X: i32 = 350;
    pub const PADDLE_Y: i32 = 550;
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_SPEED: i32 = 8;

    pub const BALL_X: i32 = 400;
    pub const BALL_Y: i32 = 400;
    pub const BALL_DIAMETER: i32 = 15;
    pub const BALL_DX: i32 = 6;
    pub const BALL_DY: i32 = -6;

    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: i32 = 75;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_GUTTER: i32 = 5;
    pub const BRICK_POINTS: u32 = 100;
}

/// Bounds of the play field, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: consts::FIELD_WIDTH,
            height: consts::FIELD_HEIGHT,
        }
    }
}

/// Axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Anything the ball can collide with
pub trait Bounds {
    fn bounds(&self) -> Aabb;
}

impl Bounds for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}
