use super::consts::{BALL_DIAMETER, BALL_DX, BALL_DY, BALL_X, BALL_Y};
use super::{Aabb, Bounds, Field};

/// The ball. Speed never changes; only the sign of each component flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    pub diameter: i32,
}

impl Ball {
    pub fn new(x: i32, y: i32, diameter: i32) -> Self {
        Self {
            x,
            y,
            dx: BALL_DX,
            dy: BALL_DY,
            diameter,
        }
    }

    /// Ball at its serve position
    pub fn serve() -> Self {
        Self::new(BALL_X, BALL_Y, BALL_DIAMETER)
    }

    /// Move one tick, then bounce off the side walls and the ceiling.
    /// The bottom edge is open.
    pub fn advance(&mut self, field: Field) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x <= 0 || self.x + self.diameter >= field.width {
            self.dx = -self.dx;
        }
        if self.y <= 0 {
            self.dy = -self.dy;
        }
    }

    pub fn bounce_vertical(&mut self) {
        self.dy = -self.dy;
    }

    pub fn collides_with(&self, other: &impl Bounds) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

impl Bounds for Ball {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.diameter, self.diameter)
    }
}
