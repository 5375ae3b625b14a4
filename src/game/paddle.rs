use super::consts::{PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_X, PADDLE_Y};
use super::{Aabb, Bounds, Field};
use crate::input::InputState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed: PADDLE_SPEED,
        }
    }

    pub fn starting() -> Self {
        Self::new(PADDLE_X, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move by the held direction(s), then clamp into the field.
    /// Holding both keys cancels out.
    pub fn advance(&mut self, input: InputState, field: Field) {
        if input.left {
            self.x -= self.speed;
        }
        if input.right {
            self.x += self.speed;
        }
        self.clamp(field);
    }

    pub fn clamp(&mut self, field: Field) {
        let max_x = (field.width - self.width).max(0);
        self.x = self.x.clamp(0, max_x);
    }
}

impl Bounds for Paddle {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}
