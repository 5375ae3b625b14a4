use log::debug;

use super::ball::Ball;
use super::consts::{BRICK_COLS, BRICK_GUTTER, BRICK_HEIGHT, BRICK_POINTS, BRICK_ROWS, BRICK_WIDTH};
use super::{Aabb, Bounds};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub row: usize,
    destroyed: bool,
}

impl Brick {
    pub fn new(x: i32, y: i32, width: i32, height: i32, row: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            row,
            destroyed: false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Bounds for Brick {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Grid of bricks in row-major order. Bricks are never removed, only
/// marked destroyed, so a reset restores the same layout.
#[derive(Debug, Clone)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                bricks.push(Brick::new(
                    col as i32 * (BRICK_WIDTH + BRICK_GUTTER),
                    row as i32 * (BRICK_HEIGHT + BRICK_GUTTER),
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                    row,
                ));
            }
        }
        Self { bricks }
    }

    pub fn standard() -> Self {
        Self::new(BRICK_ROWS, BRICK_COLS)
    }

    /// Destroy every live brick the ball overlaps, bouncing once per brick.
    /// Returns the points earned.
    pub fn resolve_hits(&mut self, ball: &mut Ball) -> u32 {
        let mut points = 0;
        for (i, brick) in self.bricks.iter_mut().enumerate() {
            if brick.destroyed || !ball.collides_with(&*brick) {
                continue;
            }
            brick.destroyed = true;
            ball.bounce_vertical();
            points += BRICK_POINTS;
            debug!("brick {} destroyed at ({}, {})", i, brick.x, brick.y);
        }
        points
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }

    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.destroyed = false;
        }
    }

    pub fn alive(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }
}
