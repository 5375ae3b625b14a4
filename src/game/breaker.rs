use log::info;

use super::{Ball, BrickField, Field, Paddle};
use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Won,
    Lost,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Running => "Running",
            GameState::Won => "Won",
            GameState::Lost => "Lost",
        }
    }
}

/// One game of Brick Breaker: paddle, ball, brick grid, score and state.
pub struct BrickBreaker {
    field: Field,
    paddle: Paddle,
    ball: Ball,
    bricks: BrickField,
    score: u32,
    state: GameState,
    /// Which way the loss screen leans; flips on every loss
    tilt_right: bool,
    tick: u64,
}

impl BrickBreaker {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            paddle: Paddle::starting(),
            ball: Ball::serve(),
            bricks: BrickField::standard(),
            score: 0,
            state: GameState::Running,
            tilt_right: true,
            tick: 0,
        }
    }

    /// Advance the simulation by one tick. Terminal states are frozen.
    pub fn update(&mut self, input: InputState) {
        if self.state != GameState::Running {
            return;
        }
        self.tick += 1;

        self.paddle.advance(input, self.field);
        self.ball.advance(self.field);

        self.score += self.bricks.resolve_hits(&mut self.ball);

        // No positional correction; the ball may sit inside the paddle for a tick
        if self.ball.collides_with(&self.paddle) {
            self.ball.bounce_vertical();
        }

        if self.bricks.is_cleared() {
            self.state = GameState::Won;
            info!("game won at tick {} with score {}", self.tick, self.score);
        } else if self.ball.y > self.field.height {
            self.state = GameState::Lost;
            self.tilt_right = !self.tilt_right;
            info!("game lost at tick {} with score {}", self.tick, self.score);
        }
    }

    /// Back to a fresh round from any state. The paddle stays where it is.
    pub fn restart(&mut self) {
        info!("restart from {} with score {}", self.state.as_str(), self.score);
        self.score = 0;
        self.state = GameState::Running;
        self.bricks.reset();
        self.ball = Ball::serve();
        self.tick = 0;
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &BrickField {
        &self.bricks
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn tilt_right(&self) -> bool {
        self.tilt_right
    }
}
