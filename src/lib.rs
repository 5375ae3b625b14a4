//! Brick Breaker - a terminal paddle-and-ball game
//!
//! - `game`: the simulation (geometry, ball, paddle, bricks, game loop)
//! - `input`: held-key tracking for the paddle
//! - `settings`: JSON settings
//! - `ui`: ratatui rendering
//! - `app`, `event`: wiring between the terminal and the game

pub mod app;
pub mod event;
pub mod game;
pub mod input;
pub mod settings;
pub mod ui;
