//! Keyboard state for the paddle.
//!
//! The simulation only sees [`InputState`]. [`HeldKeys`] turns terminal key
//! events into those flags. With the kitty keyboard protocol a key is held
//! from press to release; on plain terminals, which only send presses and
//! auto-repeats, a key counts as held for a short window after each event.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Directional flags consumed by the paddle each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hold {
    Up,
    Down,
    Until(Instant),
}

impl Hold {
    fn is_held(&self, now: Instant) -> bool {
        match self {
            Hold::Up => false,
            Hold::Down => true,
            Hold::Until(deadline) => now < *deadline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        }
    }
}

pub struct HeldKeys {
    left: Hold,
    right: Hold,
    /// Terminal reports key releases
    reports_release: bool,
    hold: Duration,
}

impl HeldKeys {
    pub fn new(reports_release: bool, hold: Duration) -> Self {
        Self {
            left: Hold::Up,
            right: Hold::Up,
            reports_release,
            hold,
        }
    }

    /// Record a key event. Returns false if the key is not a direction key.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(direction) = Direction::from_key(key.code) else {
            return false;
        };
        let next = match key.kind {
            KeyEventKind::Release => Hold::Up,
            KeyEventKind::Press | KeyEventKind::Repeat if self.reports_release => Hold::Down,
            KeyEventKind::Press | KeyEventKind::Repeat => Hold::Until(now + self.hold),
        };
        match direction {
            Direction::Left => self.left = next,
            Direction::Right => self.right = next,
        }
        true
    }

    pub fn state(&self, now: Instant) -> InputState {
        InputState {
            left: self.left.is_held(now),
            right: self.right.is_held(now),
        }
    }

    pub fn clear(&mut self) {
        self.left = Hold::Up;
        self.right = Hold::Up;
    }
}
