use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{BrickBreaker, Field};
use crate::input::HeldKeys;
use crate::settings::Settings;

pub struct App {
    pub should_quit: bool,
    pub game: BrickBreaker,
    pub settings: Settings,
    keys: HeldKeys,
}

impl App {
    pub fn new(settings: Settings, reports_release: bool) -> Self {
        let keys = HeldKeys::new(reports_release, Duration::from_millis(settings.key_hold_ms));
        Self {
            should_quit: false,
            game: BrickBreaker::new(Field::default()),
            settings,
            keys,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.game.update(self.keys.state(now));
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if self.keys.on_key(key, now) {
            return;
        }
        // Everything else is edge-triggered
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if self.settings.is_restart_key(c) => {
                self.keys.clear();
                self.game.restart();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(Settings::default(), true)
    }

    fn lose(app: &mut App, now: Instant) {
        while app.game.state() == GameState::Running {
            app.on_tick(now);
        }
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let now = Instant::now();
        let mut app = app();
        app.on_key(key(KeyCode::Left, KeyEventKind::Press), now);
        app.on_tick(now);
        app.on_tick(now);
        assert_eq!(app.game.paddle().x, 334);

        app.on_key(key(KeyCode::Left, KeyEventKind::Release), now);
        app.on_tick(now);
        assert_eq!(app.game.paddle().x, 334);
    }

    #[test]
    fn test_restart_key_press() {
        let now = Instant::now();
        let mut app = app();
        lose(&mut app, now);
        assert_ne!(app.game.state(), GameState::Running);

        app.on_key(key(KeyCode::Char('K'), KeyEventKind::Press), now);
        assert_eq!(app.game.state(), GameState::Running);
        assert_eq!(app.game.score(), 0);
    }

    #[test]
    fn test_restart_ignores_repeat_and_release() {
        let now = Instant::now();
        let mut app = app();
        lose(&mut app, now);
        let state = app.game.state();

        app.on_key(key(KeyCode::Char('k'), KeyEventKind::Repeat), now);
        app.on_key(key(KeyCode::Char('k'), KeyEventKind::Release), now);
        assert_eq!(app.game.state(), state);
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            app.on_key(key(code, KeyEventKind::Press), now);
            assert!(app.should_quit);
        }

        let mut app = app();
        let mut ctrl_c = key(KeyCode::Char('c'), KeyEventKind::Press);
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        app.on_key(ctrl_c, now);
        assert!(app.should_quit);
    }
}
