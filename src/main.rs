use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use brick_breaker::app::App;
use brick_breaker::event::{Event, EventHandler};
use brick_breaker::settings::Settings;
use brick_breaker::ui;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> anyhow::Result<()> {
    let (settings, source) = Settings::load();
    init_logging(&settings);
    source.log();
    log::info!("brick-breaker starting, tick {}ms", settings.tick_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::debug!("key release events: {}", reports_release);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, settings, reports_release);

    // Restore terminal
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("brick-breaker exiting");
    result
}

fn run(terminal: &mut Tui, settings: Settings, reports_release: bool) -> anyhow::Result<()> {
    let event_handler = EventHandler::new(Duration::from_millis(settings.tick_ms));
    let mut app = App::new(settings, reports_release);

    loop {
        match event_handler.next()? {
            Event::Tick => {
                app.on_tick(Instant::now());
                terminal.draw(|frame| ui::render(frame, &app))?;
            }
            Event::Key(key) => app.on_key(key, Instant::now()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// The terminal belongs to the UI, so log lines go to a file instead.
fn init_logging(settings: &Settings) {
    let file = match File::create(&settings.log_file) {
        Ok(file) => file,
        Err(_) => return,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
