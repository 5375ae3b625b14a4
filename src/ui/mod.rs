pub mod playfield;
pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::GameState;

pub fn render(frame: &mut Frame, app: &App) {
    let game = &app.game;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 Brick Breaker ")
        .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Field
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    render_status(frame, app, chunks[0]);

    match game.state() {
        GameState::Running => {
            let lines = playfield::lines(game, chunks[1].width as usize, chunks[1].height as usize);
            frame.render_widget(Paragraph::new(lines), chunks[1]);
        }
        GameState::Won => screens::render_won(frame, chunks[1], game.score()),
        GameState::Lost => screens::render_lost(
            frame,
            chunks[1],
            game.score(),
            game.tilt_right(),
            app.settings.restart_key,
        ),
    }

    render_help(frame, app, chunks[2]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let state_color = match game.state() {
        GameState::Running => Color::Cyan,
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
    };
    let status = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", game.score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Bricks: {}/{} ", game.bricks().alive_count(), game.bricks().len()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(game.state().as_str(), Style::default().fg(state_color)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let restart = app.settings.restart_key.to_ascii_uppercase();
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ←→ Move Paddle ", Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled(format!("{} Restart ", restart), Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}
