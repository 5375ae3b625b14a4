//! End-of-game screens. The loss message is drawn on a slope whose
//! direction alternates from one loss to the next.

use ratatui::prelude::*;
use ratatui::layout::Position;
use ratatui::widgets::*;

const TILT_DEGREES: f64 = 15.0;
/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 0.5;

pub fn render_won(frame: &mut Frame, area: Rect, score: u32) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You Win! Score: {}", score),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let y = area.y + area.height / 2;
    let msg_area = Rect::new(area.x, y.saturating_sub(1), area.width, 2.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), msg_area);
}

pub fn render_lost(frame: &mut Frame, area: Rect, score: u32, tilt_right: bool, restart_key: char) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let message = format!("Game Over! Score: {}", score);
    let center = (
        area.x as i32 + area.width as i32 / 2,
        area.y as i32 + area.height as i32 / 2,
    );
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);

    let buf = frame.buffer_mut();
    for ((x, y), ch) in tilt_positions(message.chars().count(), center, tilt_right)
        .into_iter()
        .zip(message.chars())
    {
        if x >= 0 && y >= 0 && area.contains(Position::new(x as u16, y as u16)) {
            buf.set_string(x as u16, y as u16, ch.to_string(), style);
        }
    }

    let hint = format!("Press '{}' to Keep Going", restart_key.to_ascii_uppercase());
    let hint_y = (center.1 + 4).min(area.bottom() as i32 - 1) as u16;
    let hint_area = Rect::new(area.x, hint_y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray))).alignment(Alignment::Center),
        hint_area,
    );
}

/// Cell for each character of a `len`-character line centered on `center`
/// and rotated by the tilt angle. Tilting right lowers the end of the line.
pub fn tilt_positions(len: usize, center: (i32, i32), tilt_right: bool) -> Vec<(i32, i32)> {
    let slope = TILT_DEGREES.to_radians().tan() * CELL_ASPECT;
    let sign = if tilt_right { 1.0 } else { -1.0 };
    let half = len as i32 / 2;
    (0..len as i32)
        .map(|i| {
            let dx = i - half;
            let dy = (dx as f64 * slope * sign).round() as i32;
            (center.0 + dx, center.1 + dy)
        })
        .collect()
}
