//! Scales the 800x600 field onto terminal cells.

use ratatui::prelude::*;

use crate::game::{Aabb, Bounds, BrickBreaker};

const BACKGROUND: Color = Color::Rgb(10, 10, 20);

const ROW_COLORS: [Color; 5] = [
    Color::Rgb(220, 50, 50),  // Red
    Color::Rgb(220, 130, 30), // Orange
    Color::Rgb(220, 200, 30), // Yellow
    Color::Rgb(50, 200, 50),  // Green
    Color::Rgb(50, 130, 220), // Blue
];

type Grid = Vec<Vec<(char, Style)>>;

/// Cell span covered by `rect`, always at least one cell wide and tall
fn cells(rect: Aabb, sx: f32, sy: f32, w: usize, h: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let x0 = ((rect.left().max(0) as f32) * sx) as usize;
    let x1 = ((rect.right().max(0) as f32) * sx) as usize;
    let y0 = ((rect.top().max(0) as f32) * sy) as usize;
    let y1 = ((rect.bottom().max(0) as f32) * sy) as usize;
    let x0 = x0.min(w);
    let y0 = y0.min(h);
    (x0..x1.max(x0 + 1).min(w), y0..y1.max(y0 + 1).min(h))
}

/// Cell holding the ball's top-left corner. The ball pokes past the left
/// wall and the ceiling for a tick when it bounces; it is pinned to the
/// edge cell then rather than hidden.
fn ball_cell(ball: Aabb, sx: f32, sy: f32, w: usize, h: usize) -> Option<(usize, usize)> {
    let bx = (ball.x.max(0) as f32 * sx) as usize;
    let by = (ball.y.max(0) as f32 * sy) as usize;
    (bx < w && by < h).then_some((bx, by))
}

pub fn lines(game: &BrickBreaker, width: usize, height: usize) -> Vec<Line<'static>> {
    let (w, h) = (width, height);
    let field = game.field();
    let sx = w as f32 / field.width as f32;
    let sy = h as f32 / field.height as f32;

    let mut grid: Grid = vec![vec![(' ', Style::default().bg(BACKGROUND)); w]; h];

    for brick in game.bricks().alive() {
        let color = ROW_COLORS[brick.row % ROW_COLORS.len()];
        let (xs, ys) = cells(brick.bounds(), sx, sy, w, h);
        for y in ys {
            for x in xs.clone() {
                let ch = if x == xs.start {
                    '▐'
                } else if x + 1 == xs.end {
                    '▌'
                } else {
                    '█'
                };
                grid[y][x] = (ch, Style::default().fg(color).bg(BACKGROUND));
            }
        }
    }

    let paddle_style = Style::default()
        .fg(Color::Rgb(180, 200, 255))
        .bg(Color::Rgb(30, 50, 120))
        .add_modifier(Modifier::BOLD);
    let (xs, ys) = cells(game.paddle().bounds(), sx, sy, w, h);
    for y in ys {
        for x in xs.clone() {
            grid[y][x] = ('═', paddle_style);
        }
    }

    // The ball is smaller than a cell at most sizes; draw its top-left cell
    let ball_style = Style::default()
        .fg(Color::Rgb(255, 255, 255))
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD);
    if let Some((bx, by)) = ball_cell(game.ball().bounds(), sx, sy, w, h) {
        grid[by][bx] = ('●', ball_style);
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
