use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::{Game, RenderCell};
use crate::{CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

const FILLED: (char, char) = ('▓', '▓');
const ACTIVE: (char, char) = ('█', '█');
const GHOST: (char, char) = ('·', '·');

#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    pub show_ghost: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}

pub fn draw_game(frame: &mut Frame, game: &Game, view: &ViewOptions) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("STRATOBLOCKS"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("STRATOBLOCKS")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let well_w = PLAY_W as u16;
    let well_h = PLAY_H as u16;

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let info_h = 5u16;
    let controls_h = 5u16;
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(info_h),
            Constraint::Length(well_h),
            Constraint::Length(controls_h),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let mut info_rect = stack[1];
    let well_rect = stack[2];
    let mut controls_rect = stack[3];
    // Widen info/controls boxes slightly while keeping them centered in the cabinet.
    let expand = 4u16;
    let max_right = cabinet_inner.x + cabinet_inner.width;
    let new_x = info_rect.x.saturating_sub(expand).max(cabinet_inner.x);
    let mut new_w = info_rect.width.saturating_add(expand * 2);
    if new_x + new_w > max_right {
        new_w = max_right.saturating_sub(new_x);
    }
    info_rect.x = new_x;
    info_rect.width = new_w;
    controls_rect.x = new_x;
    controls_rect.width = new_w;

    draw_info(frame, game, info_rect);
    draw_playfield(frame, game, view, well_rect);
    draw_controls(frame, controls_rect);
}

/// Character grid for the well, walls included.
pub fn playfield_grid(game: &Game, view: &ViewOptions) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for row in grid.iter_mut().take(PLAY_H - 1).skip(1) {
        row[0] = '│';
        row[PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    let plot_block = |grid: &mut [Vec<char>], bx: usize, by: usize, (left, right): (char, char)| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H - 1 && gx + 1 < PLAY_W - 1 {
            grid[gy][gx] = left;
            grid[gy][gx + 1] = right;
        }
    };

    if view.show_ghost {
        if let Some(ghost) = game.ghost_piece() {
            for (x, y) in ghost.cells() {
                if x >= 0 && y >= 0 {
                    plot_block(&mut grid, x as usize, y as usize, GHOST);
                }
            }
        }
    }

    // Settled and active cells drawn over the ghost.
    for (y, row) in game.render_cells().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            match cell {
                RenderCell::Empty => {}
                RenderCell::Filled => plot_block(&mut grid, x, y, FILLED),
                RenderCell::Active => plot_block(&mut grid, x, y, ACTIVE),
            }
        }
    }

    grid
}

fn draw_playfield(frame: &mut Frame, game: &Game, view: &ViewOptions, play_rect: Rect) {
    let lines: Vec<Line> = playfield_grid(game, view)
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if game.is_game_over() {
        let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w.min(play_rect.width),
            height: overlay_h.min(play_rect.height),
        };
        let overlay = Paragraph::new("GAME OVER\nr reset  q quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = if game.is_game_over() { "OVER" } else { "PLAY" };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", game.score())),
        Line::raw(format!("{:<7} {}", "LINES:", game.lines_cleared())),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(info, inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↓ soft"),
        Line::raw("q/esc quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("↑ rotate"),
        Line::raw("space slam"),
        Line::raw("r reset"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
