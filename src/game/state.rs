use tracing::{debug, info};

use crate::game::{Board, Cell, Piece, PieceSource};
use crate::{BOARD_H, BOARD_W, LINE_SCORE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Landing,
    GameOver,
}

/// Per-cell tag handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderCell {
    Empty,
    Filled,
    Active,
}

pub struct Game {
    board: Board,
    current: Option<Piece>,
    phase: Phase,
    score: u64,
    lines_cleared: u64,
    game_over: bool,
    source: Box<dyn PieceSource>,
}

impl Game {
    pub fn new(source: impl PieceSource + 'static) -> Self {
        Self::with_board(Board::new(BOARD_W, BOARD_H), source)
    }

    /// Starts on a prepared board, spawning the first piece immediately.
    pub fn with_board(board: Board, source: impl PieceSource + 'static) -> Self {
        let mut game = Self {
            board,
            current: None,
            phase: Phase::Spawning,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            source: Box::new(source),
        };
        game.spawn_piece();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True when any occupied cell leaves the side walls, reaches the floor, or
    /// sits on a filled cell. Rows above the top only get the wall check.
    pub fn collides(&self, piece: &Piece) -> bool {
        let width = self.board.width() as i32;
        let height = self.board.height() as i32;
        piece.cells().into_iter().any(|(x, y)| {
            x < 0 || x >= width || y >= height || (y >= 0 && self.board.is_filled_at(x, y))
        })
    }

    /// Replaces any active piece with a fresh one centered on row 0. A blocked
    /// spawn ends the game and leaves no active piece.
    pub fn spawn_piece(&mut self) {
        if self.game_over {
            return;
        }
        self.phase = Phase::Spawning;
        let shape = self.source.next_shape();
        let x = (self.board.width() / 2) as i32 - 1;
        let piece = Piece::new(shape, x, 0);
        if self.collides(&piece) {
            info!(?shape, score = self.score, "spawn blocked, game over");
            self.current = None;
            self.game_over = true;
            self.phase = Phase::GameOver;
        } else {
            debug!(?shape, x, "spawned piece");
            self.current = Some(piece);
            self.phase = Phase::Falling;
        }
    }

    /// Gravity step.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        let Some(current) = &self.current else {
            return;
        };
        let next = current.shifted(0, 1);
        if self.collides(&next) {
            self.land();
        } else {
            self.current = Some(next);
        }
    }

    pub fn move_down(&mut self) {
        self.tick();
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(current) = &self.current else {
            return false;
        };
        let next = current.shifted(dx, 0);
        if self.collides(&next) {
            return false;
        }
        self.current = Some(next);
        true
    }

    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(current) = &self.current else {
            return false;
        };
        let next = current.rotated();
        if self.collides(&next) {
            return false;
        }
        self.current = Some(next);
        true
    }

    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.current.take() else {
            return;
        };
        loop {
            let next = piece.shifted(0, 1);
            if self.collides(&next) {
                break;
            }
            piece = next;
        }
        self.current = Some(piece);
        self.land();
    }

    fn land(&mut self) {
        self.phase = Phase::Landing;
        self.merge_piece();
        let cleared = self.clear_lines();
        if cleared > 0 {
            debug!(cleared, score = self.score, "cleared lines");
        }
        self.spawn_piece();
    }

    /// Writes the active piece into the board and drops it. Cells above the
    /// top edge are discarded.
    pub fn merge_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 {
                let (xu, yu) = (x as usize, y as usize);
                if xu < self.board.width() && yu < self.board.height() {
                    self.board.set(xu, yu, Cell::Filled);
                }
            }
        }
        debug!(shape = ?piece.shape, x = piece.x, y = piece.y, "merged piece");
    }

    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        self.lines_cleared += cleared as u64;
        self.score += cleared as u64 * LINE_SCORE;
        cleared
    }

    pub fn reset(&mut self) {
        info!(score = self.score, lines = self.lines_cleared, "reset");
        self.board = Board::new(self.board.width(), self.board.height());
        self.current = None;
        self.score = 0;
        self.lines_cleared = 0;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Where the active piece would land if dropped now.
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut ghost = self.current.clone()?;
        loop {
            let next = ghost.shifted(0, 1);
            if self.collides(&next) {
                return Some(ghost);
            }
            ghost = next;
        }
    }

    /// The board with the active piece overlaid, one `Vec` per row.
    pub fn render_cells(&self) -> Vec<Vec<RenderCell>> {
        let mut grid: Vec<Vec<RenderCell>> = self
            .board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Cell::Empty => RenderCell::Empty,
                        Cell::Filled => RenderCell::Filled,
                    })
                    .collect()
            })
            .collect();
        if let Some(piece) = &self.current {
            for (x, y) in piece.cells() {
                if x >= 0 && y >= 0 {
                    let (xu, yu) = (x as usize, y as usize);
                    if yu < grid.len() && xu < self.board.width() {
                        grid[yu][xu] = RenderCell::Active;
                    }
                }
            }
        }
        grid
    }
}
