#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// Row-major grid of settled cells. The active piece is never stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// Signed lookup; anything off the board reads as not filled.
    pub fn is_filled_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (xu, yu) = (x as usize, y as usize);
        xu < self.width && yu < self.height && self.get(xu, yu).is_filled()
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.idx(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|c| c.is_filled())
    }

    pub fn fill_row(&mut self, y: usize) {
        for x in 0..self.width {
            self.set(x, y, Cell::Filled);
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Drops every full row and pads the top with empty rows so the grid keeps
    /// its height. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut kept = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            if !self.is_row_full(y) {
                kept.extend_from_slice(self.row(y));
            }
        }
        let cleared = self.height - kept.len() / self.width;
        if cleared == 0 {
            return 0;
        }
        let mut new_cells = vec![Cell::Empty; cleared * self.width];
        new_cells.extend(kept);
        self.cells = new_cells;
        cleared
    }
}
