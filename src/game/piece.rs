#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::L,
        Shape::J,
        Shape::S,
        Shape::Z,
    ];

    /// Spawn orientation bitmap, top row first.
    pub fn template(self) -> &'static [&'static [u8]] {
        const I: &[&[u8]] = &[&[1, 1, 1, 1]];
        const O: &[&[u8]] = &[&[1, 1], &[1, 1]];
        const T: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
        const L: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
        const J: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
        const S: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
        const Z: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

        match self {
            Shape::I => I,
            Shape::O => O,
            Shape::T => T,
            Shape::L => L,
            Shape::J => J,
            Shape::S => S,
            Shape::Z => Z,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub mask: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        let mask = shape
            .template()
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        Self { shape, mask, x, y }
    }

    pub fn rows(&self) -> usize {
        self.mask.len()
    }

    pub fn cols(&self) -> usize {
        self.mask.first().map_or(0, Vec::len)
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(4);
        for (dy, row) in self.mask.iter().enumerate() {
            for (dx, &on) in row.iter().enumerate() {
                if on {
                    out.push((self.x + dx as i32, self.y + dy as i32));
                }
            }
        }
        out
    }

    /// Quarter turn clockwise about the top-left origin: the bounding box is
    /// transposed and `new[i][j] = old[n - 1 - j][i]`.
    pub fn rotated(&self) -> Self {
        let n = self.rows();
        let mask = (0..self.cols())
            .map(|i| (0..n).map(|j| self.mask[n - 1 - j][i]).collect())
            .collect();
        Self {
            shape: self.shape,
            mask,
            x: self.x,
            y: self.y,
        }
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }
}
