use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::Shape;

/// Supplies the shape of each freshly spawned piece.
pub trait PieceSource {
    fn next_shape(&mut self) -> Shape;
}

/// Uniform pick among the seven templates.
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceSource for RandomSource<R> {
    fn next_shape(&mut self) -> Shape {
        *Shape::ALL.choose(&mut self.rng).unwrap_or(&Shape::I)
    }
}

/// Replays a fixed list of shapes, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    shapes: Vec<Shape>,
    next: usize,
}

impl SequenceSource {
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        let mut shapes = shapes.into();
        if shapes.is_empty() {
            shapes.push(Shape::I);
        }
        Self { shapes, next: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}
