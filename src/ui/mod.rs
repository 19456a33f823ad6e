mod render;

pub use render::{ViewOptions, draw_game, playfield_grid};
