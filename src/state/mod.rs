mod board;
mod gesture;
mod selection;

pub use board::{Board, DEFAULT_FILL, DEFAULT_SHAPE_SIZE};
pub use gesture::GestureState;
pub use selection::Selection;
