mod board;
mod line;
mod session;
mod spawner;
mod types;

pub use board::{Board, BoardEngine};
pub use line::{LineResult, reduce_line};
pub use session::{GameSession, SessionObserver};
pub use spawner::{RandomTileSource, TileSource};
pub use types::{BOARD_SIZE, CELL_COUNT, Direction, Position, TileSpawn};
