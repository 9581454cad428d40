use super::board::Board;
use super::types::TileSpawn;
use crate::games::session_rng::SessionRng;

/// The only source of non-determinism in the game. Tests substitute a
/// scripted implementation.
pub trait TileSource {
    fn spawn(&mut self, board: &Board) -> Option<TileSpawn>;
}

pub struct RandomTileSource {
    rng: SessionRng,
}

impl RandomTileSource {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn from_random() -> Self {
        Self::new(SessionRng::from_random())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl TileSource for RandomTileSource {
    fn spawn(&mut self, board: &Board) -> Option<TileSpawn> {
        let empty = board.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let position = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_range(0..10) == 0 { 4 } else { 2 };
        Some(TileSpawn { position, value })
    }
}
