use super::board::{Board, BoardEngine};
use super::spawner::TileSource;
use super::types::Direction;
use crate::best_score::BestScoreStore;

pub const INITIAL_SPAWNS: usize = 2;

/// What the presentation adapter consumes from the session. The adapter
/// passes itself (or a small event sink) into each request, the way game
/// sessions hand state updates to a broadcaster.
pub trait SessionObserver {
    fn board_changed(&mut self, board: &Board, score: u32);
    fn game_over(&mut self, final_score: u32, best: u32);
    fn new_game(&mut self);
}

/// One player's game: the engine, the best-score record and the one-way
/// game-over flag. `best` is the only state surviving `request_new_game`.
pub struct GameSession<TTileSource, TBestScoreStore>
where
    TTileSource: TileSource,
    TBestScoreStore: BestScoreStore,
{
    engine: BoardEngine,
    tile_source: TTileSource,
    best_store: TBestScoreStore,
    best: u32,
    game_over: bool,
}

impl<TTileSource, TBestScoreStore> GameSession<TTileSource, TBestScoreStore>
where
    TTileSource: TileSource,
    TBestScoreStore: BestScoreStore,
{
    pub fn create(mut tile_source: TTileSource, best_store: TBestScoreStore) -> Self {
        let best = best_store.load_best();
        let engine = Self::fresh_engine(&mut tile_source);
        Self {
            engine,
            tile_source,
            best_store,
            best,
            game_over: false,
        }
    }

    fn fresh_engine(tile_source: &mut TTileSource) -> BoardEngine {
        let mut engine = BoardEngine::new();
        for _ in 0..INITIAL_SPAWNS {
            if let Some(spawn) = tile_source.spawn(engine.board()) {
                engine.place(spawn);
            }
        }
        engine
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn highest_tile(&self) -> u32 {
        self.engine.highest_tile()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Applies one directional input to completion. Ignored entirely after
    /// game over; a move that changes nothing consumes no spawn and triggers
    /// no terminal check.
    pub fn request_move<TObserver: SessionObserver>(
        &mut self,
        direction: Direction,
        observer: &mut TObserver,
    ) {
        if self.game_over {
            return;
        }

        if !self.engine.apply_move(direction) {
            return;
        }

        // A changed move leaves at least one empty cell (a merge frees one,
        // a pure slide fills none), so the spawn cannot come back empty.
        if let Some(spawn) = self.tile_source.spawn(self.engine.board()) {
            self.engine.place(spawn);
        }

        observer.board_changed(self.engine.board(), self.engine.score());

        if self.engine.is_terminal() {
            self.finish_game(observer);
        }
    }

    pub fn request_new_game<TObserver: SessionObserver>(&mut self, observer: &mut TObserver) {
        self.engine = Self::fresh_engine(&mut self.tile_source);
        self.game_over = false;
        crate::log!("New game started, best {}", self.best);
        observer.new_game();
        observer.board_changed(self.engine.board(), self.engine.score());
    }

    fn finish_game<TObserver: SessionObserver>(&mut self, observer: &mut TObserver) {
        self.game_over = true;
        let final_score = self.engine.score();
        if final_score > self.best {
            self.best = final_score;
            if let Err(err) = self.best_store.save_best(self.best) {
                crate::warn!("Failed to save best score: {}", err);
            }
        }
        crate::log!(
            "Game over, final score {}, highest tile {}, best {}",
            final_score,
            self.engine.highest_tile(),
            self.best
        );
        observer.game_over(final_score, self.best);
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.engine = BoardEngine::with_board(board);
    }
}
