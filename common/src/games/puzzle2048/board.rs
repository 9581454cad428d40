use super::line::reduce_line;
use super::types::{BOARD_SIZE, CELL_COUNT, Direction, Position, TileSpawn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [u32; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [u32; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, position: Position) -> u32 {
        self.cells[position.to_index()]
    }

    pub fn set(&mut self, position: Position, value: u32) {
        self.cells[position.to_index()] = value;
    }

    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                if self.get(position) == 0 {
                    positions.push(position);
                }
            }
        }
        positions
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

/// Owns the grid and the score; moves go through [`reduce_line`] so the
/// merge logic lives in exactly one place.
pub struct BoardEngine {
    board: Board,
    score: u32,
}

impl BoardEngine {
    pub fn new() -> Self {
        Self::with_board(Board::empty())
    }

    pub fn with_board(board: Board) -> Self {
        Self { board, score: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    pub fn place(&mut self, spawn: TileSpawn) {
        self.board.set(spawn.position, spawn.value);
    }

    /// Runs the reducer over all four rows or columns. Returns whether any
    /// line changed; board and score are untouched when it returns `false`.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let reversed = matches!(direction, Direction::Right | Direction::Down);
        let mut moved = false;

        match direction {
            Direction::Left | Direction::Right => {
                for row in 0..BOARD_SIZE {
                    let line =
                        std::array::from_fn(|col| self.board.get(Position::new(row, col)));
                    let result = reduce_line(line, reversed);
                    self.score += result.gained;
                    for (col, &value) in result.line.iter().enumerate() {
                        self.board.set(Position::new(row, col), value);
                    }
                    moved |= result.changed;
                }
            }
            Direction::Up | Direction::Down => {
                for col in 0..BOARD_SIZE {
                    let line =
                        std::array::from_fn(|row| self.board.get(Position::new(row, col)));
                    let result = reduce_line(line, reversed);
                    self.score += result.gained;
                    for (row, &value) in result.line.iter().enumerate() {
                        self.board.set(Position::new(row, col), value);
                    }
                    moved |= result.changed;
                }
            }
        }

        moved
    }

    /// True iff the board is full and no two adjacent cells hold equal
    /// values. On a full board no direction can merge anything, so this
    /// check never needs to simulate moves.
    pub fn is_terminal(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.board.get(Position::new(row, col));
                if value == 0 {
                    return false;
                }
                if col + 1 < BOARD_SIZE && value == self.board.get(Position::new(row, col + 1)) {
                    return false;
                }
                if row + 1 < BOARD_SIZE && value == self.board.get(Position::new(row + 1, col)) {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_left_merges_equal() {
        let mut engine = BoardEngine::with_board(Board::from_cells([
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]));
        assert!(engine.apply_move(Direction::Left));
        assert_eq!(engine.board().cells()[0], 4);
        assert_eq!(engine.board().cells()[1], 0);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn test_move_right_reverses_each_row() {
        let mut engine = BoardEngine::with_board(Board::from_cells([
            2, 0, 2, 4,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]));
        assert!(engine.apply_move(Direction::Right));
        assert_eq!(&engine.board().cells()[0..4], &[0, 0, 4, 4]);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn test_move_up_merges_columns() {
        let mut engine = BoardEngine::with_board(Board::from_cells([
            2, 0, 0, 0,
            2, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]));
        assert!(engine.apply_move(Direction::Up));
        assert_eq!(engine.board().cells()[0], 4);
        assert_eq!(engine.board().cells()[4], 0);
    }

    #[test]
    fn test_move_down_merges_toward_bottom() {
        let mut engine = BoardEngine::with_board(Board::from_cells([
            0, 0, 0, 0,
            0, 0, 0, 0,
            2, 0, 0, 0,
            2, 0, 0, 0,
        ]));
        assert!(engine.apply_move(Direction::Down));
        assert_eq!(engine.board().cells()[12], 4);
        assert_eq!(engine.board().cells()[8], 0);
    }

    #[test]
    fn test_row_of_equal_pairs_scores_both_merges() {
        let mut engine = BoardEngine::with_board(Board::from_cells([
            2, 2, 2, 2,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]));
        assert!(engine.apply_move(Direction::Left));
        assert_eq!(&engine.board().cells()[0..4], &[4, 4, 0, 0]);
        assert_eq!(engine.score(), 8);
    }

    #[test]
    fn test_packed_board_move_is_noop() {
        let cells = [
            2, 4, 8, 16,
            4, 8, 16, 32,
            8, 16, 32, 64,
            0, 2, 4, 8,
        ];
        let mut engine = BoardEngine::with_board(Board::from_cells(cells));
        assert!(!engine.apply_move(Direction::Up));
        assert_eq!(engine.board().cells(), &cells);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_repeated_move_without_spawn_is_noop() {
        // Distinct values everywhere, so the first move only packs and the
        // second has nothing left to do.
        let mut engine = BoardEngine::with_board(Board::from_cells([
            2, 0, 4, 0,
            0, 8, 0, 16,
            32, 0, 64, 0,
            0, 128, 0, 256,
        ]));
        for direction in Direction::all() {
            engine.apply_move(direction);
            assert!(
                !engine.apply_move(direction),
                "second {:?} still changed the board",
                direction
            );
        }
    }

    #[test]
    fn test_terminal_checkerboard_full_board() {
        let engine = BoardEngine::with_board(Board::from_cells([
            2, 4, 2, 4,
            4, 2, 4, 2,
            2, 4, 2, 4,
            4, 2, 4, 2,
        ]));
        assert!(engine.is_terminal());
    }

    #[test]
    fn test_not_terminal_with_empty_cell() {
        let engine = BoardEngine::with_board(Board::from_cells([
            2, 4, 2, 4,
            4, 2, 4, 2,
            2, 4, 2, 4,
            4, 2, 4, 0,
        ]));
        assert!(!engine.is_terminal());
    }

    #[test]
    fn test_not_terminal_with_adjacent_pair() {
        let engine = BoardEngine::with_board(Board::from_cells([
            2, 4, 2, 4,
            4, 2, 4, 2,
            2, 4, 8, 8,
            4, 2, 4, 2,
        ]));
        assert!(!engine.is_terminal());
    }

    #[test]
    fn test_move_conserves_tile_mass() {
        let cells = [
            2, 2, 4, 0,
            0, 4, 4, 8,
            16, 16, 0, 2,
            2, 0, 2, 2,
        ];
        let before: u32 = cells.iter().sum();
        for direction in Direction::all() {
            let mut engine = BoardEngine::with_board(Board::from_cells(cells));
            engine.apply_move(direction);
            let after: u32 = engine.board().cells().iter().sum();
            assert_eq!(after, before, "mass changed moving {:?}", direction);
        }
    }

    #[test]
    fn test_empty_positions_and_highest_tile() {
        let board = Board::from_cells([
            2, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 64, 0,
            0, 0, 0, 0,
        ]);
        assert_eq!(board.empty_positions().len(), 14);
        assert_eq!(board.highest_tile(), 64);
    }
}
