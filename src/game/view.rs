use super::state::{EndReason, GameState, Phase, Position};

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Food,
    Head,
    Body,
}

/// Read-only projection of a game for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub grid_size: usize,
    /// Row-major, `grid_size * grid_size` entries
    pub cells: Vec<CellKind>,
    pub score: u32,
    pub best_score: u32,
    pub phase: Phase,
    pub running: bool,
    pub game_over: bool,
    pub end_reason: Option<EndReason>,
}

impl BoardView {
    pub fn cell(&self, pos: Position) -> CellKind {
        if !pos.is_within(self.grid_size) {
            return CellKind::Empty;
        }
        self.cells[pos.y as usize * self.grid_size + pos.x as usize]
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> &[CellKind] {
        &self.cells[y * self.grid_size..(y + 1) * self.grid_size]
    }
}

impl GameState {
    pub fn view(&self, best_score: u32) -> BoardView {
        let n = self.grid_size;
        let mut cells = vec![CellKind::Empty; n * n];

        let mut mark = |pos: Position, kind: CellKind| {
            if self.is_in_bounds(pos) {
                cells[pos.y as usize * n + pos.x as usize] = kind;
            }
        };

        if let Some(food) = self.food {
            mark(food, CellKind::Food);
        }
        for &segment in self.snake.body_segments() {
            mark(segment, CellKind::Body);
        }
        mark(self.snake.head(), CellKind::Head);

        BoardView {
            grid_size: n,
            cells,
            score: self.score,
            best_score,
            phase: self.phase,
            running: self.is_running(),
            game_over: self.is_game_over(),
            end_reason: self.end_reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};

    fn state() -> GameState {
        let snake = Snake::new(
            vec![Position::new(5, 6), Position::new(4, 6), Position::new(3, 6)],
            Direction::Right,
        );
        GameState::new(snake, Some(Position::new(8, 6)), 12)
    }

    #[test]
    fn test_cells_projection() {
        let view = state().view(4);

        assert_eq!(view.cells.len(), 144);
        assert_eq!(view.cell(Position::new(5, 6)), CellKind::Head);
        assert_eq!(view.cell(Position::new(4, 6)), CellKind::Body);
        assert_eq!(view.cell(Position::new(3, 6)), CellKind::Body);
        assert_eq!(view.cell(Position::new(8, 6)), CellKind::Food);
        assert_eq!(view.cell(Position::new(0, 0)), CellKind::Empty);
        assert_eq!(view.cell(Position::new(12, 6)), CellKind::Empty);
        assert_eq!(view.cell(Position::new(-1, 6)), CellKind::Empty);

        let counts = |kind| view.cells.iter().filter(|&&cell| cell == kind).count();
        assert_eq!(counts(CellKind::Head), 1);
        assert_eq!(counts(CellKind::Body), 2);
        assert_eq!(counts(CellKind::Food), 1);
    }

    #[test]
    fn test_rows_are_row_major() {
        let view = state().view(0);

        assert_eq!(view.row(6)[5], CellKind::Head);
        assert_eq!(view.row(6)[8], CellKind::Food);
        assert!(view.row(0).iter().all(|&cell| cell == CellKind::Empty));
    }

    #[test]
    fn test_flags_and_scores() {
        let mut state = state();
        state.score = 3;
        state.phase = Phase::GameOver(EndReason::Wall);

        let view = state.view(7);

        assert_eq!(view.score, 3);
        assert_eq!(view.best_score, 7);
        assert!(!view.running);
        assert!(view.game_over);
        assert_eq!(view.end_reason, Some(EndReason::Wall));
    }

    #[test]
    fn test_no_food_after_board_full() {
        let mut state = state();
        state.food = None;

        let view = state.view(0);
        assert!(view.cells.iter().all(|&cell| cell != CellKind::Food));
    }
}
