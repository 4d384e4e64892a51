use std::fmt;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Inside a square grid of side `size`
    pub fn is_within(&self, size: usize) -> bool {
        let n = size as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction of the most recent move; the neck lies opposite to it
    pub heading: Direction,
}

impl Snake {
    pub fn new(body: Vec<Position>, heading: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake needs a head");
        Self { body, heading }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position is covered by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front of the snake, dropping the tail unless growing
    pub fn advance(&mut self, new_head: Position, heading: Direction, grow: bool) {
        self.body.insert(0, new_head);
        self.heading = heading;

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake left the board
    Wall,
    /// Snake ran into itself
    SelfCollision,
    /// Snake covers every cell; nothing left to eat
    BoardFull,
}

impl EndReason {
    pub fn is_win(&self) -> bool {
        matches!(self, EndReason::BoardFull)
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh board, waiting for the first input
    Idle,
    Running,
    Paused,
    /// Terminal until the next restart
    GameOver(EndReason),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Pending direction, applied on the next tick
    pub direction: Direction,
    /// `None` only once the snake has filled the board
    pub food: Option<Position>,
    pub phase: Phase,
    pub score: u32,
    pub grid_size: usize,
}

impl GameState {
    /// Create a new, idle game state
    pub fn new(snake: Snake, food: Option<Position>, grid_size: usize) -> Self {
        Self {
            direction: snake.heading,
            snake,
            food,
            phase: Phase::Idle,
            score: 0,
            grid_size,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            Phase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Every in-bounds cell the snake does not cover, in row-major order
    pub fn free_cells(&self) -> Vec<Position> {
        let n = self.grid_size as i32;
        (0..n)
            .flat_map(|y| (0..n).map(move |x| Position::new(x, y)))
            .filter(|&pos| !self.snake.occupies(pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial_snake() -> Snake {
        Snake::new(
            vec![Position::new(5, 6), Position::new(4, 6), Position::new(3, 6)],
            Direction::Right,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(0, 0).is_within(12));
        assert!(Position::new(11, 11).is_within(12));
        assert!(!Position::new(-1, 3).is_within(12));
        assert!(!Position::new(3, 12).is_within(12));
        assert!(!Position::new(0, 0).is_within(0));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = initial_snake();

        snake.advance(Position::new(6, 6), Direction::Right, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 6));
        assert!(!snake.occupies(Position::new(3, 6)));

        snake.advance(Position::new(6, 5), Direction::Up, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.heading, Direction::Up);
        assert_eq!(snake.body_segments()[0], Position::new(6, 6));
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake = initial_snake();
        assert!(snake.occupies(Position::new(5, 6)));
        assert!(snake.occupies(Position::new(3, 6)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(initial_snake(), Some(Position::new(8, 6)), 12);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.direction, Direction::Right);
        assert!(!state.is_running());
        assert!(!state.is_game_over());
        assert_eq!(state.end_reason(), None);
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(initial_snake(), None, 12);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(11, 11)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(12, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 12)));
    }

    #[test]
    fn test_free_cells_exclude_snake() {
        let state = GameState::new(initial_snake(), None, 12);
        let free = state.free_cells();

        assert_eq!(free.len(), 144 - 3);
        assert!(free.iter().all(|&pos| !state.snake.occupies(pos)));
        assert_eq!(free[0], Position::new(0, 0));
    }

    #[test]
    fn test_game_over_reason() {
        let mut state = GameState::new(initial_snake(), None, 12);
        state.phase = Phase::GameOver(EndReason::BoardFull);
        assert!(state.is_game_over());
        assert!(state.end_reason().is_some_and(|reason| reason.is_win()));
    }
}
