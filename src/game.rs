use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOOD_REWARD, GridSize, INITIAL_HEAD, INITIAL_SNAKE_LENGTH};
use crate::food::{in_spawn_area, spawn_position};
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// No free cell was left to place food on.
    BoardFilled,
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was already over; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let snake = initial_snake();
        let mut state = Self {
            food: snake.head(),
            snake,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Restores the starting snake, direction and score and places new food.
    pub fn reset(&mut self) {
        self.snake = initial_snake();
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.spawn_food();
    }

    /// Resets the game if it is over. Returns whether a reset happened.
    pub fn restart(&mut self) -> bool {
        if !self.is_over() {
            return false;
        }

        info!("restarting after game over with score {}", self.score);
        self.reset();
        true
    }

    /// Buffers a direction change for the next tick. Reversals of the
    /// direction in effect are ignored.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.snake.request_direction(direction);
        if !accepted {
            trace!(
                "ignored {direction:?}: reverses {:?}",
                self.snake.direction()
            );
        }
        accepted
    }

    /// Advances simulation by one gameplay tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_over() {
            return StepOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.commit_direction();
        let next_head = self.snake.next_head_position();

        if !next_head.is_within_bounds(self.bounds) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.occupies(next_head) {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if next_head != self.food {
            let _ = self.snake.pop_tail();
            return StepOutcome::Moved;
        }

        self.score += FOOD_REWARD;
        debug!(
            "ate food at ({}, {}); score {} length {}",
            next_head.x,
            next_head.y,
            self.score,
            self.snake.len()
        );

        if !self.spawn_food() {
            return self.end(DeathReason::BoardFilled);
        }

        StepOutcome::Ate
    }

    /// Applies one external input event. Clicks are resolved by the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.change_direction(direction);
            }
            GameInput::Restart => {
                let _ = self.restart();
            }
            GameInput::Click { .. } | GameInput::Quit => {}
        }
    }

    /// Places food on a free interior cell. Returns false when none is left.
    pub fn spawn_food(&mut self) -> bool {
        match spawn_position(&mut self.rng, self.bounds, &self.snake) {
            Some(position) => {
                debug_assert!(in_spawn_area(position, self.bounds));
                debug_assert!(!self.snake.occupies(position));
                self.food = position;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction()
    }

    fn end(&mut self, reason: DeathReason) -> StepOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over: {reason:?}, score {}, length {}, ticks {}",
            self.score,
            self.snake.len(),
            self.tick_count
        );
        StepOutcome::Collided(reason)
    }
}

fn initial_snake() -> Snake {
    let (x, y) = INITIAL_HEAD;
    Snake::new(Position::new(x, y), Direction::Right, INITIAL_SNAKE_LENGTH)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GridSize;
    use crate::input::{Direction, GameInput};

    use super::{DeathReason, GameState, GameStatus, StepOutcome};
    use crate::snake::{Position, Snake};

    const BOARD: GridSize = GridSize {
        width: 40,
        height: 30,
    };

    fn cells(state: &GameState) -> Vec<Position> {
        state.snake.segments().copied().collect()
    }

    #[test]
    fn new_game_starts_with_three_cells_heading_right() {
        let state = GameState::new_with_seed(BOARD, 1);

        assert_eq!(
            cells(&state),
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.is_over());
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut state = GameState::new_with_seed(BOARD, 2);
        state.food = Position::new(6, 5);

        assert_eq!(state.step(), StepOutcome::Ate);

        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
        assert_ne!(state.food, Position::new(6, 5));
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let mut state = GameState::new_with_seed(BOARD, 3);
        state.food = Position::new(20, 20);

        assert_eq!(state.step(), StepOutcome::Moved);

        assert_eq!(
            cells(&state),
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn leaving_left_edge_ends_game_and_freezes_state() {
        let mut state = GameState::new_with_seed(BOARD, 4);
        state.snake = Snake::from_segments(
            vec![Position::new(0, 5), Position::new(1, 5), Position::new(2, 5)],
            Direction::Left,
        );
        state.food = Position::new(20, 20);

        assert_eq!(
            state.step(),
            StepOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));

        let before = cells(&state);
        let food = state.food;
        let ticks = state.tick_count;
        state.change_direction(Direction::Up);
        assert_eq!(state.step(), StepOutcome::Idle);
        assert_eq!(cells(&state), before);
        assert_eq!(state.food, food);
        assert_eq!(state.tick_count, ticks);
    }

    #[test]
    fn collision_leaves_snake_untouched() {
        let mut state = GameState::new_with_seed(BOARD, 5);
        state.snake = Snake::from_segments(
            vec![Position::new(39, 3), Position::new(38, 3)],
            Direction::Right,
        );

        state.step();

        assert!(state.is_over());
        assert_eq!(
            cells(&state),
            vec![Position::new(39, 3), Position::new(38, 3)]
        );
    }

    #[test]
    fn running_into_own_body_ends_game() {
        let mut state = GameState::new_with_seed(BOARD, 6);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Left,
        );
        state.change_direction(Direction::Down);

        assert_eq!(
            state.step(),
            StepOutcome::Collided(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn moving_into_current_tail_cell_counts_as_collision() {
        let mut state = GameState::new_with_seed(BOARD, 7);
        // 2x2 loop: head at (2,2) moving Up hits the tail at (2,1).
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(2, 1),
            ],
            Direction::Right,
        );
        state.change_direction(Direction::Up);

        assert_eq!(
            state.step(),
            StepOutcome::Collided(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn reverse_request_does_not_take_effect() {
        let mut state = GameState::new_with_seed(BOARD, 8);
        state.food = Position::new(20, 20);

        assert!(!state.change_direction(Direction::Left));
        state.step();

        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert!(!state.is_over());
    }

    #[test]
    fn perpendicular_request_turns_on_next_step() {
        let mut state = GameState::new_with_seed(BOARD, 9);
        state.food = Position::new(20, 20);

        state.apply_input(GameInput::Direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Right);
        state.step();

        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake.head(), Position::new(5, 6));
    }

    #[test]
    fn restart_only_works_after_game_over() {
        let mut state = GameState::new_with_seed(BOARD, 10);
        state.food = Position::new(6, 5);
        state.step();
        assert_eq!(state.score, 10);

        assert!(!state.restart());
        assert_eq!(state.score, 10);

        state.status = GameStatus::GameOver;
        state.apply_input(GameInput::Restart);

        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn filling_the_interior_ends_the_game() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };
        let mut state = GameState::new_with_seed(bounds, 11);
        state.snake = Snake::from_segments(
            vec![Position::new(1, 2), Position::new(1, 1), Position::new(2, 1)],
            Direction::Down,
        );
        state.change_direction(Direction::Right);
        state.food = Position::new(2, 2);

        assert_eq!(state.step(), StepOutcome::Collided(DeathReason::BoardFilled));
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn respawned_food_stays_inside_margin_and_off_the_snake() {
        let bounds = GridSize {
            width: 8,
            height: 8,
        };
        let mut state = GameState::new_with_seed(bounds, 12);

        for _ in 0..200 {
            assert!(state.spawn_food());
            assert!((1..=6).contains(&state.food.x));
            assert!((1..=6).contains(&state.food.y));
            assert!(!state.snake.occupies(state.food));
        }
    }

    #[test]
    fn random_play_keeps_body_distinct_and_never_shrinks() {
        let directions = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        for seed in 0..20_u64 {
            let mut state = GameState::new_with_seed(BOARD, seed);
            for tick in 0..400_usize {
                if tick % 3 == 0 {
                    let pick = (seed as usize + tick / 3) % directions.len();
                    state.change_direction(directions[pick]);
                }

                let before = state.snake.len();
                let outcome = state.step();
                match outcome {
                    StepOutcome::Moved => assert_eq!(state.snake.len(), before),
                    StepOutcome::Ate => assert_eq!(state.snake.len(), before + 1),
                    StepOutcome::Collided(_) | StepOutcome::Idle => break,
                }

                let unique: HashSet<Position> = state.snake.segments().copied().collect();
                assert_eq!(unique.len(), state.snake.len());
                assert!(!state.snake.occupies(state.food));
            }
        }
    }
}
