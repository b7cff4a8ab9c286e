use rand::Rng;

use crate::config::{FOOD_SPAWN_MARGIN, FOOD_SPAWN_MAX_ATTEMPTS, GridSize};
use crate::snake::{Position, Snake};

/// Returns a uniformly random free cell inside the spawn margin, or `None`
/// when the snake covers every such cell.
///
/// Rejection-samples first; after [`FOOD_SPAWN_MAX_ATTEMPTS`] misses it picks
/// from the enumerated free cells instead, which keeps the choice uniform and
/// guarantees termination on a crowded board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let (x_range, y_range) = spawn_ranges(bounds)?;

    for _ in 0..FOOD_SPAWN_MAX_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(x_range.clone()),
            y: rng.gen_range(y_range.clone()),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Position> = y_range
        .flat_map(|y| x_range.clone().map(move |x| Position { x, y }))
        .filter(|position| !snake.occupies(*position))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Returns true when `position` is a legal food cell for `bounds`.
#[must_use]
pub fn in_spawn_area(position: Position, bounds: GridSize) -> bool {
    spawn_ranges(bounds)
        .is_some_and(|(xs, ys)| xs.contains(&position.x) && ys.contains(&position.y))
}

type SpawnRanges = (std::ops::Range<i32>, std::ops::Range<i32>);

fn spawn_ranges(bounds: GridSize) -> Option<SpawnRanges> {
    let xs = FOOD_SPAWN_MARGIN..i32::from(bounds.width) - FOOD_SPAWN_MARGIN;
    let ys = FOOD_SPAWN_MARGIN..i32::from(bounds.height) - FOOD_SPAWN_MARGIN;
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    Some((xs, ys))
}
