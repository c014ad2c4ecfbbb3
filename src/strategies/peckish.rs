//! Greedy one-step strategy: walk toward the nearest food, fall back to a
//! random legal direction when that fails.

use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use super::Strategy;
use crate::slither::{
    map::MapView,
    types::{Coord, Direction},
    utils::manhattan_distance,
};

/// Emitted when no direction at all is legal. Known quirk: the move is
/// commanded even though it is illegal, so a boxed-in snake marches Down
/// into whatever killed its options. Kept until product intent says
/// otherwise; toggle here.
pub const BOXED_IN_DIRECTION: Direction = Direction::Down;

pub struct Peckish<R: Rng> {
    rng: R,
}

impl Peckish<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Peckish<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Peckish<R> {
    /// Seats a caller-supplied generator, e.g. a seeded `StdRng` in tests.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn random_legal(&mut self, view: &dyn MapView) -> Direction {
        let legal: Vec<Direction> = Direction::iter()
            .copied()
            .filter(|direction| view.can_move(*direction))
            .collect();

        legal
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(BOXED_IN_DIRECTION)
    }
}

/// Nearest food by Manhattan distance. Ties go to whichever coordinate the
/// map lists first, so determinism follows the supplied ordering.
fn nearest_food(view: &dyn MapView) -> Option<Coord> {
    let here = view.my_position();
    view.food()
        .iter()
        .copied()
        .min_by_key(|food| manhattan_distance(*food, here))
}

/// Up to two directions that close the gap to `target`, horizontal first.
fn directions_toward(target: Coord, here: Coord) -> Vec<Direction> {
    let mut candidates = Vec::with_capacity(2);
    if target.x > here.x {
        candidates.push(Direction::Right);
    } else if target.x < here.x {
        candidates.push(Direction::Left);
    }
    if target.y > here.y {
        candidates.push(Direction::Down);
    } else if target.y < here.y {
        candidates.push(Direction::Up);
    }
    candidates
}

impl<R: Rng> Strategy for Peckish<R> {
    fn get_movement(&mut self, view: &dyn MapView) -> Direction {
        match nearest_food(view) {
            Some(target) => directions_toward(target, view.my_position())
                .into_iter()
                .find(|direction| view.can_move(*direction))
                .unwrap_or_else(|| self.random_legal(view)),
            None => self.random_legal(view),
        }
    }
}
