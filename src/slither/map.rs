//! Read-only per-tick view of the board from one player's perspective.

use crate::slither::{
    models::Map,
    types::{Coord, Direction},
};

/// Everything a strategy is allowed to see for a single tick: where it is,
/// where the food is, and whether a given direction is open. Implementations
/// must not carry state between ticks.
pub trait MapView {
    fn my_position(&self) -> Coord;
    fn food(&self) -> &[Coord];
    fn can_move(&self, direction: Direction) -> bool;
}

/// `MapView` over a wire [`Map`], anchored to one player's snake.
pub struct MapSnapshot<'a> {
    map:         &'a Map,
    my_position: Coord,
}

impl<'a> MapSnapshot<'a> {
    /// Returns `None` when the player has no snake on the map (dead or not
    /// part of this game), in which case there is no move to make.
    #[must_use]
    pub fn new(map: &'a Map, player_id: &str) -> Option<Self> {
        let my_position = map
            .snake_infos
            .iter()
            .find(|snake| snake.id == player_id)
            .and_then(|snake| snake.positions.first())
            .copied()?;

        Some(Self { map, my_position })
    }

    fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.map.width
            && coord.y < self.map.height
    }

    fn blocked(&self, coord: Coord) -> bool {
        self.map.obstacle_positions.contains(&coord)
            || self
                .map
                .snake_infos
                .iter()
                .any(|snake| snake.positions.contains(&coord))
    }
}

impl MapView for MapSnapshot<'_> {
    fn my_position(&self) -> Coord {
        self.my_position
    }

    fn food(&self) -> &[Coord] {
        &self.map.food_positions
    }

    fn can_move(&self, direction: Direction) -> bool {
        let target = self.my_position.neighbour(direction);
        self.contains(target) && !self.blocked(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slither::models::SnakeInfo;

    fn snake(id: &str, positions: Vec<Coord>) -> SnakeInfo {
        SnakeInfo {
            id: id.to_owned(),
            name: id.to_owned(),
            points: 0,
            positions,
        }
    }

    fn three_by_three(snakes: Vec<SnakeInfo>, obstacles: Vec<Coord>) -> Map {
        Map {
            width: 3,
            height: 3,
            food_positions: vec![],
            obstacle_positions: obstacles,
            snake_infos: snakes,
        }
    }

    #[test]
    fn walls_obstacles_and_bodies_are_illegal() {
        // me in the top-left corner, my body trailing right, a rock below.
        let map = three_by_three(
            vec![snake(
                "me",
                vec![Coord { x: 0, y: 0 }, Coord { x: 1, y: 0 }],
            )],
            vec![Coord { x: 0, y: 1 }],
        );
        let view = MapSnapshot::new(&map, "me").unwrap();

        assert!(!view.can_move(Direction::Up), "wall above");
        assert!(!view.can_move(Direction::Left), "wall to the left");
        assert!(!view.can_move(Direction::Right), "own body");
        assert!(!view.can_move(Direction::Down), "obstacle");
    }

    #[test]
    fn open_cells_are_legal() {
        let map =
            three_by_three(vec![snake("me", vec![Coord { x: 1, y: 1 }])], vec![]);
        let view = MapSnapshot::new(&map, "me").unwrap();

        for direction in Direction::iter() {
            assert!(view.can_move(*direction));
        }
    }

    #[test]
    fn other_snakes_block_movement() {
        let map = three_by_three(
            vec![
                snake("me", vec![Coord { x: 0, y: 1 }]),
                snake("them", vec![Coord { x: 1, y: 1 }, Coord { x: 2, y: 1 }]),
            ],
            vec![],
        );
        let view = MapSnapshot::new(&map, "me").unwrap();

        assert!(!view.can_move(Direction::Right));
        assert!(view.can_move(Direction::Up));
    }

    #[test]
    fn missing_or_dead_player_yields_no_snapshot() {
        let map = three_by_three(vec![snake("them", vec![Coord { x: 1, y: 1 }])], vec![]);
        assert!(MapSnapshot::new(&map, "me").is_none());

        let map = three_by_three(vec![snake("me", vec![])], vec![]);
        assert!(MapSnapshot::new(&map, "me").is_none());
    }
}
