//! The session-client boundary: one callback per server event, and a
//! [`Player`] that answers map updates with moves.

use log::{debug, info};

use crate::{
    slither::{
        map::MapSnapshot,
        models::{
            GameEnded, GameSettings, GameStarting, InvalidPlayerName,
            MapUpdate, PlayerRegistered, RegisterMove, SnakeDead,
        },
    },
    strategies::Strategy,
};

/// Callbacks delivered by the session client, one per server event. Only
/// `on_map_update` carries decision logic; the rest are notifications and
/// default to no-ops. `on_connected` hands the transport the settings to
/// register with.
pub trait SnakeEvents {
    fn on_connected(&mut self) -> GameSettings;

    /// Decides the move for one tick. `None` means no move is registered for
    /// that tick.
    fn on_map_update(&mut self, event: &MapUpdate) -> Option<RegisterMove>;

    fn on_player_registered(&mut self, _event: &PlayerRegistered) {}
    fn on_invalid_player_name(&mut self, _event: &InvalidPlayerName) {}
    fn on_game_starting(&mut self, _event: &GameStarting) {}
    fn on_snake_dead(&mut self, _event: &SnakeDead) {}
    fn on_game_ended(&mut self, _event: &GameEnded) {}
    fn on_session_closed(&mut self) {}
}

/// A playing snake: a strategy plus the session bookkeeping around it.
/// Stateless across ticks apart from the registered player id.
pub struct Player<S: Strategy> {
    strategy:  S,
    settings:  GameSettings,
    player_id: Option<String>,
}

impl<S: Strategy> Player<S> {
    pub fn new(strategy: S, settings: GameSettings) -> Self {
        Self {
            strategy,
            settings,
            player_id: None,
        }
    }
}

impl<S: Strategy> SnakeEvents for Player<S> {
    fn on_connected(&mut self) -> GameSettings {
        info!("connected, registering for a game");
        self.settings.clone()
    }

    fn on_map_update(&mut self, event: &MapUpdate) -> Option<RegisterMove> {
        let player_id = self
            .player_id
            .as_deref()
            .unwrap_or(&event.receiving_player_id);

        let snapshot = MapSnapshot::new(&event.map, player_id)?;
        let direction = self.strategy.get_movement(&snapshot);

        Some(RegisterMove {
            game_tick: event.game_tick,
            direction,
        })
    }

    fn on_player_registered(&mut self, event: &PlayerRegistered) {
        info!("registered as {} ({})", event.name, event.player_id);
        self.player_id = Some(event.player_id.clone());
    }

    fn on_invalid_player_name(&mut self, event: &InvalidPlayerName) {
        info!("player name rejected: {}", event.reason);
    }

    fn on_game_starting(&mut self, event: &GameStarting) {
        debug!(
            "game {} starting with {} players",
            event.game_id, event.noof_players
        );
    }

    fn on_snake_dead(&mut self, event: &SnakeDead) {
        info!(
            "snake {} died by {} on tick {}",
            event.player_id, event.death_reason, event.game_tick
        );
    }

    fn on_game_ended(&mut self, event: &GameEnded) {
        debug!(
            "game {} ended, winner: {}",
            event.game_id,
            event.player_winner_id.as_deref().unwrap_or("nobody")
        );
    }

    fn on_session_closed(&mut self) {
        info!("session closed");
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        slither::{
            models::{Map, SnakeInfo},
            types::{Coord, Direction},
        },
        strategies::Peckish,
    };

    fn player() -> Player<Peckish<StdRng>> {
        Player::new(
            Peckish::with_rng(StdRng::seed_from_u64(7)),
            GameSettings::default(),
        )
    }

    fn update(map: Map, game_tick: u64) -> MapUpdate {
        MapUpdate {
            game_id: "g-1".to_owned(),
            receiving_player_id: "me".to_owned(),
            game_tick,
            map,
        }
    }

    fn lone_snake_map(head: Coord, food: Vec<Coord>) -> Map {
        Map {
            width: 10,
            height: 10,
            food_positions: food,
            obstacle_positions: vec![],
            snake_infos: vec![SnakeInfo {
                id: "me".to_owned(),
                name: "peckish".to_owned(),
                points: 0,
                positions: vec![head],
            }],
        }
    }

    #[test]
    fn move_echoes_the_event_tick() {
        let map = lone_snake_map(Coord { x: 5, y: 5 }, vec![Coord { x: 5, y: 2 }]);
        let mov = player().on_map_update(&update(map, 42)).unwrap();
        assert_eq!(mov.game_tick, 42);
        assert_eq!(mov.direction, Direction::Up);
    }

    #[test]
    fn no_move_when_we_are_not_on_the_map() {
        let mut map = lone_snake_map(Coord { x: 5, y: 5 }, vec![]);
        map.snake_infos[0].id = "somebody-else".to_owned();
        assert!(player().on_map_update(&update(map, 1)).is_none());
    }

    #[test]
    fn registered_id_overrides_the_receiving_id() {
        let mut me = player();
        me.on_player_registered(&PlayerRegistered {
            player_id: "assigned".to_owned(),
            name:      "peckish".to_owned(),
        });

        let mut map = lone_snake_map(Coord { x: 5, y: 5 }, vec![]);
        map.snake_infos[0].id = "assigned".to_owned();
        assert!(me.on_map_update(&update(map, 1)).is_some());
    }
}
