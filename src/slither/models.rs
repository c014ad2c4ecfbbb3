//! Wire models for the game server's JSON events. Inbound payloads derive
//! `Deserialize`, outbound ones `Serialize`; the transport layer that moves
//! them over the socket lives outside this crate.

use serde::{Deserialize, Serialize};

use crate::slither::types::{Coord, Direction};

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameMode {
    Training,
    Tournament,
}

/// Settings the bot registers with at session start. Opaque to the decision
/// logic; legality always comes from the per-tick map.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub width:            u32,
    pub height:           u32,
    pub max_noof_players: u32,
    pub game_mode:        GameMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width:            25,
            height:           25,
            max_noof_players: 5,
            game_mode:        GameMode::Training,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnakeInfo {
    pub id:        String,
    pub name:      String,
    pub points:    u64,
    /// Body segments, head first. Empty once the snake is dead.
    pub positions: Vec<Coord>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    pub width:              i64,
    pub height:             i64,
    pub food_positions:     Vec<Coord>,
    pub obstacle_positions: Vec<Coord>,
    pub snake_infos:        Vec<SnakeInfo>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MapUpdate {
    pub game_id:             String,
    pub receiving_player_id: String,
    pub game_tick:           u64,
    pub map:                 Map,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRegistered {
    pub player_id: String,
    pub name:      String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameStarting {
    pub game_id:       String,
    pub noof_players:  u32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnakeDead {
    pub player_id:    String,
    pub death_reason: String,
    pub game_tick:    u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameEnded {
    pub game_id:          String,
    pub player_winner_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InvalidPlayerName {
    pub reason: String,
}

/// The one outbound decision message: which way to go on which tick.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMove {
    pub game_tick: u64,
    pub direction: Direction,
}
