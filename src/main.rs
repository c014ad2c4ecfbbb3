//! Local training pit: drives a [`Player`] through the full session event
//! lifecycle against a simulated board, rendering each tick to the console.
//! Stands in for the networked session client during development.

use std::{collections::VecDeque, thread, time::Duration};

use color_eyre::{eyre::eyre, Result};
use log::info;
use rand::{rngs::ThreadRng, Rng};
use snakebot_peckish::{
    session::{Player, SnakeEvents},
    slither::{
        models::{
            GameEnded, GameSettings, GameStarting, Map, MapUpdate,
            PlayerRegistered, SnakeDead, SnakeInfo,
        },
        types::{Coord, Direction},
    },
    strategies::Peckish,
};

const GAME_ID: &str = "training-pit";
const PLAYER_ID: &str = "peckish-1";
const PLAYER_NAME: &str = "peckish";
const FOOD_COUNT: usize = 3;
const MAX_TICKS: u64 = 500;
const TICK_DELAY: Duration = Duration::from_millis(75);

struct Pit {
    width:  i64,
    height: i64,
    body:   VecDeque<Coord>,
    food:   Vec<Coord>,
    points: u64,
    rng:    ThreadRng,
}

impl Pit {
    fn new(width: i64, height: i64) -> Self {
        let mut pit = Self {
            width,
            height,
            body: VecDeque::from([Coord {
                x: width / 2,
                y: height / 2,
            }]),
            food: Vec::new(),
            points: 0,
            rng: rand::thread_rng(),
        };
        for _ in 0..FOOD_COUNT {
            pit.spawn_food();
        }
        pit
    }

    fn spawn_food(&mut self) {
        loop {
            let coord = Coord {
                x: self.rng.gen_range(0..self.width),
                y: self.rng.gen_range(0..self.height),
            };
            if !self.body.contains(&coord) && !self.food.contains(&coord) {
                self.food.push(coord);
                return;
            }
        }
    }

    fn map(&self) -> Map {
        Map {
            width:              self.width,
            height:             self.height,
            food_positions:     self.food.clone(),
            obstacle_positions: vec![],
            snake_infos:        vec![SnakeInfo {
                id:        PLAYER_ID.to_owned(),
                name:      PLAYER_NAME.to_owned(),
                points:    self.points,
                positions: self.body.iter().copied().collect(),
            }],
        }
    }

    /// Applies one move, returning the death reason if it was fatal.
    fn apply(&mut self, direction: Direction) -> Option<&'static str> {
        let head = self.body.front().copied()?.neighbour(direction);

        if head.x < 0 || head.y < 0 || head.x >= self.width || head.y >= self.height {
            return Some("WallCollision");
        }
        if self.body.contains(&head) {
            return Some("SnakeCollision");
        }

        self.body.push_front(head);
        if let Some(index) = self.food.iter().position(|food| *food == head) {
            // eat and grow; the tail stays put this tick
            self.food.swap_remove(index);
            self.points += 1;
            self.spawn_food();
        } else {
            self.body.pop_back();
        }
        None
    }

    fn render(&self, tick: u64) {
        println!("tick {tick}, {} points", self.points);
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = Coord { x, y };
                if self.body.front() == Some(&coord) {
                    print!("@");
                } else if self.body.contains(&coord) {
                    print!("#");
                } else if self.food.contains(&coord) {
                    print!("*");
                } else {
                    print!(".");
                }
            }
            println!();
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let mut player = Player::new(Peckish::new(), GameSettings::default());

    let settings = player.on_connected();
    info!(
        "training pit is {}x{}, up to {} players, mode {:?}",
        settings.width, settings.height, settings.max_noof_players, settings.game_mode
    );

    player.on_player_registered(&PlayerRegistered {
        player_id: PLAYER_ID.to_owned(),
        name:      PLAYER_NAME.to_owned(),
    });
    player.on_game_starting(&GameStarting {
        game_id:      GAME_ID.to_owned(),
        noof_players: 1,
    });

    let mut pit = Pit::new(i64::from(settings.width), i64::from(settings.height));
    let mut winner = Some(PLAYER_ID.to_owned());

    for tick in 0..MAX_TICKS {
        pit.render(tick);

        let update = MapUpdate {
            game_id:             GAME_ID.to_owned(),
            receiving_player_id: PLAYER_ID.to_owned(),
            game_tick:           tick,
            map:                 pit.map(),
        };

        let mov = player
            .on_map_update(&update)
            .ok_or_else(|| eyre!("player produced no move while still alive"))?;
        info!("tick {}: moving {}", mov.game_tick, mov.direction);

        if let Some(death_reason) = pit.apply(mov.direction) {
            player.on_snake_dead(&SnakeDead {
                player_id:    PLAYER_ID.to_owned(),
                death_reason: death_reason.to_owned(),
                game_tick:    tick,
            });
            winner = None;
            break;
        }

        thread::sleep(TICK_DELAY);
    }

    player.on_game_ended(&GameEnded {
        game_id:          GAME_ID.to_owned(),
        player_winner_id: winner,
    });
    player.on_session_closed();

    Ok(())
}
