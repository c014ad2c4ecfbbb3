pub mod peckish;

pub use peckish::Peckish;

use crate::slither::{map::MapView, types::Direction};

pub trait Strategy {
    /// Decides a direction for the current tick. Total: every board state
    /// yields some direction, even a hopeless one.
    fn get_movement(&mut self, view: &dyn MapView) -> Direction;
}
