//! The game engine as seen from the front-end. Rules, scoring and tile
//! spawning all happen behind this trait.

use core_2048::{Direction, Grid, MoveUpdate};

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Ongoing,
    Over,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The swipe would not change the board.
    #[error("illegal move")]
    Illegal,
    #[error("unexpected engine failure: {0}")]
    Unexpected(String),
}

pub trait Engine {
    fn swipe(&mut self, direction: Direction) -> Result<MoveUpdate, MoveError>;

    fn cells(&self) -> Result<Grid>;

    fn score(&self) -> u32;

    fn state(&self) -> GameState;

    fn reset(&mut self);
}
