//! Rendering-side model of a 2048 board: directions, grid snapshots, swipe
//! classification and slide-animation layout. The game rules themselves are
//! not here.

pub mod animation;
pub mod direction;
pub mod gesture;
pub mod grid;
pub mod label;
pub mod theme;
pub mod update;

pub use direction::Direction;
pub use grid::{Grid, Position, CELL_COUNT, GRID_SIZE};
pub use update::{Move, MoveUpdate, NewTile};
