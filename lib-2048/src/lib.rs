//! Browser-independent half of the 2048 front-end: input dispatch, the
//! animated renderer, frame pacing and high-score persistence, all talking
//! to the game through the `Engine` trait.

pub use core_2048::*;

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod page;
pub mod render;
pub mod scheduler;
pub mod storage;
pub mod surface;

pub use config::FrontendConfig;
pub use dispatch::{InputDispatcher, MoveCallbacks, MoveOutcome};
pub use engine::{Engine, GameState, MoveError};
pub use error::{Error, Result};
pub use page::{PageController, ScoreView};
pub use render::Renderer;
pub use scheduler::{FrameClock, FrameLoop};
pub use storage::{HighScore, KeyValueStore, MemoryStore};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;

    use core_2048::{Direction, Grid, MoveUpdate};

    use crate::{
        engine::{Engine, GameState, MoveError},
        error::{Error, Result},
    };

    /// Replays queued swipe outcomes; an empty queue means every swipe is
    /// illegal.
    #[derive(Debug, Default)]
    pub struct FakeEngine {
        pub grid: Grid,
        pub score: u32,
        pub state: GameState,
        pub outcomes: VecDeque<Result<MoveUpdate, MoveError>>,
        pub swipes: Vec<Direction>,
        pub snapshot_fails: bool,
        pub resets: u32,
    }

    impl FakeEngine {
        pub fn with_grid(grid: Grid) -> Self {
            Self {
                grid,
                ..Self::default()
            }
        }
    }

    impl Engine for FakeEngine {
        fn swipe(&mut self, direction: Direction) -> Result<MoveUpdate, MoveError> {
            self.swipes.push(direction);

            let update = self.outcomes.pop_front().unwrap_or(Err(MoveError::Illegal))?;
            self.score += update.score;

            Ok(update)
        }

        fn cells(&self) -> Result<Grid> {
            if self.snapshot_fails {
                return Err(Error::Snapshot("engine detached".to_string()));
            }

            Ok(self.grid)
        }

        fn score(&self) -> u32 {
            self.score
        }

        fn state(&self) -> GameState {
            self.state
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.grid = Grid::EMPTY;
            self.score = 0;
            self.state = GameState::Ongoing;
        }
    }
}
