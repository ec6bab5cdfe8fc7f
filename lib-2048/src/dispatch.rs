//! Keyboard and touch input turned into engine moves.

use std::{cell::RefCell, rc::Rc};

use core_2048::{
    gesture::{GestureTracker, Point},
    Direction, MoveUpdate,
};
use log::{debug, error, warn};

use crate::engine::{Engine, MoveError};

/// Optional hooks around a move attempt. Either, both or neither may be set.
#[derive(Default)]
pub struct MoveCallbacks {
    /// Fires with the engine's update after an accepted move, never after an
    /// illegal or failed one.
    pub on_move_success: Option<Box<dyn FnMut(MoveUpdate)>>,
    /// Fires after every attempt, whatever the outcome.
    pub after_move: Option<Box<dyn FnMut()>>,
}

impl MoveCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move_success(mut self, callback: impl FnMut(MoveUpdate) + 'static) -> Self {
        self.on_move_success = Some(Box::new(callback));
        self
    }

    pub fn after_move(mut self, callback: impl FnMut() + 'static) -> Self {
        self.after_move = Some(Box::new(callback));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Illegal,
    Failed,
}

pub struct InputDispatcher<E> {
    engine: Rc<RefCell<E>>,
    gesture: GestureTracker,
    callbacks: MoveCallbacks,
}

impl<E> InputDispatcher<E>
where
    E: Engine,
{
    pub fn new(engine: Rc<RefCell<E>>, callbacks: MoveCallbacks) -> Self {
        Self {
            engine,
            gesture: GestureTracker::new(),
            callbacks,
        }
    }

    /// Handles a released key. Returns `None` for anything but an arrow key.
    pub fn key_up(&mut self, code: &str) -> Option<MoveOutcome> {
        let direction = Direction::from_key_code(code)?;

        Some(self.attempt_move(direction))
    }

    pub fn touch_start(&mut self, point: Point) {
        self.gesture.start(point);
    }

    /// Classifies the gesture started by the last `touch_start`. A `Some`
    /// result means the event was consumed and its default action should be
    /// prevented.
    pub fn touch_move(&mut self, point: Point) -> Option<MoveOutcome> {
        let direction = self.gesture.classify(point)?;

        Some(self.attempt_move(direction))
    }

    pub fn touch_cancel(&mut self) {
        self.gesture.cancel();
    }

    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.swipe(direction),
            Err(err) => Err(MoveError::Unexpected(err.to_string())),
        };

        let outcome = match result {
            Ok(update) => {
                debug!(
                    "{direction:?}: {} tiles moved, +{}",
                    update.moves.len(),
                    update.score
                );

                if let Some(callback) = self.callbacks.on_move_success.as_mut() {
                    callback(update);
                }

                MoveOutcome::Moved
            }
            Err(MoveError::Illegal) => MoveOutcome::Illegal,
            Err(err) => {
                error!("{direction:?} failed: {err}");
                MoveOutcome::Failed
            }
        };

        if let Some(callback) = self.callbacks.after_move.as_mut() {
            callback();
        }

        outcome
    }

    pub fn is_tracking_gesture(&self) -> bool {
        self.gesture.is_tracking()
    }

    pub fn reset_gesture(&mut self) {
        if self.gesture.is_tracking() {
            warn!("dropping unfinished gesture");
        }

        self.gesture.cancel();
    }
}
