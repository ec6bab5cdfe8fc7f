//! Frame pacing. The host calls `FrameLoop::frame` once per display refresh
//! with its timestamp and reschedules unconditionally.

use std::{cell::RefCell, rc::Rc};

use log::{info, warn};

use crate::{engine::Engine, render::Renderer, surface::Surface};

/// Turns absolute frame timestamps (ms) into deltas.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Time since the previous tick. The first tick, and any timestamp that
    /// goes backwards, yields 0.
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        dt
    }
}

pub struct FrameLoop<S, E> {
    clock: FrameClock,
    renderer: Rc<RefCell<Renderer<S, E>>>,
    failing: bool,
}

impl<S, E> FrameLoop<S, E>
where
    S: Surface,
    E: Engine,
{
    pub fn new(renderer: Rc<RefCell<Renderer<S, E>>>) -> Self {
        Self {
            clock: FrameClock::new(),
            renderer,
            failing: false,
        }
    }

    /// Runs one frame. Errors are logged once per streak and swallowed.
    /// Returns whether the frame was drawn.
    pub fn frame(&mut self, now: f64) -> bool {
        let dt = self.clock.tick(now);

        let result = match self.renderer.try_borrow_mut() {
            Ok(mut renderer) => renderer.render_frame(dt),
            Err(err) => {
                warn!("renderer busy, skipping frame: {err}");
                return false;
            }
        };

        match result {
            Ok(()) => {
                if self.failing {
                    info!("rendering recovered");
                    self.failing = false;
                }

                true
            }
            Err(err) => {
                if !self.failing {
                    warn!("skipping frame: {err}");
                    self.failing = true;
                }

                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core_2048::{Grid, Position};

    use super::*;
    use crate::{config::FrontendConfig, surface::Recorder, test_support::FakeEngine};

    #[test]
    fn clock_deltas() {
        let mut clock = FrameClock::new();

        assert_eq!(clock.tick(1000.0), 0.0);
        assert_eq!(clock.tick(1016.0), 16.0);
        assert_eq!(clock.tick(1010.0), 0.0);
        assert_eq!(clock.tick(1020.0), 10.0);
    }

    #[test]
    fn loop_survives_snapshot_failures() {
        let engine = Rc::new(RefCell::new(FakeEngine::default()));
        engine.borrow_mut().snapshot_fails = true;
        let renderer = Rc::new(RefCell::new(
            Renderer::new(Recorder::new(), engine.clone(), &FrontendConfig::default()).unwrap(),
        ));
        let mut frames = FrameLoop::new(renderer.clone());

        assert!(!frames.frame(0.0));
        assert!(!frames.frame(16.0));

        let mut grid = Grid::EMPTY;
        grid.set(Position::new(0, 0), 2);
        {
            let mut engine = engine.borrow_mut();
            engine.snapshot_fails = false;
            engine.grid = grid;
        }

        assert!(frames.frame(32.0));
        assert_eq!(renderer.borrow().surface().texts().count(), 1);
    }

    #[test]
    fn busy_renderer_skips_the_frame() {
        let engine = Rc::new(RefCell::new(FakeEngine::default()));
        let renderer = Rc::new(RefCell::new(
            Renderer::new(Recorder::new(), engine, &FrontendConfig::default()).unwrap(),
        ));
        let mut frames = FrameLoop::new(renderer.clone());

        let _held = renderer.borrow_mut();

        assert!(!frames.frame(0.0));
    }
}
