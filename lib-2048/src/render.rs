use std::{cell::RefCell, rc::Rc};

use core_2048::{
    animation::{Animation, Frame, Sprite},
    label,
    theme::Theme,
    Grid, MoveUpdate, GRID_SIZE,
};
use log::debug;

use crate::{
    config::FrontendConfig,
    engine::Engine,
    error::{Error, Result},
    surface::{Line, Rect, Surface},
};

/// Pixel geometry of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f64,
    pub padding: f64,
}

impl Layout {
    pub fn from_config(config: &FrontendConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            padding: config.cell_padding,
        }
    }

    /// Distance between the origins of neighbouring cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + 2.0 * self.padding
    }

    pub fn board_size(&self) -> f64 {
        self.pitch() * GRID_SIZE as f64
    }

    /// Tile rectangle for a position in cell units; fractional positions
    /// land between cells.
    pub fn tile_rect(&self, x: f64, y: f64) -> Rect {
        Rect {
            x: self.pitch() * x + self.padding,
            y: self.pitch() * y + self.padding,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    pub fn grid_lines(&self) -> Vec<Line> {
        let end = self.board_size();

        (0..=GRID_SIZE)
            .map(|i| i as f64 * self.pitch())
            .flat_map(|at| {
                [
                    Line {
                        from: (at, 0.0),
                        to: (at, end),
                    },
                    Line {
                        from: (0.0, at),
                        to: (end, at),
                    },
                ]
            })
            .collect()
    }
}

/// Draws the engine's board every frame and animates the latest move.
///
/// Idle while no update is in flight; animating from `begin` until the
/// elapsed time passes the configured duration.
pub struct Renderer<S, E> {
    surface: S,
    engine: Rc<RefCell<E>>,
    layout: Layout,
    theme: Theme,
    duration: f64,
    animation: Option<Animation>,
    on_update_consumed: Option<Box<dyn FnMut()>>,
}

impl<S, E> Renderer<S, E>
where
    S: Surface,
    E: Engine,
{
    pub fn new(mut surface: S, engine: Rc<RefCell<E>>, config: &FrontendConfig) -> Result<Self> {
        config.validate()?;

        let layout = Layout::from_config(config);
        surface.resize(layout.board_size(), layout.board_size())?;

        Ok(Self {
            surface,
            engine,
            layout,
            theme: Theme::default(),
            duration: config.animation_ms,
            animation: None,
            on_update_consumed: None,
        })
    }

    /// Called once each time an animation runs to completion.
    pub fn on_update_consumed(&mut self, callback: impl FnMut() + 'static) {
        self.on_update_consumed = Some(Box::new(callback));
    }

    /// Starts animating `update`, discarding any animation in progress.
    pub fn begin(&mut self, update: MoveUpdate) {
        if self.animation.is_some() {
            debug!("superseding unfinished animation");
        }

        self.animation = Some(Animation::new(update));
    }

    pub fn cancel(&mut self) {
        self.animation = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Advances the animation clock by `dt` ms and draws one frame. The
    /// clock moves even when the snapshot cannot be read.
    pub fn render_frame(&mut self, dt: f64) -> Result<()> {
        self.advance(dt);

        let grid = self.snapshot()?;

        let frame = match &self.animation {
            Some(animation) => animation.frame(&grid, self.duration),
            None => Frame::still(&grid),
        };

        self.draw_grid()?;
        self.fill_grid(&frame)
    }

    fn advance(&mut self, dt: f64) {
        let finished = match self.animation.as_mut() {
            Some(animation) => {
                animation.advance(dt);
                animation.is_finished(self.duration)
            }
            None => false,
        };

        if finished {
            self.animation = None;
            debug!("animation consumed");

            if let Some(callback) = self.on_update_consumed.as_mut() {
                callback();
            }
        }
    }

    fn snapshot(&self) -> Result<Grid> {
        let engine = self
            .engine
            .try_borrow()
            .map_err(|err| Error::Snapshot(err.to_string()))?;

        engine.cells()
    }

    fn draw_grid(&mut self) -> Result<()> {
        let size = self.layout.board_size();

        self.surface.fill_rect(
            Rect {
                x: 0.0,
                y: 0.0,
                width: size,
                height: size,
            },
            self.theme.background,
        )?;

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let rect = self.layout.tile_rect(col as f64, row as f64);
                self.surface.fill_rect(rect, self.theme.empty)?;
            }
        }

        self.surface
            .stroke_lines(&self.layout.grid_lines(), self.theme.line)
    }

    fn fill_grid(&mut self, frame: &Frame) -> Result<()> {
        for sprite in frame.sprites() {
            self.draw_tile(sprite)?;
        }

        Ok(())
    }

    fn draw_tile(&mut self, sprite: Sprite) -> Result<()> {
        let Some(colors) = self.theme.tile(sprite.value) else {
            return Ok(());
        };

        let rect = self.layout.tile_rect(sprite.x, sprite.y);
        self.surface.fill_rect(rect, colors.fill)?;

        let half = self.layout.cell_size / 2.0;
        self.surface.fill_text(
            &sprite.value.to_string(),
            rect.x + half,
            rect.y + half,
            label::font_size(sprite.value, self.layout.cell_size),
            colors.text,
        )
    }
}
