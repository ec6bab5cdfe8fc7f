//! Per-frame tile layout for the slide animation.
//!
//! Nothing here is mutated while laying out a frame: the progress of every
//! move is derived from the elapsed time, and finished moves are left out of
//! the frame's sliding list.

use crate::{
    grid::{Grid, Position, CELL_COUNT},
    update::MoveUpdate,
};

/// How a single cell is treated in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    /// Draw the snapshot value (possibly empty).
    Static(u32),
    /// A tile is leaving this cell; it is drawn from the sliding list.
    MoveOrigin,
    /// The freshly spawned tile, hidden until the slide is over.
    NewTile,
    /// A tile is arriving here; the snapshot value would be drawn twice.
    MoveDestination,
}

/// A tile drawn between cells. Coordinates are in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidingTile {
    pub from: Position,
    pub to: Position,
    pub value: u32,
    pub done: f64,
}

impl SlidingTile {
    pub fn position(&self) -> (f64, f64) {
        (
            lerp(self.from.col as f64, self.to.col as f64, self.done),
            lerp(self.from.row as f64, self.to.row as f64, self.done),
        )
    }
}

/// A tile as placed on screen, in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub cells: [CellView; CELL_COUNT],
    pub sliding: Vec<SlidingTile>,
}

impl Frame {
    /// A frame with nothing in motion.
    pub fn still(grid: &Grid) -> Self {
        Self {
            cells: grid.cells().map(CellView::Static),
            sliding: Vec::new(),
        }
    }

    pub fn cell(&self, pos: Position) -> Option<CellView> {
        pos.is_valid().then(|| self.cells[pos.index()])
    }

    /// Static tiles in row-major order, then sliding tiles, so that moving
    /// tiles are painted on top.
    pub fn sprites(&self) -> Vec<Sprite> {
        let statics = Position::all().filter_map(|pos| match self.cells[pos.index()] {
            CellView::Static(value) if value != 0 => Some(Sprite {
                x: pos.col as f64,
                y: pos.row as f64,
                value,
            }),
            _ => None,
        });

        let sliding = self.sliding.iter().map(|tile| {
            let (x, y) = tile.position();
            Sprite {
                x,
                y,
                value: tile.value,
            }
        });

        statics.chain(sliding).collect()
    }
}

/// An in-flight `MoveUpdate` and the time spent animating it, in
/// milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    update: MoveUpdate,
    elapsed: f64,
}

impl Animation {
    pub fn new(update: MoveUpdate) -> Self {
        Self {
            update,
            elapsed: 0.0,
        }
    }

    pub fn update(&self) -> &MoveUpdate {
        &self.update
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Fraction of the slide completed, in `[0, 1]`.
    pub fn progress(&self, duration: f64) -> f64 {
        if duration <= 0.0 {
            return 1.0;
        }

        (self.elapsed / duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, duration: f64) -> bool {
        self.elapsed > duration
    }

    /// Moves still travelling at this point of the animation. Moves with an
    /// out-of-range endpoint are dropped.
    pub fn sliding_tiles(&self, duration: f64) -> Vec<SlidingTile> {
        let done = self.progress(duration);

        self.update
            .moves
            .iter()
            .filter(|m| m.before.is_valid() && m.after.is_valid())
            .map(|m| SlidingTile {
                from: m.before,
                to: m.after,
                value: m.value,
                done,
            })
            .filter(|tile| tile.done < 1.0)
            .collect()
    }

    pub fn frame(&self, grid: &Grid, duration: f64) -> Frame {
        let sliding = self.sliding_tiles(duration);

        let mut cells = [CellView::Static(0); CELL_COUNT];

        for pos in Position::all() {
            cells[pos.index()] = if sliding.iter().any(|tile| tile.from == pos) {
                CellView::MoveOrigin
            } else if self.update.is_new_tile(pos) {
                CellView::NewTile
            } else if sliding.iter().any(|tile| tile.to == pos) {
                CellView::MoveDestination
            } else {
                CellView::Static(grid.cells()[pos.index()])
            };
        }

        Frame { cells, sliding }
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::{Move, NewTile};

    const DURATION: f64 = 100.0;

    fn slide_left_update() -> MoveUpdate {
        MoveUpdate {
            moves: vec![Move {
                before: Position::new(1, 0),
                after: Position::new(0, 0),
                value: 2,
            }],
            new_tile: Some(NewTile {
                position: Position::new(3, 0),
                value: 2,
            }),
            score: 0,
        }
    }

    fn after_slide_left() -> Grid {
        let mut grid = Grid::EMPTY;
        grid.set(Position::new(0, 0), 2);
        grid.set(Position::new(3, 0), 2);
        grid
    }

    #[test]
    fn halfway_tile_sits_at_midpoint() {
        let mut animation = Animation::new(slide_left_update());
        animation.advance(DURATION / 2.0);

        let frame = animation.frame(&after_slide_left(), DURATION);

        assert_eq!(frame.sliding.len(), 1);
        assert_eq!(frame.sliding[0].position(), (0.5, 0.0));
        assert_eq!(frame.cell(Position::new(3, 0)), Some(CellView::NewTile));
        assert_eq!(frame.cell(Position::new(0, 0)), Some(CellView::MoveDestination));
        assert_eq!(frame.cell(Position::new(1, 0)), Some(CellView::MoveOrigin));
        assert_eq!(
            frame.sprites(),
            vec![Sprite {
                x: 0.5,
                y: 0.0,
                value: 2
            }]
        );
    }

    #[test]
    fn progress_is_recomputed_not_accumulated() {
        let mut animation = Animation::new(slide_left_update());
        animation.advance(25.0);

        let grid = after_slide_left();
        let first = animation.frame(&grid, DURATION);
        let second = animation.frame(&grid, DURATION);

        assert_eq!(first, second);
        assert_eq!(first.sliding[0].done, 0.25);
    }

    #[test]
    fn finished_moves_leave_the_sliding_list() {
        let mut animation = Animation::new(slide_left_update());
        animation.advance(DURATION);

        let frame = animation.frame(&after_slide_left(), DURATION);

        assert!(frame.sliding.is_empty());
        assert_eq!(frame.cell(Position::new(0, 0)), Some(CellView::Static(2)));
        assert_eq!(frame.cell(Position::new(3, 0)), Some(CellView::NewTile));
        assert!(!animation.is_finished(DURATION));

        animation.advance(1.0);
        assert!(animation.is_finished(DURATION));
    }

    #[test]
    fn merge_slides_both_tiles_into_one_cell() {
        let update = MoveUpdate {
            moves: vec![
                Move {
                    before: Position::new(2, 1),
                    after: Position::new(0, 1),
                    value: 4,
                },
                Move {
                    before: Position::new(3, 1),
                    after: Position::new(0, 1),
                    value: 4,
                },
            ],
            new_tile: None,
            score: 8,
        };
        let mut grid = Grid::EMPTY;
        grid.set(Position::new(0, 1), 8);

        let animation = Animation::new(update);
        let frame = animation.frame(&grid, DURATION);

        assert_eq!(frame.sliding.len(), 2);
        assert_eq!(frame.cell(Position::new(0, 1)), Some(CellView::MoveDestination));
        assert!(frame.sprites().iter().all(|s| s.value == 4));
    }

    #[test]
    fn invalid_positions_are_ignored() {
        let update = MoveUpdate {
            moves: vec![Move {
                before: Position::new(7, 0),
                after: Position::new(0, 0),
                value: 2,
            }],
            new_tile: None,
            score: 0,
        };

        let frame = Animation::new(update).frame(&after_slide_left(), DURATION);

        assert!(frame.sliding.is_empty());
        assert_eq!(frame.cell(Position::new(0, 0)), Some(CellView::Static(2)));
    }

    #[test]
    fn negative_and_nan_deltas_do_not_rewind() {
        let mut animation = Animation::new(MoveUpdate::default());
        animation.advance(10.0);
        animation.advance(-5.0);
        animation.advance(f64::NAN);

        assert_eq!(animation.elapsed(), 10.0);
    }

    #[test]
    fn still_frame_draws_every_tile() {
        let frame = Frame::still(&after_slide_left());

        assert_eq!(frame.sprites().len(), 2);
        assert!(frame.sliding.is_empty());
    }
}
