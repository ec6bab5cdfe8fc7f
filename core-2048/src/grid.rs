use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 4;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell address. Serialized as a `[col, row]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub const fn from_index(idx: usize) -> Self {
        Self {
            col: idx % GRID_SIZE,
            row: idx / GRID_SIZE,
        }
    }

    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub const fn is_valid(self) -> bool {
        self.col < GRID_SIZE && self.row < GRID_SIZE
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.col, pos.row)
    }
}

/// Snapshot of the engine's board. `0` is an empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [u32; CELL_COUNT],
}

impl Grid {
    pub const EMPTY: Self = Self {
        cells: [0; CELL_COUNT],
    };

    pub const fn from_cells(cells: [u32; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a grid from a row-major slice, which must hold exactly
    /// `CELL_COUNT` values.
    pub fn from_slice(cells: &[u32]) -> Option<Self> {
        cells.try_into().ok().map(Self::from_cells)
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        pos.is_valid().then(|| self.cells[pos.index()])
    }

    pub fn set(&mut self, pos: Position, value: u32) {
        if pos.is_valid() {
            self.cells[pos.index()] = value;
        }
    }

    pub const fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            for (i, &value) in row.iter().enumerate() {
                if i != 0 {
                    f.write_str(" ")?;
                }

                if value == 0 {
                    write!(f, "{:>5}", "_")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
