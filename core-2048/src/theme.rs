/// Fill and text color for one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileColors {
    pub fill: &'static str,
    pub text: &'static str,
}

const CLASSIC_PALETTE: [TileColors; 7] = [
    TileColors {
        fill: "#eee4da",
        text: "#776e65",
    },
    TileColors {
        fill: "#ede0c8",
        text: "#776e65",
    },
    TileColors {
        fill: "#f2b179",
        text: "#f9f6f2",
    },
    TileColors {
        fill: "#f59563",
        text: "#f9f6f2",
    },
    TileColors {
        fill: "#f67c5f",
        text: "#f9f6f2",
    },
    TileColors {
        fill: "#edcf72",
        text: "#f9f6f2",
    },
    TileColors {
        fill: "#3c3a32",
        text: "#f9f6f2",
    },
];

/// Stateless value-to-color mapping. Tile colors cycle through `palette` by
/// the tile's base-2 exponent, so 2 takes the first entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub line: &'static str,
    pub empty: &'static str,
    pub palette: &'static [TileColors],
}

impl Theme {
    pub const CLASSIC: Self = Self {
        background: "#bbada0",
        line: "#9c8b7c",
        empty: "#cdc1b4",
        palette: &CLASSIC_PALETTE,
    };

    pub const fn tile(&self, value: u32) -> Option<TileColors> {
        if value == 0 || self.palette.is_empty() {
            return None;
        }

        let exponent = value.ilog2() as usize;
        let slot = exponent.saturating_sub(1) % self.palette.len();

        Some(self.palette[slot])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_has_no_tile_colors() {
        assert_eq!(Theme::CLASSIC.tile(0), None);
    }

    #[test]
    fn palette_cycles_by_exponent() {
        let theme = Theme::CLASSIC;
        let len = CLASSIC_PALETTE.len() as u32;

        assert_eq!(theme.tile(2), Some(CLASSIC_PALETTE[0]));
        assert_eq!(theme.tile(4), Some(CLASSIC_PALETTE[1]));
        assert_eq!(theme.tile(1 << len), Some(CLASSIC_PALETTE[len as usize - 1]));
        assert_eq!(theme.tile(1 << (len + 1)), Some(CLASSIC_PALETTE[0]));
    }

    #[test]
    fn one_shares_the_first_slot() {
        assert_eq!(Theme::CLASSIC.tile(1), Theme::CLASSIC.tile(2));
    }

    #[test]
    fn empty_palette_is_tolerated() {
        let theme = Theme {
            palette: &[],
            ..Theme::CLASSIC
        };

        assert_eq!(theme.tile(2), None);
    }
}
