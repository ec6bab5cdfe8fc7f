//! Tile label sizing.

/// Font size ratio for one-digit labels.
pub const SINGLE_DIGIT_RATIO: f64 = 0.75;
/// Lower bound for the ratio; the linear rule reaches zero at seven digits.
pub const MIN_FONT_RATIO: f64 = 0.15;

const BASE_RATIO: f64 = 0.9;
const RATIO_PER_DIGIT: f64 = 0.14;

pub fn digit_count(value: u32) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// Font size as a fraction of the cell size.
pub fn font_ratio(value: u32) -> f64 {
    match digit_count(value) {
        1 => SINGLE_DIGIT_RATIO,
        digits => (BASE_RATIO - RATIO_PER_DIGIT * f64::from(digits)).max(MIN_FONT_RATIO),
    }
}

pub fn font_size(value: u32, cell_size: f64) -> f64 {
    font_ratio(value) * cell_size
}
