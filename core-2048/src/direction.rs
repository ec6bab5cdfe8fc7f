/// Discriminants follow the engine's numbering, so `direction as u8` is the
/// code the engine expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Left, Self::Right, Self::Up, Self::Down].into_iter()
    }

    /// Maps a DOM `KeyboardEvent.code` to a direction. Only the four arrow
    /// keys are recognised.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowRight" => Some(Self::Right),
            "ArrowLeft" => Some(Self::Left),
            _ => None,
        }
    }
}
