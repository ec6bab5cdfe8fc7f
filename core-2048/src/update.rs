use serde::{Deserialize, Serialize};

use crate::grid::Position;

/// One tile sliding from `before` to `after`. Two moves sharing an `after`
/// describe a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub before: Position,
    pub after: Position,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTile {
    pub position: Position,
    pub value: u32,
}

/// What one accepted swipe did to the board, as reported by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveUpdate {
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default, alias = "newTile")]
    pub new_tile: Option<NewTile>,
    #[serde(default)]
    pub score: u32,
}

impl MoveUpdate {
    pub fn is_new_tile(&self, pos: Position) -> bool {
        self.new_tile.is_some_and(|tile| tile.position == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_payload() {
        let json = r#"{
            "moves": [
                { "before": [1, 0], "after": [0, 0], "value": 2 },
                { "before": [3, 2], "after": [0, 2], "value": 8 }
            ],
            "newTile": { "position": [3, 0], "value": 2 },
            "score": 0
        }"#;

        let update: MoveUpdate = serde_json::from_str(json).unwrap();

        assert_eq!(update.moves.len(), 2);
        assert_eq!(update.moves[1].before, Position::new(3, 2));
        assert!(update.is_new_tile(Position::new(3, 0)));
        assert!(!update.is_new_tile(Position::new(0, 0)));
    }

    #[test]
    fn missing_fields_default() {
        let update: MoveUpdate = serde_json::from_str(r#"{ "new_tile": null }"#).unwrap();

        assert_eq!(update, MoveUpdate::default());
    }
}
