use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Notifications for the presentation layer, in the order they happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileRevealed {
        coords: Coord2,
        is_mine: bool,
        adjacent_mines: u8,
    },
    FlagRemoved {
        coords: Coord2,
    },
    GameWon,
    GameLost,
}
