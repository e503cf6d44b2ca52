use serde::{Deserialize, Serialize};

use crate::Coord2;

/// A single grid cell.
///
/// `revealed` and `flagged` are never both set: each transition that would
/// violate this is rejected rather than clearing the other marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    coords: Coord2,
    is_mine: bool,
    adjacent_mines: u8,
    revealed: bool,
    flagged: bool,
}

impl Tile {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            adjacent_mines: 0,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(&self) -> bool {
        !self.revealed && !self.flagged
    }

    pub(crate) fn arm(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    /// Marks the tile revealed, returns `false` when it was already revealed or is flagged.
    pub(crate) fn reveal(&mut self) -> bool {
        if !self.is_hidden() {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Flips the flag, returns the new flag state or `None` on a revealed tile.
    pub(crate) fn toggle_flag(&mut self) -> Option<bool> {
        if self.revealed {
            return None;
        }
        self.flagged = !self.flagged;
        Some(self.flagged)
    }

    pub(crate) fn to_view(self, game_over: bool) -> TileView {
        TileView {
            revealed: self.revealed,
            flagged: self.flagged,
            is_mine: (self.revealed || game_over).then_some(self.is_mine),
            adjacent_mines: self.revealed.then_some(self.adjacent_mines),
        }
    }
}

/// What the player is allowed to know about a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub revealed: bool,
    pub flagged: bool,
    /// Only known once the tile is revealed or the game is over.
    pub is_mine: Option<bool>,
    /// Only known once the tile is revealed.
    pub adjacent_mines: Option<u8>,
}
