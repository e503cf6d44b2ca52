use alloc::vec::Vec;

use crate::*;

impl Board {
    fn count_flagged_neighbors(&self, coords: Coord2) -> usize {
        self.neighbors(coords)
            .iter()
            .filter(|&&pos| self.at(pos).is_flagged())
            .count()
    }

    /// Whether a chord at `coords` would reveal anything.
    pub fn can_chord(&self, coords: Coord2) -> bool {
        let Some(tile) = self.tile(coords) else {
            return false;
        };
        tile.is_revealed()
            && !tile.is_mine()
            && usize::from(tile.adjacent_mines()) == self.count_flagged_neighbors(coords)
            && self.neighbors(coords).iter().any(|&pos| self.at(pos).is_hidden())
    }

    /// Reveals every hidden neighbor of a revealed tile whose flag count matches its number.
    ///
    /// A mismatching count changes nothing. Each neighbor cascades on its own.
    pub(crate) fn chord(&mut self, coords: Coord2, events: &mut Vec<GameEvent>) -> RevealOutcome {
        let tile = self.at(coords);
        if !tile.is_revealed() {
            return RevealOutcome::NoChange;
        }
        if usize::from(tile.adjacent_mines()) != self.count_flagged_neighbors(coords) {
            return RevealOutcome::NoChange;
        }

        let neighbors: Neighborhood = self.neighbors(coords).into();
        // revealed and flagged neighbors are no-ops for `reveal`
        neighbors
            .into_iter()
            .map(|pos| self.reveal(pos, events))
            .fold(RevealOutcome::NoChange, core::ops::BitOr::bitor)
    }
}
