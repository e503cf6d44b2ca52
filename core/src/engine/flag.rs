use alloc::vec::Vec;

use crate::*;

impl Board {
    /// Flips the flag on an unrevealed tile; revealed tiles are left alone.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2, events: &mut Vec<GameEvent>) -> MarkOutcome {
        match self.at_mut(coords).toggle_flag() {
            None => MarkOutcome::NoChange,
            Some(true) => {
                self.note_flag(true);
                MarkOutcome::Flagged
            }
            Some(false) => {
                self.note_flag(false);
                events.push(GameEvent::FlagRemoved { coords });
                MarkOutcome::Unflagged
            }
        }
    }
}
