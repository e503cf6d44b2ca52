use alloc::vec;
use alloc::vec::Vec;

use crate::*;

impl Board {
    /// Reveals `start`, flooding outwards through zero-count tiles.
    ///
    /// Numbered tiles are revealed but stop the flood. A flagged or already
    /// revealed start is a no-op. The whole flood runs before returning.
    pub(crate) fn reveal(&mut self, start: Coord2, events: &mut Vec<GameEvent>) -> RevealOutcome {
        if !self.reveal_tile(start, events) {
            return RevealOutcome::NoChange;
        }
        if self.at(start).is_mine() {
            if self.mark_lost(start) {
                events.push(GameEvent::GameLost);
            }
            return RevealOutcome::HitMine;
        }

        // tiles are marked revealed when pushed, so each one is queued at most once
        let mut worklist = vec![start];
        while let Some(coords) = worklist.pop() {
            if self.at(coords).adjacent_mines() != 0 || self.state().is_lost() {
                continue;
            }

            let neighbors: Neighborhood = self.neighbors(coords).into();
            for neighbor in neighbors {
                if !self.reveal_tile(neighbor, events) {
                    continue;
                }
                if self.at(neighbor).is_mine() {
                    if self.mark_lost(neighbor) {
                        events.push(GameEvent::GameLost);
                    }
                } else {
                    worklist.push(neighbor);
                }
            }
        }

        RevealOutcome::Revealed
    }

    /// Reveals exactly one tile without cascading, returns whether it changed.
    fn reveal_tile(&mut self, coords: Coord2, events: &mut Vec<GameEvent>) -> bool {
        let tile = self.at_mut(coords);
        if !tile.reveal() {
            return false;
        }
        let (is_mine, adjacent_mines) = (tile.is_mine(), tile.adjacent_mines());
        self.note_revealed();
        log::trace!("Revealed tile at {:?}, adjacent mines: {}", coords, adjacent_mines);
        events.push(GameEvent::TileRevealed {
            coords,
            is_mine,
            adjacent_mines,
        });
        true
    }
}
