use alloc::vec::Vec;

use crate::*;

/// Result of advancing the post-loss mine reveal by one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LossStep {
    Revealed(Coord2),
    Finished,
}

/// Paced reveal of the remaining mines after a loss.
///
/// Starting the sequence strips every wrong flag at once. Each `advance` then
/// reveals the next unrevealed mine in row-major order, removing its flag
/// first, so the presentation layer can show one mine per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LossSequence {
    cursor: usize,
    done: bool,
}

impl LossSequence {
    pub(crate) fn start(board: &mut Board, events: &mut Vec<GameEvent>) -> Self {
        let wrong_flags: Vec<Coord2> = board
            .tiles()
            .filter(|tile| tile.is_flagged() && !tile.is_mine())
            .map(|tile| tile.coords())
            .collect();
        log::debug!("Loss sequence started, removing {} wrong flags", wrong_flags.len());
        for coords in wrong_flags {
            board.toggle_flag(coords, events);
        }
        Self {
            cursor: 0,
            done: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    pub(crate) fn advance(&mut self, board: &mut Board, events: &mut Vec<GameEvent>) -> LossStep {
        let (rows, cols) = board.size();
        let (rows, cols) = (usize::from(rows), usize::from(cols));

        while !self.done && self.cursor < rows * cols {
            // cursor < rows * cols, so both parts fit in `Coord`
            let coords = ((self.cursor / cols) as Coord, (self.cursor % cols) as Coord);
            self.cursor += 1;

            let tile = board.at(coords);
            if !tile.is_mine() || tile.is_revealed() {
                continue;
            }
            if tile.is_flagged() {
                board.toggle_flag(coords, events);
            }
            board.reveal(coords, events);
            log::trace!("Loss sequence revealed mine at {:?}", coords);
            return LossStep::Revealed(coords);
        }

        self.done = true;
        LossStep::Finished
    }

    /// Stops the sequence, leaving the remaining mines hidden.
    pub(crate) fn abort(&mut self) {
        if !self.done {
            log::debug!("Loss sequence aborted");
        }
        self.done = true;
    }
}
