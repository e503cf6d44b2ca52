use alloc::vec::{Drain, Vec};
use serde::{Deserialize, Serialize};

use crate::*;
pub use loss::*;

mod chord;
mod flag;
mod loss;
mod reveal;

/// Valid transitions:
/// - Pending -> Active, on the first reveal
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No reveal yet, mines not placed
    #[default]
    Pending,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }

    /// Won and Lost are terminal, no moves are accepted afterwards.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Drives a board from the first reveal to a verdict.
///
/// Commands addressed outside the grid, or issued after the game ended, do
/// nothing. The `try_` variants report why.
#[derive(Clone, Debug)]
pub struct Game<P = RandomMinePlacer> {
    board: Board,
    placer: P,
    events: Vec<GameEvent>,
    loss: Option<LossSequence>,
}

impl Game<RandomMinePlacer> {
    /// Game with random mines drawn from `seed` once the first tile is revealed.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::new(seed))
    }
}

impl Game<MineLayout> {
    /// Game on a predetermined layout, the first reveal is not guaranteed safe.
    pub fn with_layout(layout: MineLayout, exclusion_radius: Coord) -> Result<Self> {
        let config = layout.game_config(exclusion_radius);
        Self::with_placer(config, layout)
    }
}

impl<P: MinePlacer> Game<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
            placer,
            events: Vec::new(),
            loss: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn is_finished(&self) -> bool {
        self.board.state().is_finished()
    }

    pub fn tile_view(&self, coords: Coord2) -> Option<TileView> {
        self.board.tile_view(coords)
    }

    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        !self.is_finished() && self.board.can_chord(coords)
    }

    pub fn observation(&self) -> Observation {
        Observation::from_board(&self.board)
    }

    /// Hands out the events produced so far, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        self.try_reveal_at(coords).unwrap_or_else(|err| {
            log::debug!("Ignored reveal at {:?}: {}", coords, err);
            RevealOutcome::NoChange
        })
    }

    pub fn toggle_flag_at(&mut self, coords: Coord2) -> MarkOutcome {
        self.try_toggle_flag_at(coords).unwrap_or_else(|err| {
            log::debug!("Ignored flag at {:?}: {}", coords, err);
            MarkOutcome::NoChange
        })
    }

    pub fn chord_at(&mut self, coords: Coord2) -> RevealOutcome {
        self.try_chord_at(coords).unwrap_or_else(|err| {
            log::debug!("Ignored chord at {:?}: {}", coords, err);
            RevealOutcome::NoChange
        })
    }

    /// Reveals a tile, placing the mines first if this is the opening move.
    pub fn try_reveal_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.board.check_not_finished()?;

        if self.board.state().is_pending() {
            self.start(coords)?;
        }
        let outcome = self.board.reveal(coords, &mut self.events);
        Ok(self.settle(outcome))
    }

    pub fn try_toggle_flag_at(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.board.check_not_finished()?;

        let outcome = self.board.toggle_flag(coords, &mut self.events);
        self.settle(RevealOutcome::NoChange);
        Ok(outcome)
    }

    pub fn try_chord_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.board.check_not_finished()?;

        let outcome = self.board.chord(coords, &mut self.events);
        Ok(self.settle(outcome))
    }

    /// Whether mines are still waiting to be shown after a loss.
    pub fn is_loss_sequence_running(&self) -> bool {
        self.loss.as_ref().is_some_and(|loss| !loss.is_finished())
    }

    /// Reveals the next remaining mine after a loss, call once per presentation tick.
    pub fn advance_loss_sequence(&mut self) -> LossStep {
        match self.loss.as_mut() {
            Some(loss) => loss.advance(&mut self.board, &mut self.events),
            None => LossStep::Finished,
        }
    }

    /// Quit: stops the post-loss reveal where it is.
    pub fn abort_loss_sequence(&mut self) {
        if let Some(loss) = self.loss.as_mut() {
            loss.abort();
        }
    }

    fn start(&mut self, first: Coord2) -> Result<()> {
        let zone = ExclusionZone::new(first, self.board.exclusion_radius());
        let mine_mask = self
            .placer
            .place(self.board.size(), self.board.mine_count(), zone)?;
        self.board.arm(&mine_mask)?;
        log::debug!(
            "Game started at {:?}, {} mines placed outside radius {}",
            first,
            self.board.mine_count(),
            zone.radius
        );
        Ok(())
    }

    /// Settles the verdict after a command.
    fn settle(&mut self, outcome: RevealOutcome) -> RevealOutcome {
        match self.board.state() {
            GameState::Lost => {
                if self.loss.is_none() {
                    self.loss = Some(LossSequence::start(&mut self.board, &mut self.events));
                }
                outcome
            }
            GameState::Active if self.board.unrevealed_count() == self.board.mine_count() => {
                if self.board.mark_won() {
                    self.events.push(GameEvent::GameWon);
                }
                RevealOutcome::Won
            }
            _ => outcome,
        }
    }
}
