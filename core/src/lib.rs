#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use observation::*;
pub use placement::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod board;
mod engine;
mod error;
mod event;
mod observation;
mod placement;
mod tile;
mod types;

/// Board dimensions, mine count and the half-width of the first-click safe square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    /// Cells with `|dr| < radius && |dc| < radius` from the first reveal stay mine-free.
    pub exclusion_radius: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(
        rows: Coord,
        cols: Coord,
        mines: CellCount,
        exclusion_radius: Coord,
    ) -> Self {
        Self {
            rows,
            cols,
            mines,
            exclusion_radius,
        }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount, exclusion_radius: Coord) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines, exclusion_radius);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10, 2)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40, 2)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99, 2)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Largest exclusion zone any first reveal can produce on this grid.
    pub fn max_exclusion_cells(&self) -> CellCount {
        let side = (2 * CellCount::from(self.exclusion_radius)).saturating_sub(1);
        let rows = side.min(self.rows.into());
        let cols = side.min(self.cols.into());
        rows.saturating_mul(cols)
    }

    /// Cells guaranteed to be eligible for a mine wherever the first reveal lands.
    pub fn usable_cells(&self) -> CellCount {
        self.total_cells() - self.max_exclusion_cells()
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }
        if self.mines == 0 {
            return Err(ConfigError::NoMines.into());
        }
        if self.exclusion_radius == 0 {
            return Err(ConfigError::ZeroRadius.into());
        }
        let available = self.usable_cells();
        if self.mines > available {
            return Err(ConfigError::TooManyMines {
                requested: self.mines,
                available,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(20, 20, 50, 4)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of a multi-tile reveal, the most severe one wins.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
