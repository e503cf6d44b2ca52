use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Square region around the first reveal that must stay mine-free.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExclusionZone {
    pub center: Coord2,
    pub radius: Coord,
}

impl ExclusionZone {
    pub const fn new(center: Coord2, radius: Coord) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row.abs_diff(self.center.0) < self.radius && col.abs_diff(self.center.1) < self.radius
    }

    /// Number of in-bounds cells covered by the zone.
    pub fn cell_count(&self, size: Coord2) -> CellCount {
        iter_cells(size)
            .filter(|&coords| self.contains(coords))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

/// Decides where the mines go once the first reveal is known.
pub trait MinePlacer {
    /// Returns a `size` mask with exactly `mines` cells set.
    fn place(&mut self, size: Coord2, mines: CellCount, zone: ExclusionZone) -> Result<Array2<bool>>;
}

/// Uniformly random placement outside the exclusion zone.
///
/// Eligible cells are shuffled and the first `mines` are taken, so placement
/// finishes in bounded time whenever enough cells are eligible.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&mut self, size: Coord2, mines: CellCount, zone: ExclusionZone) -> Result<Array2<bool>> {
        let mut eligible: Vec<Coord2> = iter_cells(size).filter(|&c| !zone.contains(c)).collect();
        if eligible.len() < usize::from(mines) {
            return Err(ConfigError::TooManyMines {
                requested: mines,
                available: eligible.len().try_into().unwrap_or(CellCount::MAX),
            }
            .into());
        }

        let (chosen, _) = eligible.partial_shuffle(&mut self.rng, mines.into());
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in chosen.iter() {
            mask[coords.to_nd_index()] = true;
        }
        Ok(mask)
    }
}

/// Predetermined mine positions, used for replays and tests.
///
/// The exclusion zone is not honored, a layout that mines it only logs a warning.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::LayoutMismatch);
        }
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::LayoutMismatch)?;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        // bounded by `from_mine_mask`
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.to_nd_index()]
    }

    /// Configuration for a game played on this layout.
    pub fn game_config(&self, exclusion_radius: Coord) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count, exclusion_radius)
    }
}

impl MinePlacer for MineLayout {
    fn place(&mut self, size: Coord2, mines: CellCount, zone: ExclusionZone) -> Result<Array2<bool>> {
        if size != self.size() || mines != self.mine_count {
            return Err(GameError::LayoutMismatch);
        }
        if iter_cells(size).any(|coords| zone.contains(coords) && self.contains_mine(coords)) {
            log::warn!(
                "Fixed layout places a mine inside the exclusion zone around {:?}",
                zone.center
            );
        }
        Ok(self.mine_mask.clone())
    }
}
