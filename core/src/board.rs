use ndarray::Array2;

use crate::*;

/// The grid and everything known about it; the single source of truth for a game.
///
/// Tiles never touch each other, every mutation goes through the board's
/// reveal, chord, flag and loss routines.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    tiles: Array2<Tile>,
    neighborhoods: Neighborhoods,
    state: GameState,
    unrevealed: CellCount,
    flagged: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size();
        Ok(Self {
            config,
            tiles: Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
                Tile::new((row as Coord, col as Coord))
            }),
            neighborhoods: Neighborhoods::new(size),
            state: GameState::default(),
            unrevealed: config.total_cells(),
            flagged: 0,
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn exclusion_radius(&self) -> Coord {
        self.config.exclusion_radius
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.unrevealed
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        let coords = self.validate_coords(coords).ok()?;
        Some(&self.tiles[coords.to_nd_index()])
    }

    pub fn tile_view(&self, coords: Coord2) -> Option<TileView> {
        self.tile(coords)
            .map(|tile| tile.to_view(self.state.is_finished()))
    }

    /// Moore neighbors of `coords`, empty when it lies outside the grid.
    pub fn neighbors(&self, coords: Coord2) -> &[Coord2] {
        match self.validate_coords(coords) {
            Ok(coords) => self.neighborhoods.of(coords),
            Err(_) => &[],
        }
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn at(&self, coords: Coord2) -> &Tile {
        &self.tiles[coords.to_nd_index()]
    }

    pub(crate) fn at_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[coords.to_nd_index()]
    }

    pub(crate) fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    /// Lays the mines and computes adjacency, moving the game from pending to active.
    pub(crate) fn arm(&mut self, mine_mask: &Array2<bool>) -> Result<()> {
        if !self.state.is_pending() {
            return Err(GameError::AlreadyEnded);
        }
        if mine_mask.dim() != self.tiles.dim() {
            return Err(GameError::LayoutMismatch);
        }
        let placed = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if placed != usize::from(self.config.mines) {
            return Err(GameError::LayoutMismatch);
        }

        for (tile, &is_mine) in self.tiles.iter_mut().zip(mine_mask.iter()) {
            if is_mine {
                tile.arm();
            }
        }
        compute_adjacency(&mut self.tiles, &self.neighborhoods);
        self.state = GameState::Active;
        Ok(())
    }

    pub(crate) fn note_revealed(&mut self) {
        self.unrevealed -= 1;
    }

    pub(crate) fn note_flag(&mut self, flagged: bool) {
        if flagged {
            self.flagged += 1;
        } else {
            self.flagged -= 1;
        }
    }

    /// Latches the loss; later calls are ignored.
    pub(crate) fn mark_lost(&mut self, coords: Coord2) -> bool {
        if self.state.is_finished() {
            return false;
        }
        log::debug!("Mine revealed at {:?}, game lost", coords);
        self.state = GameState::Lost;
        self.triggered_mine = Some(coords);
        true
    }

    pub(crate) fn mark_won(&mut self) -> bool {
        if !matches!(self.state, GameState::Active) {
            return false;
        }
        log::debug!("All safe tiles revealed, game won");
        self.state = GameState::Won;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Board {
        Board::new(GameConfig::new_unchecked(3, 3, 1, 1)).unwrap()
    }

    #[test]
    fn new_board_is_pending_and_blank() {
        let board = board_3x3();

        assert_eq!(board.state(), GameState::Pending);
        assert_eq!(board.unrevealed_count(), 9);
        assert!(board.tiles().all(|tile| tile.is_hidden() && !tile.is_mine()));
    }

    #[test]
    fn new_board_rejects_invalid_config() {
        assert_eq!(
            Board::new(GameConfig::new_unchecked(3, 3, 9, 1)),
            Err(GameError::InvalidConfig(ConfigError::TooManyMines {
                requested: 9,
                available: 8,
            }))
        );
    }

    #[test]
    fn out_of_range_tile_is_none() {
        let board = board_3x3();
        assert!(board.tile((3, 0)).is_none());
        assert!(board.tile_view((0, 3)).is_none());
        assert_eq!(board.validate_coords((2, 2)), Ok((2, 2)));
    }

    #[test]
    fn arm_sets_mines_and_counts_once() {
        let mut board = board_3x3();
        let mut mask: Array2<bool> = Array2::default([3, 3]);
        mask[[2, 2]] = true;

        board.arm(&mask).unwrap();

        assert_eq!(board.state(), GameState::Active);
        assert!(board.at((2, 2)).is_mine());
        assert_eq!(board.at((1, 1)).adjacent_mines(), 1);
        assert_eq!(board.arm(&mask), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn arm_rejects_wrong_mine_count() {
        let mut board = board_3x3();
        let mask: Array2<bool> = Array2::default([3, 3]);

        assert_eq!(board.arm(&mask), Err(GameError::LayoutMismatch));
        assert_eq!(board.state(), GameState::Pending);
    }

    #[test]
    fn loss_is_latched() {
        let mut board = board_3x3();
        assert!(board.mark_lost((0, 0)));
        assert!(!board.mark_lost((1, 1)));
        assert_eq!(board.triggered_mine(), Some((0, 0)));
        assert!(!board.mark_won());
    }
}
