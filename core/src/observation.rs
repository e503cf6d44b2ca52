use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything the player can see, for layers that redraw the whole grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub size: Coord2,
    pub state: GameState,
    pub mines_left: isize,
    pub tiles: Array2<TileView>,
}

impl Observation {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let game_over = board.state().is_finished();
        let mut tiles: Array2<TileView> = Array2::default(size.to_nd_index());
        for tile in board.tiles() {
            tiles[tile.coords().to_nd_index()] = tile.to_view(game_over);
        }

        Self {
            size,
            state: board.state(),
            mines_left: board.mines_left(),
            tiles,
        }
    }

    pub fn view(&self, coords: Coord2) -> Option<TileView> {
        let (rows, cols) = self.size;
        (coords.0 < rows && coords.1 < cols).then(|| self.tiles[coords.to_nd_index()])
    }
}
