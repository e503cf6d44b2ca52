use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// In-bounds Moore neighbors of one cell.
pub type Neighborhood = SmallVec<[Coord2; 8]>;

/// Neighborhood of every cell, built once per board and only read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhoods {
    table: Array2<Neighborhood>,
}

impl Neighborhoods {
    pub fn new(size: Coord2) -> Self {
        let table = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // the shape comes from `size`, so both indices fit in `Coord`
            MooreIter::new((row as Coord, col as Coord), size).collect()
        });
        Self { table }
    }

    pub fn of(&self, coords: Coord2) -> &[Coord2] {
        &self.table[coords.to_nd_index()]
    }
}

/// Writes each tile's adjacent mine count. Runs once, right after placement.
pub(crate) fn compute_adjacency(tiles: &mut Array2<Tile>, neighborhoods: &Neighborhoods) {
    let counts = Array2::from_shape_fn(tiles.dim(), |(row, col)| {
        let coords = (row as Coord, col as Coord);
        neighborhoods
            .of(coords)
            .iter()
            .filter(|&&pos| tiles[pos.to_nd_index()].is_mine())
            .count() as u8
    });
    for (tile, &count) in tiles.iter_mut().zip(counts.iter()) {
        tile.set_adjacent_mines(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles_with_mines(size: Coord2, mines: &[Coord2]) -> Array2<Tile> {
        let mut tiles = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Tile::new((row as Coord, col as Coord))
        });
        for &coords in mines {
            tiles[coords.to_nd_index()].arm();
        }
        tiles
    }

    #[test]
    fn neighborhood_sizes_follow_position() {
        let neighborhoods = Neighborhoods::new((3, 4));
        assert_eq!(neighborhoods.of((0, 0)).len(), 3);
        assert_eq!(neighborhoods.of((0, 1)).len(), 5);
        assert_eq!(neighborhoods.of((1, 1)).len(), 8);
        assert_eq!(neighborhoods.of((2, 3)).len(), 3);
    }

    #[test]
    fn counts_single_corner_mine() {
        let neighborhoods = Neighborhoods::new((3, 3));
        let mut tiles = tiles_with_mines((3, 3), &[(2, 2)]);

        compute_adjacency(&mut tiles, &neighborhoods);

        assert_eq!(tiles[[1, 1]].adjacent_mines(), 1);
        assert_eq!(tiles[[1, 2]].adjacent_mines(), 1);
        assert_eq!(tiles[[2, 1]].adjacent_mines(), 1);
        for coords in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
            assert_eq!(tiles[coords.to_nd_index()].adjacent_mines(), 0);
        }
    }

    #[test]
    fn surrounded_tile_counts_eight() {
        let neighborhoods = Neighborhoods::new((3, 3));
        let ring: alloc::vec::Vec<_> = MooreIter::new((1, 1), (3, 3)).collect();
        let mut tiles = tiles_with_mines((3, 3), &ring);

        compute_adjacency(&mut tiles, &neighborhoods);

        assert_eq!(tiles[[1, 1]].adjacent_mines(), 8);
        assert_eq!(tiles[[0, 0]].adjacent_mines(), 2);
    }
}
