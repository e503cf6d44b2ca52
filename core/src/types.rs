/// Single grid axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, both 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major offsets of the Moore neighborhood, the center excluded.
const MOORE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `offset` to `coords`, returning a value only when it stays inside `size`.
fn offset_within(coords: Coord2, offset: (i8, i8), size: Coord2) -> Option<Coord2> {
    let row = coords.0.checked_add_signed(offset.0)?;
    let col = coords.1.checked_add_signed(offset.1)?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// Iterates the up to 8 in-bounds cells around a center cell.
#[derive(Debug, Clone)]
pub struct MooreIter {
    center: Coord2,
    size: Coord2,
    index: usize,
}

impl MooreIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for MooreIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = MOORE_OFFSETS.get(self.index) {
            self.index += 1;
            if let Some(coords) = offset_within(self.center, offset, self.size) {
                return Some(coords);
            }
        }
        None
    }
}

/// Iterates every cell of a `size` grid in row-major order.
pub fn iter_cells(size: Coord2) -> impl Iterator<Item = Coord2> {
    (0..size.0).flat_map(move |row| (0..size.1).map(move |col| (row, col)))
}
