//! Fixed-size tile grid with permissive bounds handling
//!
//! The grid is a thin state container: reads outside the rectangle return the
//! [`Tile::void`] sentinel and writes outside it are discarded. It performs no
//! other validation; the tool operations decide which tiles are legal to store.

use ndarray::Array2;

use crate::io::configuration::{MAP_HEIGHT, MAP_WIDTH};
use crate::spatial::tile::Tile;

/// Row-major `width x height` array of tiles
///
/// Backed by an `Array2` indexed `(row, col)`, i.e. `(y, x)`. Always fully
/// populated; the dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<Tile>,
}

impl TileGrid {
    /// Create a grid with a grass border and a dirt interior
    pub fn new(width: usize, height: usize) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            let on_border = row == 0 || col == 0 || row + 1 == height || col + 1 == width;
            if on_border { Tile::grass() } else { Tile::dirt() }
        });
        Self { cells }
    }

    /// Wrap a pre-built array (rows = height, cols = width)
    pub(crate) fn from_cells(cells: Array2<Tile>) -> Self {
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Check whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some((row, col))
    }

    /// Read a tile by value, or the void sentinel when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or_else(Tile::void)
    }

    /// Replace a tile; out-of-bounds writes are silently discarded
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(cell) = self
            .index(x, y)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = tile;
        }
    }

    /// Iterate `(x, y, tile)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), tile)| (col as i32, row as i32, *tile))
    }

    /// Borrow the tiles of one row, if it exists
    pub fn row(&self, y: usize) -> Option<impl Iterator<Item = &Tile> + '_> {
        (y < self.height()).then(|| self.cells.row(y).into_iter())
    }

    /// Count tiles satisfying a predicate
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Tile) -> bool,
    {
        self.cells.iter().filter(|tile| predicate(tile)).count()
    }

    /// Apply `update` to every stored tile in row-major order
    pub(crate) fn update_each<F>(&mut self, mut update: F)
    where
        F: FnMut(i32, i32, &mut Tile),
    {
        for ((row, col), tile) in self.cells.indexed_iter_mut() {
            update(col as i32, row as i32, tile);
        }
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}
