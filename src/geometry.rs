//! 8-connected neighbourhood geometry for a rectangular grid.

use crate::Tile;

/// Returns the 8-connected neighbours of `(row, col)` on a `height x width`
/// grid, clamped to the grid and excluding the tile itself, in lexicographic
/// order.
///
/// Corners yield 3 neighbours, edges 5, interior tiles 8.
pub fn neighbours(row: usize, col: usize, height: usize, width: usize) -> Vec<Tile> {
    let mut out = Vec::with_capacity(8);
    let row_range = row.saturating_sub(1)..=(row + 1).min(height.saturating_sub(1));
    for r in row_range {
        if r >= height {
            continue;
        }
        let col_range = col.saturating_sub(1)..=(col + 1).min(width.saturating_sub(1));
        for c in col_range {
            if c >= width || (r, c) == (row, col) {
                continue;
            }
            out.push((r, c));
        }
    }
    out
}
