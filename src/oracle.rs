//! The solvability oracle (spec.md §4.6): does a fully-known board admit a
//! first click from which every safe tile is reachable by pure deduction,
//! with no guessing?

use crate::error::Result;
use crate::presets::Version;
use crate::sweeper::Sweeper;

/// Returns whether `shadow_board` is solvable without guessing from
/// `(first_row, first_col)`.
///
/// `shadow_board[row][col]` is the true bomb count for a safe tile, or
/// negative for a bomb. Runs a fresh [`Sweeper`] through a reveal/deduce
/// loop: reveal every tile the solver has already certified safe, recompute
/// the board, and repeat until no new safe tile appears. The board is
/// solvable iff every non-bomb tile was eventually revealed this way.
///
/// Assumes `shadow_board` is rectangular and that `(first_row, first_col)`
/// names a non-bomb tile; callers generating boards should uphold both.
pub fn is_solvable(shadow_board: &[Vec<i32>], first_row: usize, first_col: usize) -> Result<bool> {
    let height = shadow_board.len();
    let width = shadow_board.first().map_or(0, Vec::len);
    let bombs = shadow_board.iter().flatten().filter(|&&v| v < 0).count() as u32;

    let mut sweeper = Sweeper::new(Version::Classic, height, width, bombs);
    let mut squares_left = (height * width) as i64 - i64::from(bombs);
    let mut safe_tiles = vec![(first_row, first_col)];

    while !safe_tiles.is_empty() {
        for &(row, col) in &safe_tiles {
            let info = shadow_board[row][col];
            sweeper.integrate_new_info(row, col, &info.to_string())?;
            squares_left -= 1;
        }
        sweeper.calculate_board();
        safe_tiles = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r, c)))
            .filter(|&(r, c)| sweeper.board(r, c) == "S")
            .collect();
    }

    Ok(squares_left == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // No bombs anywhere: every "0" cascades open all of its neighbours, and
    // the chain reaction clears the whole board from a single click.
    #[test]
    fn bomb_free_board_cascades_open_and_is_solvable() {
        let shadow = vec![vec![0, 0], vec![0, 0]];
        assert!(is_solvable(&shadow, 0, 0).unwrap());
    }

    // One bomb tucked in the opposite corner of a 2x2 board: the first
    // click's "1" spreads the bomb evenly over the other 3 tiles (each a
    // genuine 33%, per the identical 2x2 scenario in sweeper.rs), so no
    // further tile is ever forced open.
    #[test]
    fn two_by_two_single_bomb_is_a_pure_guess_and_not_solvable() {
        let shadow = vec![vec![1, 1], vec![1, -1]];
        assert!(!is_solvable(&shadow, 0, 0).unwrap());
    }

    #[test]
    fn single_safe_tile_no_bombs_is_trivially_solvable() {
        let shadow = vec![vec![0]];
        assert!(is_solvable(&shadow, 0, 0).unwrap());
    }
}
